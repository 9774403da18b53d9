//! Record encoding and decoding
//!
//! # Record Layout
//!
//! ```text
//! ┌─────────────────┬──────────────────────┬──────────────────────────┐
//! │ Tag (i32 BE)    │ Timestamp (varlong)  │ Payload (variant-defined)│
//! └─────────────────┴──────────────────────┴──────────────────────────┘
//! ```
//!
//! Records carry no length prefix and no checksum. The payload ends where
//! the variant's `read_from` stops reading.

use gamelog_core::{
    BytePool, EventRegistry, LogReader, LogWriter, Result, TimedEvent, UNREGISTERED_TAG,
};
use tracing::{trace, warn};

/// Encode one event into its own buffer, pooling into `pool`.
///
/// An unregistered variant is still written, under [`UNREGISTERED_TAG`];
/// decoding such a container fails with `UnknownEventId`.
pub fn encode_record(
    registry: &EventRegistry,
    record: &TimedEvent,
    pool: &mut BytePool,
) -> Result<Vec<u8>> {
    let event = record.event.as_ref();
    let tag = registry.tag_for(event);
    if tag == UNREGISTERED_TAG {
        warn!(
            registry = registry.name(),
            variant = event.event_name(),
            "Encoding event variant that is not registered"
        );
    }

    let mut writer = LogWriter::new(pool);
    writer.write_i32(tag)?;
    writer.write_varlong(record.timestamp)?;
    event.write_to(&mut writer)?;

    trace!(
        tag,
        timestamp = record.timestamp,
        variant = event.event_name(),
        len = writer.len(),
        "Encoded record"
    );
    Ok(writer.into_bytes())
}

/// Decode the next record from `reader`.
pub fn decode_record(registry: &EventRegistry, reader: &mut LogReader<'_>) -> Result<TimedEvent> {
    let tag = reader.read_i32()?;
    let timestamp = reader.read_varlong()?;

    let mut event = registry.decode_factory(tag)?;
    event.read_from(reader)?;

    trace!(tag, timestamp, variant = event.event_name(), "Decoded record");
    Ok(TimedEvent::new(timestamp, event))
}
