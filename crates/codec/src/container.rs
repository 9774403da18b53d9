//! Container assembly
//!
//! # Container Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ Pool header                        │
//! │   pool_size: i32                   │
//! │   (length: i32, bytes)*            │
//! ├────────────────────────────────────┤
//! │ Record 1                           │
//! ├────────────────────────────────────┤
//! │ ...                                │
//! ├────────────────────────────────────┤
//! │ Record N                           │
//! └────────────────────────────────────┘
//! ```
//!
//! The header comes first on the wire but is built last: records are
//! encoded into per-record buffers that share one pool, and the pool is
//! only complete once every record has been written.

use gamelog_core::{BytePool, EventRegistry, GameLogSequence, Limits, LogReader, Result};
use tracing::debug;

use crate::record::{decode_record, encode_record};

/// Encode `sequence` into an uncompressed container.
///
/// The sequence is sorted chronologically in place first.
pub fn encode_container(
    registry: &EventRegistry,
    sequence: &mut GameLogSequence,
) -> Result<Vec<u8>> {
    sequence.sort_chronologically();

    let mut pool = BytePool::new();
    let mut records = Vec::new();
    for record in sequence.iter() {
        let bytes = encode_record(registry, record, &mut pool)?;
        records.extend_from_slice(&bytes);
    }

    let mut container = Vec::with_capacity(pool.header_len() + records.len());
    pool.write_header(&mut container)?;
    container.extend_from_slice(&records);

    debug!(
        registry = registry.name(),
        events = sequence.len(),
        pool_entries = pool.len(),
        header_bytes = pool.header_len(),
        total_bytes = container.len(),
        "Encoded game log container"
    );
    Ok(container)
}

/// Decode an uncompressed container.
///
/// Records are read until the input is exhausted. Any malformed byte fails
/// the whole call; no partial sequence is returned.
pub fn decode_container(
    registry: &EventRegistry,
    data: &[u8],
    limits: &Limits,
) -> Result<GameLogSequence> {
    let mut input = data;
    let pool = BytePool::read_header(&mut input, limits)?;

    let mut reader = LogReader::new(input, &pool);
    let mut sequence = GameLogSequence::new();
    while !reader.is_empty() {
        limits.validate_record_count(sequence.len() + 1)?;
        let record = decode_record(registry, &mut reader)?;
        sequence.append(record.event, Some(record.timestamp));
    }

    debug!(
        registry = registry.name(),
        events = sequence.len(),
        pool_entries = pool.len(),
        total_bytes = data.len(),
        "Decoded game log container"
    );
    Ok(sequence)
}
