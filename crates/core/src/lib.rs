//! Core types for game-log containers
//!
//! This crate defines the building blocks shared by every log format:
//! - Error: error taxonomy and `Result` alias
//! - Limits: decode-time size limits
//! - varint: base-128 variable-length integers
//! - BytePool: deduplicating store for variable-length payload data
//! - LogWriter / LogReader: wire primitives handed to event variants
//! - GameLogEvent: the contract every event variant implements
//! - EventRegistry: variant <-> tag mapping for one log format
//! - GameLogSequence: ordered, timestamped events

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod limits;
pub mod pool;
pub mod registry;
pub mod sequence;
pub mod stream;
pub mod varint;

pub use error::{CodecError, Error, Result};
pub use event::{default_factory, EventFactory, GameLogEvent};
pub use limits::{LimitError, Limits};
pub use pool::BytePool;
pub use registry::{EventRegistry, EventRegistryBuilder, UNREGISTERED_TAG};
pub use sequence::{now_secs, GameLogSequence, TimedEvent};
pub use stream::{LogReader, LogWriter};
