//! Container encoding for game logs
//!
//! This crate turns a [`GameLogSequence`](gamelog_core::GameLogSequence) into
//! bytes and back:
//! - record: tag, timestamp and payload of one event
//! - container: pool header followed by every record
//! - compression: whole-container block codecs (zstd, identity)
//! - config: codec selection and decode limits
//! - creator: registry + config bound into a reusable entry point

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compression;
pub mod config;
pub mod container;
pub mod creator;
pub mod record;


pub use compression::{get_codec, CodecError, CompressionCodec, IdentityCodec, ZstdCodec};
pub use config::{ConfigError, ContainerConfig};
pub use container::{decode_container, encode_container};
pub use creator::GameLogCreator;
pub use record::{decode_record, encode_record};
