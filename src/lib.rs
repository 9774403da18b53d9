//! Gamelog - compact binary container for timestamped game events
//!
//! A game log is an ordered sequence of typed, timestamped events (chat,
//! kills, bed breaks, ...). Variable-length data is deduplicated into a
//! shared pool, records are tagged with small integers from a per-format
//! registry, and the whole container can be compressed.
//!
//! # Quick Start
//!
//! ```
//! use gamelog::bedwars::{self, ChatEvent, KillEvent};
//! use gamelog::{ContainerConfig, GameLogSequence};
//!
//! let creator = bedwars::creator(ContainerConfig::default())?;
//!
//! let mut sequence = GameLogSequence::new();
//! sequence.push_at(1_700_000_001, KillEvent::new("Steve", "Alex", "Iron Sword"));
//! sequence.push_at(1_700_000_000, ChatEvent::new("Steve", "gl hf"));
//!
//! let bytes = creator.build_game_log(&mut sequence, true)?;
//! let decoded = creator.parse_game_log(&bytes, true)?;
//!
//! let first = decoded.events()[0].event.downcast_ref::<ChatEvent>();
//! assert_eq!(first.map(|c| c.message.as_str()), Some("gl hf"));
//! # Ok::<(), gamelog::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `gamelog-core`: varints, byte pool, wire reader/writer, event trait,
//!   registry and sequence
//! - `gamelog-codec`: record and container encoding, compression, creator
//! - [`bedwars`]: the bedwars event variants and their registry

#![warn(missing_docs)]

pub mod bedwars;

pub use gamelog_codec::{
    compression, decode_container, encode_container, get_codec, CodecError, CompressionCodec,
    ConfigError, ContainerConfig, GameLogCreator, IdentityCodec, ZstdCodec,
};
pub use gamelog_core::{
    default_factory, now_secs, varint, BytePool, Error, EventFactory, EventRegistry,
    EventRegistryBuilder, GameLogEvent, GameLogSequence, LimitError, Limits, LogReader, LogWriter,
    Result, TimedEvent, UNREGISTERED_TAG,
};
