//! Error types for game-log encoding and decoding
//!
//! Every failure aborts the whole encode or decode call. There is no
//! partial-result recovery: a corrupt or truncated container is rejected
//! as a unit.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for game-log operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the game-log container
#[derive(Debug, Error)]
pub enum Error {
    /// An event variant could not be registered
    #[error("Cannot register event variant {variant}: {reason}")]
    Registration {
        /// Variant name as reported by the factory, or the Rust type name
        variant: &'static str,
        /// Why registration was refused
        reason: String,
    },

    /// A record carries a tag that no variant is registered under
    #[error("Unknown event id: {0}")]
    UnknownEventId(i32),

    /// A 32-bit varint ran past 5 bytes
    #[error("VarInt is too big (more than 5 bytes)")]
    VarIntTooLarge,

    /// A 64-bit varlong ran past 10 bytes
    #[error("VarLong is too big (more than 10 bytes)")]
    VarLongTooLarge,

    /// A pooled field points outside the pool read from the header
    #[error("Pool index {index} out of range (pool holds {pool_len} entries)")]
    PoolIndexOutOfRange {
        /// Index read from the wire
        index: i32,
        /// Number of entries in the materialized pool
        pool_len: usize,
    },

    /// Fewer bytes remain than a primitive or record requires
    #[error("Truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput {
        /// Bytes required by the read
        needed: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// A length field on the wire is negative
    #[error("Invalid length on the wire: {0}")]
    InvalidLength(i32),

    /// A string field is not valid UTF-8
    #[error("String field is not valid UTF-8")]
    InvalidUtf8,

    /// A pooled UUID does not have the 16-byte shape
    #[error("Invalid UUID: expected 16 bytes, got {0}")]
    InvalidUuid(usize),

    /// A decode limit was exceeded
    #[error(transparent)]
    LimitExceeded(#[from] LimitError),

    /// Compression or decompression failed
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// I/O error while moving a container in or out of a byte stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a registration error
    pub fn registration(variant: &'static str, reason: impl Into<String>) -> Self {
        Error::Registration {
            variant,
            reason: reason.into(),
        }
    }

    /// Create a truncation error
    pub fn truncated(needed: usize, available: usize) -> Self {
        Error::TruncatedInput { needed, available }
    }

    /// True for errors caused by malformed or hostile input bytes
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::UnknownEventId(_)
                | Error::VarIntTooLarge
                | Error::VarLongTooLarge
                | Error::PoolIndexOutOfRange { .. }
                | Error::TruncatedInput { .. }
                | Error::InvalidLength(_)
                | Error::InvalidUtf8
                | Error::InvalidUuid(_)
                | Error::LimitExceeded(_)
        )
    }
}

/// Compression codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Compression failed.
    #[error("Compress error (codec={codec_id}): {detail}")]
    CompressError {
        /// Human-readable error description
        detail: String,
        /// Codec ID that attempted the compression
        codec_id: String,
    },

    /// Decompression failed (corrupt frame, wrong codec).
    ///
    /// Carries the codec identity and data length so callers can
    /// distinguish a wrong-codec error from data corruption.
    #[error("Decompress error (codec={codec_id}, data_len={data_len}): {detail}")]
    DecompressError {
        /// Human-readable error description
        detail: String,
        /// Codec ID that attempted the decompression
        codec_id: String,
        /// Length of the data that failed to decompress
        data_len: usize,
    },

    /// Decompressed output would exceed the allowed size
    #[error("Decompressed output exceeds {max} bytes (codec={codec_id})")]
    OutputTooLarge {
        /// Output bound that was hit
        max: usize,
        /// Codec ID that was decompressing
        codec_id: String,
    },

    /// Unknown codec identifier.
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    /// Compression level outside the codec's supported range.
    #[error("Invalid compression level {level} for codec {codec_id}")]
    InvalidLevel {
        /// Requested level
        level: i32,
        /// Codec the level was requested for
        codec_id: String,
    },
}

impl CodecError {
    /// Create a compression error.
    pub fn compress(detail: impl Into<String>, codec_id: impl Into<String>) -> Self {
        CodecError::CompressError {
            detail: detail.into(),
            codec_id: codec_id.into(),
        }
    }

    /// Create a decompression error with full diagnostic context.
    pub fn decompress(
        detail: impl Into<String>,
        codec_id: impl Into<String>,
        data_len: usize,
    ) -> Self {
        CodecError::DecompressError {
            detail: detail.into(),
            codec_id: codec_id.into(),
            data_len,
        }
    }

    /// Create an output-bound error.
    pub fn output_too_large(max: usize, codec_id: impl Into<String>) -> Self {
        CodecError::OutputTooLarge {
            max,
            codec_id: codec_id.into(),
        }
    }
}
