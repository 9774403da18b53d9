//! Compression codecs.
//!
//! The container is optionally passed through a block compression codec as
//! a whole. Codecs are selected by identifier so the choice can live in
//! configuration.
//!
//! # Usage
//!
//! ```
//! use gamelog_codec::compression::get_codec;
//!
//! let codec = get_codec("zstd", 3).unwrap();
//! let compressed = codec.compress(b"hello world").unwrap();
//! assert_eq!(codec.decompress(&compressed).unwrap(), b"hello world");
//! ```

mod identity;
mod traits;
mod zstd;

pub use identity::IdentityCodec;
pub use traits::{CodecError, CompressionCodec};
pub use self::zstd::{ZstdCodec, DEFAULT_ZSTD_LEVEL, ZSTD_LEVELS};

/// Get a codec by its identifier.
///
/// `level` is ignored by codecs without levels.
///
/// # Known Codecs
///
/// - `"zstd"`: Zstandard block compression
/// - `"identity"`: No-op codec (pass-through)
pub fn get_codec(codec_id: &str, level: i32) -> Result<Box<dyn CompressionCodec>, CodecError> {
    match codec_id {
        "zstd" => Ok(Box::new(ZstdCodec::new(level)?)),
        "identity" => Ok(Box::new(IdentityCodec)),
        _ => Err(CodecError::UnknownCodec(codec_id.to_string())),
    }
}
