//! Zstandard codec.
//!
//! Compresses and decompresses whole buffers in one call. Decompression
//! drains the decoder to completion before returning, so callers never see
//! a partially decoded container.

use super::traits::{CodecError, CompressionCodec};
use std::io::Read;
use std::ops::RangeInclusive;

/// Compression levels accepted by [`ZstdCodec`]
pub const ZSTD_LEVELS: RangeInclusive<i32> = 1..=22;

/// Default zstd compression level
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Zstandard block codec
#[derive(Debug, Clone, Copy)]
pub struct ZstdCodec {
    level: i32,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        ZstdCodec {
            level: DEFAULT_ZSTD_LEVEL,
        }
    }
}

impl ZstdCodec {
    /// Create a codec with an explicit compression level (1..=22)
    pub fn new(level: i32) -> Result<Self, CodecError> {
        if !ZSTD_LEVELS.contains(&level) {
            return Err(CodecError::InvalidLevel {
                level,
                codec_id: "zstd".to_string(),
            });
        }
        Ok(ZstdCodec { level })
    }

    /// Configured compression level
    pub fn level(&self) -> i32 {
        self.level
    }
}

impl CompressionCodec for ZstdCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::encode_all(data, self.level)
            .map_err(|e| CodecError::compress(format!("zstd encoder: {}", e), self.codec_id()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::decode_all(data).map_err(|e| {
            CodecError::decompress(format!("zstd decoder: {}", e), self.codec_id(), data.len())
        })
    }

    fn decompress_bounded(&self, data: &[u8], max_len: usize) -> Result<Vec<u8>, CodecError> {
        let decode_err = |e: std::io::Error| {
            CodecError::decompress(format!("zstd decoder: {}", e), "zstd", data.len())
        };

        // Read one byte past the bound so an oversized frame is detected
        // without materializing it
        let limit = (max_len as u64).saturating_add(1);
        let mut output = Vec::new();
        zstd::stream::read::Decoder::new(data)
            .map_err(decode_err)?
            .take(limit)
            .read_to_end(&mut output)
            .map_err(decode_err)?;

        if output.len() > max_len {
            return Err(CodecError::output_too_large(max_len, self.codec_id()));
        }
        Ok(output)
    }

    fn codec_id(&self) -> &str {
        "zstd"
    }
}
