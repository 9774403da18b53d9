//! Identity codec (no transformation).
//!
//! Used when a container is stored uncompressed. Bytes pass through
//! unchanged.

use super::traits::{CodecError, CompressionCodec};

/// Identity codec - no transformation.
///
/// # Example
///
/// ```
/// use gamelog_codec::compression::{CompressionCodec, IdentityCodec};
///
/// let codec = IdentityCodec;
/// let data = b"hello world";
///
/// let compressed = codec.compress(data).unwrap();
/// assert_eq!(data.as_slice(), compressed.as_slice());
///
/// let decompressed = codec.decompress(&compressed).unwrap();
/// assert_eq!(data.as_slice(), decompressed.as_slice());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCodec;

impl CompressionCodec for IdentityCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }

    fn codec_id(&self) -> &str {
        "identity"
    }
}
