//! Compression codec trait definitions.

pub use gamelog_core::CodecError;

/// Block compression codec.
///
/// The whole container passes through the codec in one call; there is no
/// streaming interface. `decompress` must return the fully materialized
/// output or an error, never a partial buffer.
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync` so one creator can serve concurrent
/// encode/decode calls.
pub trait CompressionCodec: Send + Sync {
    /// Compress a complete container.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress a complete blob.
    ///
    /// Returns an error if the data is not a valid frame for this codec.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress a complete blob, failing with [`CodecError::OutputTooLarge`]
    /// once the output would exceed `max_len` bytes.
    ///
    /// Codecs that can inflate should override this so the bound holds
    /// while decoding, not after.
    fn decompress_bounded(&self, data: &[u8], max_len: usize) -> Result<Vec<u8>, CodecError> {
        let output = self.decompress(data)?;
        if output.len() > max_len {
            return Err(CodecError::output_too_large(max_len, self.codec_id()));
        }
        Ok(output)
    }

    /// Unique codec identifier, e.g. `"zstd"`.
    fn codec_id(&self) -> &str;
}
