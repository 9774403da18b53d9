//! Container configuration.
//!
//! Selects the compression codec used when a caller asks for a compressed
//! container, and the limits applied while decoding untrusted blobs.

use crate::compression::{get_codec, CodecError, CompressionCodec, DEFAULT_ZSTD_LEVEL};
use gamelog_core::Limits;

/// Container configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Codec used for compressed containers (default: `"zstd"`).
    pub codec_id: String,

    /// Compression level passed to the codec (default: 3).
    pub compression_level: i32,

    /// Limits applied while decoding.
    pub limits: Limits,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        ContainerConfig {
            codec_id: "zstd".to_string(),
            compression_level: DEFAULT_ZSTD_LEVEL,
            limits: Limits::default(),
        }
    }
}

impl ContainerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set codec identifier (builder pattern).
    pub fn with_codec(mut self, codec_id: impl Into<String>) -> Self {
        self.codec_id = codec_id.into();
        self
    }

    /// Set compression level (builder pattern).
    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level;
        self
    }

    /// Set decode limits (builder pattern).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_codec().map(|_| ())
    }

    /// Resolve the configured codec.
    pub fn build_codec(&self) -> Result<Box<dyn CompressionCodec>, ConfigError> {
        Ok(get_codec(&self.codec_id, self.compression_level)?)
    }

    /// Create a configuration for testing (small decode limits).
    pub fn for_testing() -> Self {
        ContainerConfig {
            limits: Limits::with_small_limits(),
            ..Default::default()
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Codec identifier or level is not usable.
    #[error("Invalid codec: {0}")]
    InvalidCodec(#[from] CodecError),
}

impl From<ConfigError> for gamelog_core::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::InvalidCodec(codec) => gamelog_core::Error::Codec(codec),
        }
    }
}
