//! Game log creator
//!
//! Binds a registry to a container configuration. One creator can be shared
//! across threads; each call works on its own buffers and its own pool.

use std::io::{Read, Write};
use std::sync::Arc;

use gamelog_core::{EventRegistry, GameLogSequence, Result};
use tracing::{debug, info};

use crate::compression::CompressionCodec;
use crate::config::{ConfigError, ContainerConfig};
use crate::container::{decode_container, encode_container};

/// Builds and parses game log containers for one registry.
pub struct GameLogCreator {
    registry: Arc<EventRegistry>,
    config: ContainerConfig,
    codec: Box<dyn CompressionCodec>,
}

impl GameLogCreator {
    /// Create a creator, resolving the configured codec up front.
    pub fn new(
        registry: Arc<EventRegistry>,
        config: ContainerConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let codec = config.build_codec()?;
        info!(
            registry = registry.name(),
            variants = registry.len(),
            codec = codec.codec_id(),
            level = config.compression_level,
            "Game log creator ready"
        );
        Ok(GameLogCreator {
            registry,
            config,
            codec,
        })
    }

    /// Create a creator with the default configuration (zstd, level 3).
    pub fn with_defaults(registry: Arc<EventRegistry>) -> std::result::Result<Self, ConfigError> {
        Self::new(registry, ContainerConfig::default())
    }

    /// The registry this creator encodes against.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Sort `sequence` and encode it, compressing the whole container when
    /// `compression` is set.
    pub fn build_game_log(
        &self,
        sequence: &mut GameLogSequence,
        compression: bool,
    ) -> Result<Vec<u8>> {
        let container = encode_container(&self.registry, sequence)?;
        if !compression {
            return Ok(container);
        }

        let compressed = self.codec.compress(&container)?;
        debug!(
            codec = self.codec.codec_id(),
            raw_bytes = container.len(),
            compressed_bytes = compressed.len(),
            "Compressed game log"
        );
        Ok(compressed)
    }

    /// Parse a blob produced by [`build_game_log`](Self::build_game_log).
    ///
    /// `compression` must match the flag used at build time; the blob does
    /// not record it. Decompression stops as soon as the output passes
    /// `max_container_bytes`.
    pub fn parse_game_log(&self, data: &[u8], compression: bool) -> Result<GameLogSequence> {
        let limits = &self.config.limits;
        limits.validate_container_len(data.len())?;

        if !compression {
            return decode_container(&self.registry, data, limits);
        }

        let container = self
            .codec
            .decompress_bounded(data, limits.max_container_bytes)?;
        decode_container(&self.registry, &container, limits)
    }

    /// Build a game log and write it to `writer`. Returns the bytes written.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        sequence: &mut GameLogSequence,
        compression: bool,
    ) -> Result<usize> {
        let bytes = self.build_game_log(sequence, compression)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(bytes.len())
    }

    /// Read `reader` to the end and parse the result as a game log.
    pub fn read_from<R: Read>(&self, reader: &mut R, compression: bool) -> Result<GameLogSequence> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_game_log(&data, compression)
    }
}

impl std::fmt::Debug for GameLogCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogCreator")
            .field("registry", &self.registry.name())
            .field("codec", &self.codec.codec_id())
            .field("config", &self.config)
            .finish()
    }
}
