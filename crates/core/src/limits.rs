//! Decode limits
//!
//! A container header declares how many pooled blobs follow and how long
//! each one is. These limits are checked before any allocation sized by
//! wire data, so a hostile header cannot request gigabytes of memory.

use thiserror::Error;

/// Size limits enforced while decoding a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of entries in the byte pool (default: 1M)
    pub max_pool_entries: usize,

    /// Maximum length of a single pooled blob in bytes (default: 16MB)
    pub max_blob_bytes: usize,

    /// Maximum number of records in one container (default: 10M)
    pub max_records: usize,

    /// Maximum size of a whole container, before and after decompression
    /// (default: 256MB)
    pub max_container_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_pool_entries: 1_000_000,
            max_blob_bytes: 16 * 1024 * 1024, // 16MB
            max_records: 10_000_000,
            max_container_bytes: 256 * 1024 * 1024, // 256MB
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_pool_entries: 16,
            max_blob_bytes: 256,
            max_records: 64,
            max_container_bytes: 4096,
        }
    }

    /// Validate the pool entry count declared by a header
    pub fn validate_pool_entries(&self, count: usize) -> Result<(), LimitError> {
        if count > self.max_pool_entries {
            return Err(LimitError::PoolTooLarge {
                actual: count,
                max: self.max_pool_entries,
            });
        }
        Ok(())
    }

    /// Validate the length of a single pooled blob
    pub fn validate_blob_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_blob_bytes {
            return Err(LimitError::BlobTooLarge {
                actual: len,
                max: self.max_blob_bytes,
            });
        }
        Ok(())
    }

    /// Validate the size of a whole container blob
    pub fn validate_container_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_container_bytes {
            return Err(LimitError::ContainerTooLarge {
                actual: len,
                max: self.max_container_bytes,
            });
        }
        Ok(())
    }

    /// Validate the number of records decoded so far
    pub fn validate_record_count(&self, count: usize) -> Result<(), LimitError> {
        if count > self.max_records {
            return Err(LimitError::TooManyRecords {
                actual: count,
                max: self.max_records,
            });
        }
        Ok(())
    }
}

/// Limit violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Pool header declares too many entries
    #[error("Pool too large: {actual} entries exceeds maximum {max}")]
    PoolTooLarge {
        /// Declared entry count
        actual: usize,
        /// Maximum allowed entries
        max: usize,
    },

    /// A pooled blob is too long
    #[error("Pooled blob too large: {actual} bytes exceeds maximum {max}")]
    BlobTooLarge {
        /// Declared blob length
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// The container blob is too large
    #[error("Container too large: {actual} bytes exceeds maximum {max}")]
    ContainerTooLarge {
        /// Blob size in bytes
        actual: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// The container holds too many records
    #[error("Too many records: {actual} exceeds maximum {max}")]
    TooManyRecords {
        /// Records seen
        actual: usize,
        /// Maximum allowed records
        max: usize,
    },
}
