//! Deduplicating byte pool
//!
//! Variable-length payload data (strings, UUIDs, raw blobs) is not written
//! inline in records. Each blob is stored once in the pool and records carry
//! a fixed 4-byte index instead. The pool is serialized as the container
//! header:
//!
//! ```text
//! pool_size: i32 BE
//! repeated pool_size times:
//!     length: i32 BE
//!     bytes:  [u8; length]
//! ```
//!
//! A pool lives for exactly one encode or one decode call.
//!
//! Lookups are keyed by the xxh3 hash of the content, but an index is only
//! reused when the stored bytes are equal. Two different blobs that collide
//! on the hash get separate entries.

use crate::error::{Error, Result};
use crate::limits::{LimitError, Limits};
use crate::stream::{take, take_i32};
use byteorder::{BigEndian, WriteBytesExt};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use xxhash_rust::xxh3::xxh3_64;

/// Largest blob or entry count representable by an `i32` length field
const MAX_WIRE_LEN: usize = i32::MAX as usize;

/// Ordered, deduplicating store of byte blobs
#[derive(Debug, Clone, Default)]
pub struct BytePool {
    entries: Vec<Vec<u8>>,
    by_hash: FxHashMap<u64, SmallVec<[u32; 1]>>,
}

impl BytePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` and return its index.
    ///
    /// Content already present in this pool returns the existing index.
    pub fn intern(&mut self, bytes: &[u8]) -> Result<u32> {
        self.intern_hashed(xxh3_64(bytes), bytes)
    }

    fn intern_hashed(&mut self, hash: u64, bytes: &[u8]) -> Result<u32> {
        if let Some(candidates) = self.by_hash.get(&hash) {
            if let Some(&index) = candidates
                .iter()
                .find(|&&index| self.entries[index as usize] == bytes)
            {
                return Ok(index);
            }
        }

        if bytes.len() > MAX_WIRE_LEN {
            return Err(LimitError::BlobTooLarge {
                actual: bytes.len(),
                max: MAX_WIRE_LEN,
            }
            .into());
        }
        if self.entries.len() >= MAX_WIRE_LEN {
            return Err(LimitError::PoolTooLarge {
                actual: self.entries.len() + 1,
                max: MAX_WIRE_LEN,
            }
            .into());
        }

        Ok(self.push(hash, bytes.to_vec()))
    }

    fn push(&mut self, hash: u64, bytes: Vec<u8>) -> u32 {
        let index = self.entries.len() as u32;
        self.entries.push(bytes);
        self.by_hash.entry(hash).or_default().push(index);
        index
    }

    /// Look up the blob stored at a wire index
    pub fn get(&self, index: i32) -> Result<&[u8]> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(Vec::as_slice)
            .ok_or(Error::PoolIndexOutOfRange {
                index,
                pool_len: self.entries.len(),
            })
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in index order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Size of the serialized header in bytes
    pub fn header_len(&self) -> usize {
        4 + self.entries.iter().map(|e| 4 + e.len()).sum::<usize>()
    }

    /// Serialize the pool as a container header.
    pub fn write_header(&self, out: &mut Vec<u8>) -> Result<()> {
        out.reserve(self.header_len());
        out.write_i32::<BigEndian>(self.entries.len() as i32)?;
        for entry in &self.entries {
            out.write_i32::<BigEndian>(entry.len() as i32)?;
            out.extend_from_slice(entry);
        }
        Ok(())
    }

    /// Materialize a pool from a container header, advancing `input` past it.
    ///
    /// Entry counts and lengths are checked against `limits` and against the
    /// bytes actually remaining before anything is allocated.
    pub fn read_header(input: &mut &[u8], limits: &Limits) -> Result<Self> {
        let count = take_i32(input)?;
        let count = usize::try_from(count).map_err(|_| Error::InvalidLength(count))?;
        limits.validate_pool_entries(count)?;

        // Every entry needs at least its 4-byte length
        let min_needed = count.saturating_mul(4);
        if input.len() < min_needed {
            return Err(Error::truncated(min_needed, input.len()));
        }

        let mut pool = BytePool {
            entries: Vec::with_capacity(count),
            by_hash: FxHashMap::default(),
        };
        for _ in 0..count {
            let len = take_i32(input)?;
            let len = usize::try_from(len).map_err(|_| Error::InvalidLength(len))?;
            limits.validate_blob_len(len)?;
            let bytes = take(input, len)?;
            pool.push(xxh3_64(bytes), bytes.to_vec());
        }
        Ok(pool)
    }
}
