//! Record writer and reader
//!
//! [`LogWriter`] and [`LogReader`] are the only handles an event variant
//! sees. They expose the wire primitives:
//!
//! | Primitive      | Wire form                                  |
//! |----------------|--------------------------------------------|
//! | `i32` / `i16`  | fixed big-endian, 4 / 2 bytes              |
//! | `bool`         | 1 byte, `0x00` false, anything else true   |
//! | varint/varlong | base-128, see [`crate::varint`]            |
//! | pooled blob    | `i32` index into the [`BytePool`]          |
//! | inline string  | `i32` length + UTF-8 bytes                 |
//!
//! Records have no length prefix, so a variant must read back exactly the
//! fields it wrote, in the same order.

use crate::error::{Error, Result};
use crate::pool::BytePool;
use crate::varint;
use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use uuid::Uuid;

/// Split `n` bytes off the front of `input`.
pub(crate) fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(Error::truncated(n, input.len()));
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}

/// Read a big-endian `i32` off the front of `input`.
pub(crate) fn take_i32(input: &mut &[u8]) -> Result<i32> {
    take(input, 4).map(BigEndian::read_i32)
}

/// Writes one record's fields into a buffer, pooling variable-length data.
pub struct LogWriter<'p> {
    buf: Vec<u8>,
    pool: &'p mut BytePool,
}

impl<'p> LogWriter<'p> {
    /// Create a writer with an empty buffer that pools into `pool`
    pub fn new(pool: &'p mut BytePool) -> Self {
        LogWriter {
            buf: Vec::new(),
            pool,
        }
    }

    /// Write a fixed 4-byte big-endian integer
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.buf.write_i32::<BigEndian>(value)?;
        Ok(())
    }

    /// Write a fixed 2-byte big-endian integer
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.buf.write_i16::<BigEndian>(value)?;
        Ok(())
    }

    /// Write a boolean as `0x01` or `0x00`
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.buf.write_u8(u8::from(value))?;
        Ok(())
    }

    /// Write a 32-bit varint
    pub fn write_varint(&mut self, value: i32) -> Result<()> {
        varint::put_varint(value, &mut self.buf);
        Ok(())
    }

    /// Write a 64-bit varlong
    pub fn write_varlong(&mut self, value: i64) -> Result<()> {
        varint::put_varlong(value, &mut self.buf);
        Ok(())
    }

    /// Pool `bytes` and write its index. Returns the index.
    pub fn write_pooled_bytes(&mut self, bytes: &[u8]) -> Result<u32> {
        let index = self.pool.intern(bytes)?;
        self.write_i32(index as i32)?;
        Ok(index)
    }

    /// Pool the UTF-8 bytes of `value` and write its index
    pub fn write_pooled_string(&mut self, value: &str) -> Result<u32> {
        self.write_pooled_bytes(value.as_bytes())
    }

    /// Pool the 16 big-endian bytes of `value` and write its index
    pub fn write_pooled_uuid(&mut self, value: &Uuid) -> Result<u32> {
        self.write_pooled_bytes(value.as_bytes())
    }

    /// Write a length-prefixed string inline, bypassing the pool.
    ///
    /// Prefer [`write_pooled_string`](Self::write_pooled_string); inline
    /// strings repeat their bytes on every occurrence.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let len = i32::try_from(value.len()).map_err(|_| Error::InvalidLength(i32::MAX))?;
        self.write_i32(len)?;
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The pool this writer interns into
    pub fn pool(&self) -> &BytePool {
        self.pool
    }

    /// Consume the writer, returning the record bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads record fields from a fully materialized buffer.
pub struct LogReader<'a> {
    input: &'a [u8],
    pool: &'a BytePool,
}

impl<'a> LogReader<'a> {
    /// Create a reader over `input`, resolving pooled fields in `pool`
    pub fn new(input: &'a [u8], pool: &'a BytePool) -> Self {
        LogReader { input, pool }
    }

    /// Read a fixed 4-byte big-endian integer
    pub fn read_i32(&mut self) -> Result<i32> {
        take_i32(&mut self.input)
    }

    /// Read a fixed 2-byte big-endian integer
    pub fn read_i16(&mut self) -> Result<i16> {
        take(&mut self.input, 2).map(BigEndian::read_i16)
    }

    /// Read a boolean; any non-zero byte is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        take(&mut self.input, 1).map(|b| b[0] != 0x00)
    }

    /// Read a 32-bit varint
    pub fn read_varint(&mut self) -> Result<i32> {
        varint::get_varint(&mut self.input)
    }

    /// Read a 64-bit varlong
    pub fn read_varlong(&mut self) -> Result<i64> {
        varint::get_varlong(&mut self.input)
    }

    /// Read a pool index and return the blob it points to
    pub fn read_pooled_bytes(&mut self) -> Result<&'a [u8]> {
        let index = self.read_i32()?;
        self.pool.get(index)
    }

    /// Read a pooled UTF-8 string
    pub fn read_pooled_string(&mut self) -> Result<String> {
        let bytes = self.read_pooled_bytes()?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8)
    }

    /// Read a pooled 16-byte UUID
    pub fn read_pooled_uuid(&mut self) -> Result<Uuid> {
        let bytes = self.read_pooled_bytes()?;
        Uuid::from_slice(bytes).map_err(|_| Error::InvalidUuid(bytes.len()))
    }

    /// Read a length-prefixed inline string
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_i32()?;
        let len = usize::try_from(len).map_err(|_| Error::InvalidLength(len))?;
        let bytes = take(&mut self.input, len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidUtf8)
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// True once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The pool pooled fields are resolved against
    pub fn pool(&self) -> &'a BytePool {
        self.pool
    }
}
