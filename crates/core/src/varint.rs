//! Base-128 variable-length integers.
//!
//! Each byte carries 7 payload bits, least significant group first. The high
//! bit is a continuation flag; the first byte with the high bit clear ends
//! the value.
//!
//! # Sign handling
//!
//! Values are encoded as their raw two's-complement bit pattern: the signed
//! value is reinterpreted as unsigned and shifted right logically, 7 bits per
//! byte. There is no zig-zag step, so small negative values are long:
//!
//! | Value        | Width | Encoded bytes |
//! |--------------|-------|---------------|
//! | `0..=127`    | any   | 1             |
//! | negative i32 | 32    | 5             |
//! | negative i64 | 64    | 10            |
//!
//! On decode, payload bits of the final group that land past bit 31 (varint)
//! or bit 63 (varlong) are discarded. A continuation run longer than 5 / 10
//! bytes is rejected with [`Error::VarIntTooLarge`] / [`Error::VarLongTooLarge`].

use crate::error::{Error, Result};

/// Maximum encoded length of a 32-bit varint
pub const MAX_VARINT_LEN: usize = 5;

/// Maximum encoded length of a 64-bit varlong
pub const MAX_VARLONG_LEN: usize = 10;

const SEGMENT_BITS: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// Append a 32-bit varint to `buf`.
pub fn put_varint(value: i32, buf: &mut Vec<u8>) {
    let mut value = value as u32;
    loop {
        let mut byte = (value & SEGMENT_BITS as u32) as u8;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUE_BIT;
        }
        buf.push(byte);
        if value == 0 {
            return;
        }
    }
}

/// Append a 64-bit varlong to `buf`.
pub fn put_varlong(value: i64, buf: &mut Vec<u8>) {
    let mut value = value as u64;
    loop {
        let mut byte = (value & SEGMENT_BITS as u64) as u8;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUE_BIT;
        }
        buf.push(byte);
        if value == 0 {
            return;
        }
    }
}

/// Number of bytes [`put_varint`] writes for `value`.
pub fn varint_len(value: i32) -> usize {
    let bits = 32 - (value as u32).leading_zeros() as usize;
    (bits.max(1) + 6) / 7
}

/// Number of bytes [`put_varlong`] writes for `value`.
pub fn varlong_len(value: i64) -> usize {
    let bits = 64 - (value as u64).leading_zeros() as usize;
    (bits.max(1) + 6) / 7
}

/// Decode a 32-bit varint, advancing `buf` past the consumed bytes.
///
/// # Errors
///
/// - [`Error::TruncatedInput`] if the input ends mid-value
/// - [`Error::VarIntTooLarge`] if more than 5 bytes carry the continuation bit
pub fn get_varint(buf: &mut &[u8]) -> Result<i32> {
    let mut result: u32 = 0;
    for i in 0..MAX_VARINT_LEN {
        let byte = *buf.get(i).ok_or_else(|| Error::truncated(i + 1, buf.len()))?;
        result |= ((byte & SEGMENT_BITS) as u32) << (7 * i);
        if byte & CONTINUE_BIT == 0 {
            *buf = &buf[i + 1..];
            return Ok(result as i32);
        }
    }
    Err(Error::VarIntTooLarge)
}

/// Decode a 64-bit varlong, advancing `buf` past the consumed bytes.
///
/// # Errors
///
/// - [`Error::TruncatedInput`] if the input ends mid-value
/// - [`Error::VarLongTooLarge`] if more than 10 bytes carry the continuation bit
pub fn get_varlong(buf: &mut &[u8]) -> Result<i64> {
    let mut result: u64 = 0;
    for i in 0..MAX_VARLONG_LEN {
        let byte = *buf.get(i).ok_or_else(|| Error::truncated(i + 1, buf.len()))?;
        result |= ((byte & SEGMENT_BITS) as u64) << (7 * i);
        if byte & CONTINUE_BIT == 0 {
            *buf = &buf[i + 1..];
            return Ok(result as i64);
        }
    }
    Err(Error::VarLongTooLarge)
}
