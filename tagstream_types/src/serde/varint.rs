//! Unsigned LEB128, bounded by an integer width.
//!
//! A decoder that expects a `bits`-wide integer reads at most [`max_len(bits)`] bytes.
//! The last permitted byte must have its continuation bit clear, and must not carry
//! any bit beyond `bits`. Otherwise the varint is malformed.

use crate::io_utils;
use crate::serde::{Error, ReadLen, Result, Serializer, WriteLen};
use std::io::{Read, Write};

pub const U64_MAX_LEN: usize = max_len(u64::BITS);

pub const fn max_len(bits: u32) -> usize {
    ((bits + 6) / 7) as usize
}

pub fn size_uvarint(mut int: u64) -> usize {
    let mut size = 1;
    while int >= 0x80 {
        int >>= 7;
        size += 1;
    }
    size
}

pub fn ser_uvarint(mut int: u64, w: &mut impl Write) -> Result<WriteLen> {
    let mut w_len = 0;
    while int >= 0x80 {
        io_utils::write_byte(w, (int as u8) | 0x80, w_len)?;
        w_len += 1;
        int >>= 7;
    }
    io_utils::write_byte(w, int as u8, w_len)?;
    w_len += 1;
    Ok(WriteLen::new_manual(w_len))
}

/// `bits` must be in `1..=64`; the public serializers fix it.
///
/// Non-canonical encodings such as `0x80 0x00` are accepted, so the count read may
/// exceed [`size_uvarint()`] of the result.
pub(crate) fn deser_uvarint(r: &mut impl Read, bits: u32) -> Result<(ReadLen, u64)> {
    debug_assert!(0 < bits && bits <= u64::BITS);
    let mut int = 0u64;
    let mut i = 0;
    loop {
        let byte = io_utils::read_byte(r, i)?;
        int |= u64::from(byte & 0x7F) << (7 * i);
        i += 1;
        if is_terminal(byte, i, bits)? {
            return Ok((ReadLen::new_manual(i), int));
        }
    }
}

/// Same bytes consumed and same failures as [`deser_uvarint()`], without assembling the integer.
pub(crate) fn skip_uvarint(r: &mut impl Read, bits: u32) -> Result<ReadLen> {
    debug_assert!(0 < bits && bits <= u64::BITS);
    let mut i = 0;
    loop {
        let byte = io_utils::read_byte(r, i)?;
        i += 1;
        if is_terminal(byte, i, bits)? {
            return Ok(ReadLen::new_manual(i));
        }
    }
}

/// `r_len` counts `byte` itself.
fn is_terminal(byte: u8, r_len: usize, bits: u32) -> Result<bool> {
    let max_len = max_len(bits);
    if r_len < max_len {
        return Ok(byte & 0x80 == 0);
    }
    /* The last permitted byte. Its continuation bit and its bits beyond the width must be clear. */
    let remaining_bits = bits - 7 * (max_len as u32 - 1);
    if byte >> remaining_bits != 0 {
        tracing::trace!(bits, r_len, "malformed varint");
        return Err(Error::MalformedVarint {
            len: r_len,
            max_len,
        });
    }
    Ok(true)
}

/// Unsigned LEB128 for `u64`.
#[derive(Clone, Copy, Default, Debug)]
pub struct UvarintSer;
impl Serializer<u64> for UvarintSer {
    fn ser<W: Write>(&self, int: &u64, w: &mut W) -> Result<WriteLen> {
        ser_uvarint(*int, w)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, u64)> {
        deser_uvarint(r, u64::BITS)
    }
    fn size(&self, int: &u64) -> usize {
        size_uvarint(*int)
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        skip_uvarint(r, u64::BITS)
    }
}

/// Zigzag then unsigned LEB128 for `i64`. Small magnitudes of either sign stay short.
#[derive(Clone, Copy, Default, Debug)]
pub struct ZigzagSer;
impl ZigzagSer {
    fn encode(int: i64) -> u64 {
        ((int << 1) ^ (int >> 63)) as u64
    }
    fn decode(uint: u64) -> i64 {
        ((uint >> 1) as i64) ^ -((uint & 1) as i64)
    }
}
impl Serializer<i64> for ZigzagSer {
    fn ser<W: Write>(&self, int: &i64, w: &mut W) -> Result<WriteLen> {
        ser_uvarint(Self::encode(*int), w)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(ReadLen, i64)> {
        let (r_len, uint) = deser_uvarint(r, u64::BITS)?;
        Ok((r_len, Self::decode(uint)))
    }
    fn size(&self, int: &i64) -> usize {
        size_uvarint(Self::encode(*int))
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<ReadLen> {
        skip_uvarint(r, u64::BITS)
    }
}
