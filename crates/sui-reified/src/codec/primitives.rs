//! Primitive codec table.
//!
//! Encoders append to a `Vec<u8>`; decoders consume from a [`Cursor`].
//! Integers are little-endian. Variable-length values carry a ULEB128 count
//! (7 data bits per byte, continuation bit on all but the last byte), capped
//! at `u32::MAX` and required to be minimally encoded.

use crate::codec::Cursor;
use crate::error::{ReifiedError, ReifiedResult};
use crate::types::{ADDRESS_LENGTH, Address, U256};

/// The largest accepted sequence length.
pub const MAX_SEQUENCE_LENGTH: u64 = u32::MAX as u64;

/// Writes a ULEB128 length prefix.
///
/// # Errors
///
/// `ValueOutOfRange` when `len` exceeds [`MAX_SEQUENCE_LENGTH`].
pub fn write_length_prefix(out: &mut Vec<u8>, len: usize) -> ReifiedResult<()> {
    if len as u64 > MAX_SEQUENCE_LENGTH {
        return Err(ReifiedError::out_of_range("sequence length", len));
    }
    let mut remaining = len as u64;
    loop {
        let byte = (remaining & 0x7f) as u8;
        remaining >>= 7;
        if remaining == 0 {
            out.push(byte);
            return Ok(());
        }
        out.push(byte | 0x80);
    }
}

/// Reads a ULEB128 length prefix.
///
/// # Errors
///
/// `MalformedInput` when the buffer ends mid-prefix, the encoding is not
/// minimal, or the value exceeds [`MAX_SEQUENCE_LENGTH`].
pub fn read_length_prefix(cursor: &mut Cursor<'_>) -> ReifiedResult<usize> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = cursor.read_byte()?;
        if byte == 0 && shift > 0 {
            return Err(ReifiedError::malformed(
                "non-minimal ULEB128 length encoding",
            ));
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift > 28 {
            return Err(ReifiedError::malformed("ULEB128 length exceeds u32"));
        }
    }
    if value > MAX_SEQUENCE_LENGTH {
        return Err(ReifiedError::malformed("ULEB128 length exceeds u32"));
    }
    Ok(value as usize)
}

/// Encodes a bool as a single 0/1 byte.
pub fn encode_bool(out: &mut Vec<u8>, value: bool) {
    out.push(u8::from(value));
}

/// Decodes a bool, rejecting any byte other than 0 or 1.
pub fn decode_bool(cursor: &mut Cursor<'_>) -> ReifiedResult<bool> {
    match cursor.read_byte()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ReifiedError::malformed(format!(
            "invalid bool byte: {other:#04x}"
        ))),
    }
}

/// Encodes a u8.
pub fn encode_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Decodes a u8.
pub fn decode_u8(cursor: &mut Cursor<'_>) -> ReifiedResult<u8> {
    cursor.read_byte()
}

/// Encodes a u16, little-endian.
pub fn encode_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Decodes a u16, little-endian.
pub fn decode_u16(cursor: &mut Cursor<'_>) -> ReifiedResult<u16> {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(cursor.read_bytes(2)?);
    Ok(u16::from_le_bytes(bytes))
}

/// Encodes a u32, little-endian.
pub fn encode_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Decodes a u32, little-endian.
pub fn decode_u32(cursor: &mut Cursor<'_>) -> ReifiedResult<u32> {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(cursor.read_bytes(4)?);
    Ok(u32::from_le_bytes(bytes))
}

/// Encodes a u64, little-endian.
pub fn encode_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Decodes a u64, little-endian.
pub fn decode_u64(cursor: &mut Cursor<'_>) -> ReifiedResult<u64> {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(cursor.read_bytes(8)?);
    Ok(u64::from_le_bytes(bytes))
}

/// Encodes a u128, little-endian.
pub fn encode_u128(out: &mut Vec<u8>, value: u128) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Decodes a u128, little-endian.
pub fn decode_u128(cursor: &mut Cursor<'_>) -> ReifiedResult<u128> {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(cursor.read_bytes(16)?);
    Ok(u128::from_le_bytes(bytes))
}

/// Encodes a u256 as 32 little-endian bytes.
pub fn encode_u256(out: &mut Vec<u8>, value: &U256) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Decodes a u256 from 32 little-endian bytes.
pub fn decode_u256(cursor: &mut Cursor<'_>) -> ReifiedResult<U256> {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(cursor.read_bytes(32)?);
    Ok(U256::from_le_bytes(bytes))
}

/// Encodes an address as 32 raw bytes, no length prefix.
pub fn encode_address(out: &mut Vec<u8>, value: &Address) {
    out.extend_from_slice(value.as_bytes());
}

/// Decodes an address from 32 raw bytes.
pub fn decode_address(cursor: &mut Cursor<'_>) -> ReifiedResult<Address> {
    Address::from_bytes(cursor.read_bytes(ADDRESS_LENGTH)?)
}

/// Encodes a byte vector with a length prefix.
pub fn encode_bytes(out: &mut Vec<u8>, value: &[u8]) -> ReifiedResult<()> {
    write_length_prefix(out, value.len())?;
    out.extend_from_slice(value);
    Ok(())
}

/// Decodes a length-prefixed byte vector.
pub fn decode_bytes(cursor: &mut Cursor<'_>) -> ReifiedResult<Vec<u8>> {
    let len = read_length_prefix(cursor)?;
    Ok(cursor.read_bytes(len)?.to_vec())
}

/// Encodes a UTF-8 string as a length-prefixed byte vector.
pub fn encode_string(out: &mut Vec<u8>, value: &str) -> ReifiedResult<()> {
    encode_bytes(out, value.as_bytes())
}

/// Decodes a length-prefixed UTF-8 string.
pub fn decode_string(cursor: &mut Cursor<'_>) -> ReifiedResult<String> {
    let bytes = decode_bytes(cursor)?;
    String::from_utf8(bytes)
        .map_err(|e| ReifiedError::malformed(format!("string is not valid UTF-8: {e}")))
}
