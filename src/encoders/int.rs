//! Fixed-width integer packing with an explicit byte order.
//!
//! Widths are caller-supplied and not limited to 4. Shift distances wrap
//! modulo 32 like `i32::wrapping_shr`/`wrapping_shl`, so a width above 4
//! repeats bytes of the value on encode and wraps around on decode. Values
//! wider than the requested width are truncated, never reported.

use serde::Deserialize;
use std::str::FromStr;

use super::errors::ConvertError;

/// Byte ordering for fixed-width integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Most significant byte first
    #[default]
    #[serde(alias = "big_endian", alias = "be")]
    Big,
    /// Least significant byte first
    #[serde(alias = "little_endian", alias = "le")]
    Little,
}

impl ByteOrder {
    pub fn as_str(&self) -> &str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "big" | "be" | "big_endian" | "big-endian" => Ok(ByteOrder::Big),
            "little" | "le" | "little_endian" | "little-endian" => Ok(ByteOrder::Little),
            _ => Err(format!("Unknown byte order: {}", s)),
        }
    }
}

/// Shift distance for the byte holding bits `k*8..k*8+8` of the value.
fn shift_for(significance: usize) -> u32 {
    // Truncation keeps the low bits, which are all wrapping shifts look at
    (significance.wrapping_mul(8)) as u32
}

/// Packs the low `size` bytes of `value` in the given order.
///
/// The result always has exactly `size` elements.
pub fn int_to_bytes(value: i32, size: usize, order: ByteOrder) -> Vec<u8> {
    (0..size)
        .map(|i| {
            let significance = match order {
                ByteOrder::Big => size - i - 1,
                ByteOrder::Little => i,
            };
            (value.wrapping_shr(shift_for(significance)) & 0xFF) as u8
        })
        .collect()
}

/// Reads `size` bytes at `offset` as an integer in the given order.
///
/// Each byte is taken as unsigned before it is shifted into place, so only
/// the accumulated `i32` carries a sign.
pub fn bytes_to_int(
    bytes: &[u8],
    offset: usize,
    size: usize,
    order: ByteOrder,
) -> Result<i32, ConvertError> {
    let window = offset
        .checked_add(size)
        .and_then(|end| bytes.get(offset..end))
        .ok_or_else(|| ConvertError::out_of_range(offset, size, bytes.len()))?;

    let value = window.iter().enumerate().fold(0i32, |acc, (i, &byte)| {
        let significance = match order {
            ByteOrder::Big => size - i - 1,
            ByteOrder::Little => i,
        };
        acc | i32::from(byte).wrapping_shl(shift_for(significance))
    });

    Ok(value)
}

/// Big-endian form of [`int_to_bytes`].
///
/// # Example
/// ```
/// assert_eq!(convkit::int_to_bytes_be(1, 4), vec![0x00, 0x00, 0x00, 0x01]);
/// ```
pub fn int_to_bytes_be(value: i32, size: usize) -> Vec<u8> {
    int_to_bytes(value, size, ByteOrder::Big)
}

/// Little-endian form of [`int_to_bytes`].
pub fn int_to_bytes_le(value: i32, size: usize) -> Vec<u8> {
    int_to_bytes(value, size, ByteOrder::Little)
}

/// Big-endian form of [`bytes_to_int`].
pub fn bytes_to_int_be(bytes: &[u8], offset: usize, size: usize) -> Result<i32, ConvertError> {
    bytes_to_int(bytes, offset, size, ByteOrder::Big)
}

/// Little-endian form of [`bytes_to_int`].
pub fn bytes_to_int_le(bytes: &[u8], offset: usize, size: usize) -> Result<i32, ConvertError> {
    bytes_to_int(bytes, offset, size, ByteOrder::Little)
}
