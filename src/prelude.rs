//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in convkit.
//!
//! # Example
//!
//! ```
//! use convkit::prelude::*;
//!
//! let bytes = int_to_bytes(0x1234, 2, ByteOrder::Little);
//! assert_eq!(bytes_to_hex(&bytes), "3412");
//! assert_eq!(bytes_to_int(&bytes, 0, 2, ByteOrder::Little).unwrap(), 0x1234);
//! ```

pub use crate::{
    // Integers
    ByteOrder,
    // Errors
    ConvertError,
    TextFormat,
    // Bits and hex
    bits_to_bytes,
    bytes_to_bits,
    bytes_to_hex,
    bytes_to_int,
    bytes_to_int_be,
    bytes_to_int_le,
    // Charsets
    bytes_to_string,
    hex_to_bytes,
    int_to_bytes,
    int_to_bytes_be,
    int_to_bytes_le,
    int_to_hex_string,
    string_to_bytes,
    // Streams
    streaming::{read_lines, read_to_bytes, read_to_string},
};
