//! Byte, bit, hex, integer and charset conversions.
//!
//! Every function is a pure conversion of its arguments; nothing here keeps
//! state between calls. Malformed bit, hex and numeric text is rejected with
//! [`ConvertError`], charset problems degrade to UTF-8 instead of failing,
//! and stream drains report I/O failure as `None`.
//!
//! # Example
//!
//! ```
//! use convkit::prelude::*;
//!
//! assert_eq!(bytes_to_hex(&[0x00, 0xA8]), "00A8");
//! assert_eq!(hex_to_bytes("a8").unwrap(), vec![0xA8]);
//! assert_eq!(int_to_bytes_le(1, 4), vec![1, 0, 0, 0]);
//! assert_eq!(bytes_to_bits(&[0b1011_0000]), "10110000");
//! ```

pub mod convenience;
mod core;
mod encoders;
mod features;
pub mod prelude;

pub use crate::core::config::{ConvertConfig, Settings};
pub use encoders::{ConvertError, TextFormat};

pub use encoders::bits::{bits_to_bytes, bytes_to_bits};
pub use encoders::charset::{
    Charset, bytes_to_chars, bytes_to_string, bytes_to_string_default, chars_to_bytes,
    default_charset, is_supported_charset, resolve_charset, string_to_bytes,
    string_to_bytes_default,
};
pub use encoders::hex::{bytes_to_hex, hex_to_bytes};
pub use encoders::int::{
    ByteOrder, bytes_to_int, bytes_to_int_be, bytes_to_int_le, int_to_bytes, int_to_bytes_be,
    int_to_bytes_le,
};
pub use encoders::radix::{
    binary_string_to_decimal, binary_string_to_int, decimal_to_binary_string,
    int_to_binary_string,
};

// Re-export streaming glue
pub mod streaming {
    pub use crate::encoders::streaming::*;
}

// Re-export unit conversions
pub use features::{
    MemoryUnit, SpanUnit, bytes_to_fit_memory_size, bytes_to_memory_size, memory_size_to_bytes,
    millis_to_fit_time_span, millis_to_time_span, time_span_to_millis,
};

pub use convenience::{bytes_to_json_array, bytes_to_json_object, int_to_hex_string, json_to_bytes};

#[cfg(test)]
mod tests;
