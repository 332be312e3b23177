//! Glue between in-memory byte buffers and `std::io` streams.
//!
//! Drains take their reader by value so it is released on every path.
//! Buffers are `Cursor<Vec<u8>>`: readable from the start, or writable with
//! the position at the end.

mod drain;
mod lines;

pub use drain::{read_lines, read_to_buffer, read_to_bytes, read_to_string};
pub use lines::split_lines;

use std::io::Cursor;

use crate::encoders::charset::{bytes_to_string, string_to_bytes};

/// Wraps bytes as a reader positioned at the start.
pub fn bytes_to_reader(bytes: impl Into<Vec<u8>>) -> Cursor<Vec<u8>> {
    Cursor::new(bytes.into())
}

/// Wraps bytes as a writer positioned at the end, so writes append.
pub fn bytes_to_writer(bytes: impl Into<Vec<u8>>) -> Cursor<Vec<u8>> {
    let bytes = bytes.into();
    let end = bytes.len() as u64;
    let mut cursor = Cursor::new(bytes);
    cursor.set_position(end);
    cursor
}

/// Takes the bytes back out of a buffer.
pub fn writer_to_bytes(writer: Cursor<Vec<u8>>) -> Vec<u8> {
    writer.into_inner()
}

/// Rewinds a written buffer so it can be read from the start.
pub fn writer_to_reader(writer: Cursor<Vec<u8>>) -> Cursor<Vec<u8>> {
    bytes_to_reader(writer.into_inner())
}

/// Encodes text with the named charset and wraps it as a reader.
pub fn string_to_reader(text: &str, charset: &str) -> Cursor<Vec<u8>> {
    bytes_to_reader(string_to_bytes(text, charset))
}

/// Encodes text with the named charset and wraps it as a writer.
pub fn string_to_writer(text: &str, charset: &str) -> Cursor<Vec<u8>> {
    bytes_to_writer(string_to_bytes(text, charset))
}

/// Decodes the whole contents of a buffer, regardless of its position.
pub fn writer_to_string(writer: &Cursor<Vec<u8>>, charset: &str) -> String {
    bytes_to_string(writer.get_ref(), charset)
}
