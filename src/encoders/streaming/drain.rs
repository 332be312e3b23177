use std::io::{Cursor, ErrorKind, Read};

use crate::encoders::charset::bytes_to_string;

use super::lines::split_lines;

const CHUNK_SIZE: usize = 8192; // 8KB chunks

/// Reads a stream to EOF.
///
/// The reader is taken by value and dropped on every return path, which
/// closes files, sockets and pipes. `None` means the read failed; a stream
/// that was simply empty yields `Some(vec![])`.
pub fn read_to_bytes<R: Read>(mut reader: R) -> Option<Vec<u8>> {
    let mut output = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => output.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, read = output.len(), "stream drain failed");
                return None;
            }
        }
    }

    Some(output)
}

/// Reads a stream to EOF into a writable in-memory buffer.
///
/// The returned cursor is positioned at the end, so writes append.
pub fn read_to_buffer<R: Read>(reader: R) -> Option<Cursor<Vec<u8>>> {
    read_to_bytes(reader).map(super::bytes_to_writer)
}

/// Reads a stream to EOF and decodes it with the named charset.
pub fn read_to_string<R: Read>(reader: R, charset: &str) -> Option<String> {
    read_to_bytes(reader).map(|bytes| bytes_to_string(&bytes, charset))
}

/// Reads a stream to EOF, decodes it and splits it into lines.
///
/// Lines end at `\n`, `\r\n` or `\r`; terminators are not included.
pub fn read_lines<R: Read>(reader: R, charset: &str) -> Option<Vec<String>> {
    read_to_string(reader, charset).map(|text| split_lines(&text))
}
