//! Charset-safe conversions between text and bytes.
//!
//! Charset names are WHATWG labels as understood by `encoding_rs`
//! (`"utf-8"`, `"shift_jis"`, `"gbk"`, ...), except that the ISO-8859-1 and
//! US-ASCII labels keep their own meaning instead of the WHATWG windows-1252
//! alias. A blank or unknown label silently selects UTF-8. Text that the
//! selected charset cannot represent degrades to the platform default, lossy
//! UTF-8, instead of failing: callers of this module never see an encoding
//! error.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859_1",
    "iso8859_1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "819",
    "csisolatin1",
];

const ASCII_LABELS: &[&str] = &[
    "us-ascii",
    "ascii",
    "us",
    "646",
    "iso646-us",
    "iso-ir-6",
    "iso_646.irv:1991",
    "ansi_x3.4-1968",
    "ansi_x3.4-1986",
    "cp367",
    "ibm367",
    "csascii",
];

/// A resolved charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1: every byte is the code point of the same value
    Latin1,
    /// US-ASCII: seven-bit bytes only
    Ascii,
    /// Any other encoding `encoding_rs` knows
    Whatwg(&'static Encoding),
}

impl Charset {
    /// Canonical name of the charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
            Charset::Whatwg(encoding) => encoding.name(),
        }
    }

    fn lookup(label: &str) -> Option<Self> {
        let label = label.trim();
        if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
            return Some(Charset::Latin1);
        }
        if ASCII_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
            return Some(Charset::Ascii);
        }
        Encoding::for_label_no_replacement(label.as_bytes()).map(Charset::Whatwg)
    }

    /// Strict decode. `None` when the bytes are malformed for this charset.
    fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Latin1 => Some(bytes_to_chars(bytes).into_iter().collect()),
            Charset::Ascii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }

    /// Strict encode. `None` when the text has characters this charset lacks.
    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        match self {
            Charset::Latin1 => {
                let chars: Vec<char> = text.chars().collect();
                chars
                    .iter()
                    .all(|&c| u32::from(c) <= 0xFF)
                    .then(|| chars_to_bytes(&chars))
            }
            Charset::Ascii => text.is_ascii().then(|| text.as_bytes().to_vec()),
            Charset::Whatwg(encoding) if *encoding == UTF_16LE => {
                Some(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
            }
            Charset::Whatwg(encoding) if *encoding == UTF_16BE => {
                Some(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
            }
            Charset::Whatwg(encoding) => {
                let (bytes, _, unmappable) = encoding.encode(text);
                (!unmappable).then(|| bytes.into_owned())
            }
        }
    }
}

/// Charset used for blank or unknown charset names.
pub fn default_charset() -> Charset {
    Charset::Whatwg(UTF_8)
}

/// Resolves a charset label, falling back to [`default_charset`].
pub fn resolve_charset(name: &str) -> Charset {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return default_charset();
    }

    match Charset::lookup(trimmed) {
        Some(charset) => charset,
        None => {
            tracing::debug!(
                charset = trimmed,
                fallback = default_charset().name(),
                "unsupported charset, using default"
            );
            default_charset()
        }
    }
}

/// Returns true when `name` is a label convkit recognizes.
pub fn is_supported_charset(name: &str) -> bool {
    Charset::lookup(name).is_some()
}

/// Decodes bytes with the named charset.
///
/// Byte order marks are kept as text rather than sniffed.
pub fn bytes_to_string(bytes: &[u8], charset: &str) -> String {
    let charset = resolve_charset(charset);
    match charset.decode(bytes) {
        Some(text) => text,
        None => {
            tracing::warn!(
                charset = charset.name(),
                len = bytes.len(),
                "malformed input for charset, decoding as lossy UTF-8"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Decodes bytes with the default charset.
pub fn bytes_to_string_default(bytes: &[u8]) -> String {
    bytes_to_string(bytes, "")
}

/// Encodes text with the named charset.
pub fn string_to_bytes(text: &str, charset: &str) -> Vec<u8> {
    let charset = resolve_charset(charset);
    match charset.encode(text) {
        Some(bytes) => bytes,
        None => {
            tracing::warn!(
                charset = charset.name(),
                "text has characters the charset cannot represent, encoding as UTF-8"
            );
            text.as_bytes().to_vec()
        }
    }
}

/// Encodes text with the default charset.
pub fn string_to_bytes_default(text: &str) -> Vec<u8> {
    string_to_bytes(text, "")
}

/// Widens each byte to the char with the same code point (U+0000..=U+00FF).
pub fn bytes_to_chars(bytes: &[u8]) -> Vec<char> {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Keeps the low 8 bits of each char's code point.
pub fn chars_to_bytes(chars: &[char]) -> Vec<u8> {
    chars.iter().map(|&c| (c as u32 & 0xFF) as u8).collect()
}
