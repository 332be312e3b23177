//! Hex-string codec: two uppercase digits per byte, high nibble first.

use super::errors::{ConvertError, TextFormat};

/// Encodes bytes as uppercase hex.
///
/// # Example
/// ```
/// assert_eq!(convkit::bytes_to_hex(&[0x00, 0xA8]), "00A8");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decodes hex text into bytes.
///
/// Blank input (empty or whitespace only) decodes to no bytes. Odd-length
/// input gets one leading `'0'`. Digits are case-insensitive; anything else
/// is rejected with [`ConvertError::InvalidFormat`].
pub fn hex_to_bytes(hex_string: &str) -> Result<Vec<u8>, ConvertError> {
    if hex_string.trim().is_empty() {
        return Ok(Vec::new());
    }

    if let Some((position, c)) = hex_string
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(ConvertError::invalid_format(TextFormat::Hex, c, position, hex_string));
    }

    let decoded = if hex_string.len() % 2 == 0 {
        hex::decode(hex_string)
    } else {
        hex::decode(format!("0{}", hex_string))
    };

    // The alphabet is already checked, so only length errors could surface here
    decoded.map_err(|_| ConvertError::invalid_format(TextFormat::Hex, '\0', 0, hex_string))
}
