//! Bit-string codec: each byte as eight `'0'`/`'1'` characters, MSB first.

use super::errors::{ConvertError, TextFormat};

/// Encodes bytes as a bit string.
///
/// Empty input yields an empty string.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit in (0..8).rev() {
            result.push(if (byte >> bit) & 1 == 0 { '0' } else { '1' });
        }
    }
    result
}

/// Decodes a bit string into bytes.
///
/// Input whose length is not a multiple of 8 is left-padded with `'0'`, so
/// `"1"` decodes like `"00000001"`. Any character other than `'0'` or `'1'`
/// is rejected with [`ConvertError::InvalidFormat`].
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>, ConvertError> {
    // Validate against the caller's input so positions match what they passed
    if let Some((position, c)) = bits
        .chars()
        .enumerate()
        .find(|&(_, c)| c != '0' && c != '1')
    {
        return Err(ConvertError::invalid_format(TextFormat::Bits, c, position, bits));
    }

    // Only ASCII remains, so byte length equals char count
    let digits = bits.as_bytes();
    let padding = (8 - digits.len() % 8) % 8;
    let mut result = Vec::with_capacity((digits.len() + padding) / 8);

    let mut current = 0u8;
    let mut filled = padding;
    for &digit in digits {
        current = (current << 1) | (digit - b'0');
        filled += 1;
        if filled == 8 {
            result.push(current);
            current = 0;
            filled = 0;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_bits() {
        assert_eq!(bytes_to_bits(&[0b1011_0000]), "10110000");
        assert_eq!(bytes_to_bits(&[0x00, 0xFF]), "0000000011111111");
        assert_eq!(bytes_to_bits(&[]), "");
    }

    #[test]
    fn test_bits_to_bytes() {
        assert_eq!(bits_to_bytes("10110000").unwrap(), vec![0b1011_0000]);
        assert_eq!(bits_to_bytes("0000000111111111").unwrap(), vec![0x01, 0xFF]);
        assert_eq!(bits_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_left_padding() {
        assert_eq!(bits_to_bytes("1").unwrap(), bits_to_bytes("00000001").unwrap());
        // 9 bits: pad to 16
        assert_eq!(bits_to_bytes("100000000").unwrap(), vec![0x01, 0x00]);
        assert_eq!(bits_to_bytes("1111111").unwrap(), vec![0x7F]);
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(
            bits_to_bytes("0102"),
            Err(ConvertError::InvalidFormat {
                format: TextFormat::Bits,
                char: '2',
                position: 3,
                input: "0102".to_string(),
            })
        );
        assert!(bits_to_bytes("0000 0001").is_err());
        assert!(bits_to_bytes("é").is_err());
    }
}
