use crate::streaming::{bytes_to_reader, read_lines, read_to_bytes, string_to_reader};
use crate::{
    ByteOrder, ConvertError, bits_to_bytes, bytes_to_bits, bytes_to_hex, bytes_to_int,
    bytes_to_int_be, bytes_to_int_le, bytes_to_string, hex_to_bytes, int_to_bytes,
    int_to_bytes_be, int_to_bytes_le, int_to_hex_string, string_to_bytes,
};

fn sample_inputs() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        vec![0xFF],
        vec![0x00, 0xA8],
        b"Hello, World!".to_vec(),
        (0..=255).collect(),
    ]
}

#[test]
fn test_bits_round_trip() {
    for data in sample_inputs() {
        let bits = bytes_to_bits(&data);
        assert_eq!(bits.len(), data.len() * 8);
        assert_eq!(bits_to_bytes(&bits).unwrap(), data);
    }
}

#[test]
fn test_hex_round_trip() {
    for data in sample_inputs() {
        let hex = bytes_to_hex(&data);
        assert_eq!(hex.len(), data.len() * 2);
        assert!(!hex.chars().any(|c| c.is_ascii_lowercase()));
        assert_eq!(hex_to_bytes(&hex).unwrap(), data);
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(bytes_to_hex(&[0x00, 0xA8]), "00A8");
    assert_eq!(hex_to_bytes("00A8").unwrap(), vec![0x00, 0xA8]);
    assert_eq!(int_to_bytes_be(1, 4), vec![0x00, 0x00, 0x00, 0x01]);
    assert_eq!(int_to_bytes_le(1, 4), vec![0x01, 0x00, 0x00, 0x00]);
    assert_eq!(bytes_to_bits(&[0b1011_0000]), "10110000");
    assert!(matches!(
        bytes_to_int_be(&[0x01], 0, 4),
        Err(ConvertError::OutOfRange { .. })
    ));
}

#[test]
fn test_normalization_laws() {
    assert_eq!(bits_to_bytes("1").unwrap(), bits_to_bytes("00000001").unwrap());
    assert_eq!(hex_to_bytes("a8").unwrap(), hex_to_bytes("A8").unwrap());
    assert_eq!(hex_to_bytes("A").unwrap(), hex_to_bytes("0A").unwrap());
}

#[test]
fn test_endianness_symmetry() {
    for &value in &[0, 1, 255, 256, -2, 0x00AB_CDEF, i32::MAX, i32::MIN] {
        assert_eq!(bytes_to_int_be(&int_to_bytes_be(value, 4), 0, 4).unwrap(), value);
        assert_eq!(bytes_to_int_le(&int_to_bytes_le(value, 4), 0, 4).unwrap(), value);

        // Reversing one order gives the other
        let mut reversed = int_to_bytes(value, 4, ByteOrder::Big);
        reversed.reverse();
        assert_eq!(reversed, int_to_bytes(value, 4, ByteOrder::Little));
    }
}

#[test]
fn test_decode_at_offset_inside_larger_buffer() {
    let mut buffer = vec![0xEE; 3];
    buffer.extend(int_to_bytes(-123_456, 4, ByteOrder::Little));
    buffer.push(0xEE);

    assert_eq!(bytes_to_int(&buffer, 3, 4, ByteOrder::Little).unwrap(), -123_456);
    assert!(bytes_to_int(&buffer, 5, 4, ByteOrder::Little).is_err());
}

#[test]
fn test_int_hex_uses_both_codecs() {
    assert_eq!(int_to_hex_string(0xA8, 2), bytes_to_hex(&[0x00, 0xA8]));
}

#[test]
fn test_charset_fallback_equivalence() {
    for data in [&b"plain ascii"[..], "ünïcödé ✓".as_bytes(), &b""[..]] {
        let expected = bytes_to_string(data, "UTF-8");
        assert_eq!(bytes_to_string(data, ""), expected);
        assert_eq!(bytes_to_string(data, "bogus-charset-name"), expected);
    }
}

#[test]
fn test_text_round_trip_per_charset() {
    for (text, charset) in [
        ("plain", "us-ascii"),
        ("naïve café", "iso-8859-1"),
        ("日本語テキスト", "shift_jis"),
        ("中文文本", "gb18030"),
        ("смесь", "koi8-r"),
    ] {
        let bytes = string_to_bytes(text, charset);
        assert_eq!(bytes_to_string(&bytes, charset), text, "charset {}", charset);
    }
}

#[test]
fn test_stream_glue_composes_with_codecs() {
    let drained = read_to_bytes(bytes_to_reader(hex_to_bytes("CAFEBABE").unwrap())).unwrap();
    assert_eq!(bytes_to_hex(&drained), "CAFEBABE");

    let lines = read_lines(string_to_reader("00A8\nff", ""), "").unwrap();
    let decoded: Vec<Vec<u8>> = lines.iter().map(|l| hex_to_bytes(l).unwrap()).collect();
    assert_eq!(decoded, vec![vec![0x00, 0xA8], vec![0xFF]]);
}

#[test]
fn test_invalid_format_is_explicit() {
    assert!(matches!(
        bits_to_bytes("0000000x"),
        Err(ConvertError::InvalidFormat { position: 7, .. })
    ));
    assert!(matches!(
        hex_to_bytes("zz"),
        Err(ConvertError::InvalidFormat { position: 0, .. })
    ));
}
