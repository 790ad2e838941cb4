use super::*;

#[test]
fn trailing_bytes_table() {
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0x00], 0);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0x7F], 0);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0x80], 0);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xBF], 0);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xC0], 1);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xDF], 1);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xE0], 2);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xEF], 2);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xF0], 3);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xF7], 3);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xF8], 4);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xFB], 4);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xFC], 5);
    assert_eq!(TRAILING_BYTES_FOR_UTF8[0xFF], 5);
}

#[test]
fn legal_sequences() {
    assert!(is_legal_utf8(b"\x00"));
    assert!(is_legal_utf8(b"\x7F"));
    assert!(is_legal_utf8(b"\xC2\x80"));
    assert!(is_legal_utf8(b"\xDF\xBF"));
    assert!(is_legal_utf8(b"\xE0\xA0\x80"));
    assert!(is_legal_utf8(b"\xED\x9F\xBF"));
    assert!(is_legal_utf8(b"\xEF\xBF\xBD"));
    assert!(is_legal_utf8(b"\xF0\x90\x80\x80"));
    assert!(is_legal_utf8(b"\xF0\x9F\x98\x80"));
    assert!(is_legal_utf8(b"\xF4\x8F\xBF\xBF"));
}

#[test]
fn overlong_sequences() {
    assert!(!is_legal_utf8(b"\xC0\x80"));
    assert!(!is_legal_utf8(b"\xC1\xBF"));
    assert!(!is_legal_utf8(b"\xE0\x9F\xBF"));
    assert!(!is_legal_utf8(b"\xF0\x8F\xBF\xBF"));
}

#[test]
fn surrogate_and_out_of_range_sequences() {
    assert!(!is_legal_utf8(b"\xED\xA0\x80"));
    assert!(!is_legal_utf8(b"\xED\xBF\xBF"));
    assert!(!is_legal_utf8(b"\xF4\x90\x80\x80"));
    assert!(!is_legal_utf8(b"\xF5\x80\x80\x80"));
    assert!(!is_legal_utf8(b"\xF8\x88\x80\x80\x80"));
    assert!(!is_legal_utf8(b"\xFC\x84\x80\x80\x80\x80"));
}

#[test]
fn bad_continuation_bytes() {
    assert!(!is_legal_utf8(b"\x80"));
    assert!(!is_legal_utf8(b"\xBF"));
    assert!(!is_legal_utf8(b"\xC2\x41"));
    assert!(!is_legal_utf8(b"\xC2\xC0"));
    assert!(!is_legal_utf8(b"\xE1\x80\x41"));
    assert!(!is_legal_utf8(b"\xF1\x80\x80\xC0"));
    assert!(!is_legal_utf8(b""));
}

#[test]
fn bounded_sequence() {
    assert!(is_legal_utf8_sequence(b"A"));
    assert!(is_legal_utf8_sequence(b"\xC3\xA9 trailing text"));
    assert!(is_legal_utf8_sequence(b"\xF0\x9F\x98\x80"));
    assert!(!is_legal_utf8_sequence(b"\xF0\x9F\x98"));
    assert!(!is_legal_utf8_sequence(b"\xE2\x82"));
    assert!(!is_legal_utf8_sequence(b"\xC0\x80"));
    assert!(!is_legal_utf8_sequence(b""));
}

#[test]
fn decode_accumulates() {
    assert_eq!(decode(b"A"), 0x41);
    assert_eq!(decode(b"\xC3\xA9"), 0xE9);
    assert_eq!(decode(b"\xE2\x82\xAC"), 0x20AC);
    assert_eq!(decode(b"\xF0\x9F\x98\x80"), 0x1F600);
    assert_eq!(decode(b"\xF4\x8F\xBF\xBF"), 0x10FFFF);
}

#[test]
fn encoded_lengths() {
    assert_eq!(encoded_len(0x7F), 1);
    assert_eq!(encoded_len(0x80), 2);
    assert_eq!(encoded_len(0x7FF), 2);
    assert_eq!(encoded_len(0x800), 3);
    assert_eq!(encoded_len(0xFFFF), 3);
    assert_eq!(encoded_len(0x10000), 4);
    assert_eq!(encoded_len(0x10FFFF), 4);
    assert_eq!(encoded_len(0x110000), 3);
}

#[test]
fn encode_writes_lead_byte_first() {
    assert_eq!(encode(0x41), ([0x41, 0, 0, 0], 1));
    assert_eq!(encode(0xE9), ([0xC3, 0xA9, 0, 0], 2));
    assert_eq!(encode(0x20AC), ([0xE2, 0x82, 0xAC, 0], 3));
    assert_eq!(encode(0x1F600), ([0xF0, 0x9F, 0x98, 0x80], 4));
    assert_eq!(encode(0x110000), ([0xEF, 0xBF, 0xBD, 0], 3));
}
