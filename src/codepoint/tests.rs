use super::*;

fn c(value: u32) -> CodePoint {
    CodePoint::from_u32(value).unwrap()
}

fn s(value: u16) -> Surrogate {
    Surrogate::from_u16(value).unwrap()
}

#[test]
fn code_point_from_u32() {
    assert!(CodePoint::from_u32(0).is_some());
    assert!(CodePoint::from_u32(0xD800).is_some());
    assert!(CodePoint::from_u32(0x10FFFF).is_some());
    assert!(CodePoint::from_u32(0x110000).is_none());
    assert!(CodePoint::from_u32(u32::MAX).is_none());
}

#[test]
fn code_point_to_string() {
    assert_eq!(format!("{:?}", CodePoint::from_char('a')), "U+0061");
    assert_eq!(format!("{:?}", CodePoint::from_char('😀')), "U+1F600");
    assert_eq!(format!("{:?}", s(0xD83D)), "U+D83D");
}

#[test]
fn code_point_to_char() {
    assert_eq!(c(0x61).to_char(), Some('a'));
    assert_eq!(c(0x1F600).to_char(), Some('😀'));
    assert_eq!(c(0xD800).to_char(), None);
    assert_eq!(CodePoint::REPLACEMENT.to_char(), Some('\u{FFFD}'));
}

#[test]
fn code_point_categorize() {
    assert_eq!(c(0x61).categorize(), CodePointCategory::Scalar('a'));
    assert_eq!(c(0xD7FF).categorize(), CodePointCategory::Scalar('\u{D7FF}'));
    assert_eq!(c(0xD800).categorize(), CodePointCategory::Surrogate(s(0xD800)));
    assert_eq!(c(0xDFFF).categorize(), CodePointCategory::Surrogate(s(0xDFFF)));
    assert_eq!(c(0xE000).categorize(), CodePointCategory::Scalar('\u{E000}'));
    assert_eq!(
        CodePoint::MAX.categorize(),
        CodePointCategory::Scalar('\u{10FFFF}')
    );
}

#[test]
fn categorize_raw_values() {
    assert_eq!(categorize_u32(0x41), Some(CodePointCategory::Scalar('A')));
    assert_eq!(
        categorize_u32(0xDC00),
        Some(CodePointCategory::Surrogate(s(0xDC00)))
    );
    assert_eq!(categorize_u32(0x110000), None);
}

#[test]
fn surrogate_pair_from_code_point() {
    assert_eq!(c(0x1F600).to_surrogate_pair(), Some((s(0xD83D), s(0xDE00))));
    assert_eq!(c(0x10000).to_surrogate_pair(), Some((s(0xD800), s(0xDC00))));
    assert_eq!(c(0x10FFFF).to_surrogate_pair(), Some((s(0xDBFF), s(0xDFFF))));
    assert_eq!(c(0xFFFF).to_surrogate_pair(), None);
    assert_eq!(c(0x41).to_surrogate_pair(), None);
}

#[test]
fn code_point_from_surrogate_pair() {
    assert_eq!(
        CodePoint::from_surrogate_pair(s(0xD83D), s(0xDE00)),
        Some(c(0x1F600))
    );
    assert_eq!(
        CodePoint::from_surrogate_pair(s(0xDBFF), s(0xDFFF)),
        Some(CodePoint::MAX)
    );
    assert_eq!(CodePoint::from_surrogate_pair(s(0xDC00), s(0xDC00)), None);
    assert_eq!(CodePoint::from_surrogate_pair(s(0xD800), s(0xD800)), None);
}

#[test]
fn code_point_from_surrogate() {
    assert_eq!(CodePoint::from(s(0xD800)), c(0xD800));
    assert_eq!(CodePoint::from(s(0xDFFF)), c(0xDFFF));
}

#[test]
fn surrogate_from_u16() {
    assert!(Surrogate::from_u16(0).is_none());
    assert!(Surrogate::from_u16(0xD7FF).is_none());
    assert!(Surrogate::from_u16(0xD800).is_some());
    assert!(Surrogate::from_u16(0xDFFF).is_some());
    assert!(Surrogate::from_u16(0xE000).is_none());
}

#[test]
fn surrogate_is_high() {
    assert_eq!(s(0xD800).is_high_surrogate(), true);
    assert_eq!(s(0xDBFF).is_high_surrogate(), true);
    assert_eq!(s(0xDC00).is_high_surrogate(), false);
    assert_eq!(s(0xDFFF).is_high_surrogate(), false);
}
