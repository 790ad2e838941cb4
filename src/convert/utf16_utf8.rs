use super::{
    check_cursors, encode_utf16, illegal, peek_utf16, peek_utf8, put_utf8, ConversionError,
    ConversionFlags, ConversionResult,
};
use crate::codepoint::{categorize_u32, CodePointCategory, REPLACEMENT_CHARACTER};
use crate::cursor::{Reader, Writer};

/// Converts UTF-16 code units to UTF-8 bytes.
///
/// Surrogate handling follows [`convert_utf16_to_utf32`]: a lone low
/// surrogate accepted under lenient flags is encoded as its own three-byte
/// value, so lenient output is not always legal UTF-8.
///
/// [`convert_utf16_to_utf32`]: super::convert_utf16_to_utf32
pub fn convert_utf16_to_utf8(
    source: &mut Reader<'_, u16>,
    target: &mut Writer<'_, u8>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    while !source.is_empty() {
        let (ch, consumed) = peek_utf16(source, flags, "utf16 -> utf8")?;

        if !put_utf8(target, ch) {
            return Err(ConversionError::TargetExhausted);
        }
        source.advance(consumed);
    }

    Ok(())
}

/// Converts UTF-8 bytes to UTF-16 code units.
///
/// Malformed byte sequences (overlong forms, bad continuation bytes, encoded
/// surrogates, values above U+10FFFF) are illegal whatever `flags` says. A
/// sequence cut off by the end of the source gives
/// [`ConversionError::SourceExhausted`].
pub fn convert_utf8_to_utf16(
    source: &mut Reader<'_, u8>,
    target: &mut Writer<'_, u16>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    while !source.is_empty() {
        let (ch, consumed) = peek_utf8(source, "utf8 -> utf16")?;

        if !target.has_room(1) {
            return Err(ConversionError::TargetExhausted);
        }

        let (units, len) = match categorize_u32(ch) {
            Some(CodePointCategory::Scalar(c)) => encode_utf16(c),
            _ if flags.is_strict() => {
                return Err(illegal("utf8 -> utf16", source.position()));
            }
            _ => ([REPLACEMENT_CHARACTER as u16, 0], 1),
        };

        if !target.has_room(len) {
            return Err(ConversionError::TargetExhausted);
        }
        target.put(&units[..len]);
        source.advance(consumed);
    }

    Ok(())
}
