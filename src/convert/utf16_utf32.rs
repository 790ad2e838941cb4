use super::{
    check_cursors, encode_utf16, illegal, peek_utf16, ConversionError, ConversionFlags,
    ConversionResult,
};
use crate::codepoint::{categorize_u32, CodePointCategory, REPLACEMENT_CHARACTER};
use crate::cursor::{Reader, Writer};

/// Converts UTF-32 code points to UTF-16 code units.
///
/// Surrogate values and values above U+10FFFF stop the conversion when
/// `flags` is strict, with the source cursor on the offending value, and are
/// written as U+FFFD when lenient.
pub fn convert_utf32_to_utf16(
    source: &mut Reader<'_, u32>,
    target: &mut Writer<'_, u16>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    while let Some(ch) = source.peek() {
        let (units, len) = match categorize_u32(ch) {
            Some(CodePointCategory::Scalar(c)) => encode_utf16(c),
            _ if flags.is_strict() => {
                return Err(illegal("utf32 -> utf16", source.position()));
            }
            _ => ([REPLACEMENT_CHARACTER as u16, 0], 1),
        };

        if !target.has_room(len) {
            return Err(ConversionError::TargetExhausted);
        }
        target.put(&units[..len]);
        source.advance(1);
    }

    Ok(())
}

/// Converts UTF-16 code units to UTF-32 code points.
///
/// Surrogate pairs are joined. A high surrogate at the very end of the source
/// is reported as [`ConversionError::SourceExhausted`]; one followed by
/// anything but a low surrogate is illegal in both modes. A lone low
/// surrogate is illegal when strict and copied through as is when lenient.
pub fn convert_utf16_to_utf32(
    source: &mut Reader<'_, u16>,
    target: &mut Writer<'_, u32>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    while !source.is_empty() {
        let (ch, consumed) = peek_utf16(source, flags, "utf16 -> utf32")?;

        if !target.has_room(1) {
            return Err(ConversionError::TargetExhausted);
        }
        target.put(&[ch]);
        source.advance(consumed);
    }

    Ok(())
}
