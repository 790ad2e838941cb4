use super::{
    check_cursors, illegal, peek_utf8, put_utf8, ConversionError, ConversionFlags,
    ConversionResult,
};
use crate::codepoint::{categorize_u32, CodePointCategory, REPLACEMENT_CHARACTER};
use crate::cursor::{Reader, Writer};

/// Converts UTF-32 code points to UTF-8 bytes.
///
/// Surrogate values stop the conversion when strict and are encoded as their
/// own three-byte value when lenient. Values above U+10FFFF are handled
/// differently: in both modes they are written as U+FFFD and the conversion
/// goes on, but the call then returns [`ConversionError::SourceIllegal`] once
/// the source is consumed. A later [`ConversionError::TargetExhausted`] takes
/// precedence.
pub fn convert_utf32_to_utf8(
    source: &mut Reader<'_, u32>,
    target: &mut Writer<'_, u8>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    let mut result = Ok(());
    while let Some(ch) = source.peek() {
        let ch = match categorize_u32(ch) {
            Some(CodePointCategory::Surrogate(_)) if flags.is_strict() => {
                return Err(illegal("utf32 -> utf8", source.position()));
            }
            Some(_) => ch,
            None => {
                result = Err(illegal("utf32 -> utf8", source.position()));
                REPLACEMENT_CHARACTER
            }
        };

        if !put_utf8(target, ch) {
            return Err(ConversionError::TargetExhausted);
        }
        source.advance(1);
    }

    result
}

/// Converts UTF-8 bytes to UTF-32 code points.
///
/// Malformed byte sequences are illegal in both modes. Decoded surrogate
/// values stop the conversion when strict and become U+FFFD when lenient;
/// values above U+10FFFF get the same soft failure as in
/// [`convert_utf32_to_utf8`].
pub fn convert_utf8_to_utf32(
    source: &mut Reader<'_, u8>,
    target: &mut Writer<'_, u32>,
    flags: ConversionFlags,
) -> ConversionResult {
    check_cursors(source, target)?;

    let mut result = Ok(());
    while !source.is_empty() {
        let (ch, consumed) = peek_utf8(source, "utf8 -> utf32")?;

        if !target.has_room(1) {
            return Err(ConversionError::TargetExhausted);
        }

        let ch = match categorize_u32(ch) {
            Some(CodePointCategory::Scalar(_)) => ch,
            Some(CodePointCategory::Surrogate(_)) if flags.is_strict() => {
                return Err(illegal("utf8 -> utf32", source.position()));
            }
            Some(CodePointCategory::Surrogate(_)) => REPLACEMENT_CHARACTER,
            None => {
                result = Err(illegal("utf8 -> utf32", source.position()));
                REPLACEMENT_CHARACTER
            }
        };

        target.put(&[ch]);
        source.advance(consumed);
    }

    result
}
