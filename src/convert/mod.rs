//! The six conversions between UTF-8, UTF-16 and UTF-32.
//!
//! Every conversion has the same shape: it reads from a [`Reader`], writes to
//! a [`Writer`], and runs until the source is consumed or one of the
//! [`ConversionError`] conditions stops it. Passing [`Writer::counting`]
//! computes the output length instead of writing.

use crate::codepoint::{CodePoint, Surrogate};
use crate::cursor::{Reader, Writer};
use crate::utf8;
use core::fmt;

mod utf16_utf32;
mod utf16_utf8;
mod utf32_utf8;

pub use utf16_utf32::{convert_utf16_to_utf32, convert_utf32_to_utf16};
pub use utf16_utf8::{convert_utf16_to_utf8, convert_utf8_to_utf16};
pub use utf32_utf8::{convert_utf32_to_utf8, convert_utf8_to_utf32};


/// How a conversion treats values that are well formed but not allowed in
/// the target encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConversionFlags {
    /// Stop with [`ConversionError::SourceIllegal`].
    #[default]
    Strict,
    /// Write U+FFFD and carry on.
    Lenient,
}

impl ConversionFlags {
    #[inline]
    pub(crate) fn is_strict(self) -> bool {
        self == ConversionFlags::Strict
    }
}

/// Why a conversion stopped before consuming its whole source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConversionError {
    /// The source ends in the middle of a character. The source cursor is on
    /// its first unit; supply more input and call again.
    SourceExhausted,
    /// The destination is full. The source cursor is on the first unit of the
    /// character that did not fit; grow the destination and call again.
    TargetExhausted,
    /// The source holds something the active [`ConversionFlags`] do not allow.
    SourceIllegal,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConversionError::SourceExhausted => "partial character at the end of the source",
            ConversionError::TargetExhausted => "insufficient room in the target buffer",
            ConversionError::SourceIllegal => "illegal sequence in the source",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Outcome of a conversion; `Ok(())` means the whole source was consumed.
pub type ConversionResult = Result<(), ConversionError>;

/// Rejects cursors that already sit past the end of their buffer.
#[inline]
fn check_cursors<S: Copy, T: Copy>(
    source: &Reader<'_, S>,
    target: &Writer<'_, T>,
) -> ConversionResult {
    if source.is_valid() && target.is_valid() {
        Ok(())
    } else {
        Err(ConversionError::SourceIllegal)
    }
}

#[cfg(feature = "log")]
#[inline]
fn illegal(op: &str, at: usize) -> ConversionError {
    log::debug!("{}: illegal sequence at source index {}", op, at);
    ConversionError::SourceIllegal
}

#[cfg(not(feature = "log"))]
#[inline]
fn illegal(_op: &str, _at: usize) -> ConversionError {
    ConversionError::SourceIllegal
}

/// Reads one UTF-16 character without consuming it, joining surrogate pairs.
///
/// Returns the value and the number of units it spans. A high surrogate must
/// be followed by a low one in either mode; a lone low surrogate is only
/// passed through when lenient.
fn peek_utf16(
    source: &Reader<'_, u16>,
    flags: ConversionFlags,
    op: &str,
) -> Result<(u32, usize), ConversionError> {
    let at = source.position();
    let unit = match source.peek() {
        Some(unit) => unit,
        None => return Err(ConversionError::SourceExhausted),
    };

    match Surrogate::from_u16(unit) {
        Some(high) if high.is_high_surrogate() => {
            let next = match source.peek_at(1) {
                Some(next) => next,
                None => return Err(ConversionError::SourceExhausted),
            };
            Surrogate::from_u16(next)
                .and_then(|low| CodePoint::from_surrogate_pair(high, low))
                .map(|c| (c.to_u32(), 2))
                .ok_or_else(|| illegal(op, at))
        }
        Some(_) if flags.is_strict() => Err(illegal(op, at)),
        _ => Ok((unit as u32, 1)),
    }
}

/// Reads one UTF-8 sequence without consuming it.
///
/// A sequence cut short by the end of the source is reported before its
/// legality is checked. Illegal byte sequences are rejected in both modes.
fn peek_utf8(source: &Reader<'_, u8>, op: &str) -> Result<(u32, usize), ConversionError> {
    let rest = source.remaining();
    let lead = match rest.first() {
        Some(&lead) => lead,
        None => return Err(ConversionError::SourceExhausted),
    };

    let seq = match rest.get(..utf8::sequence_len(lead)) {
        Some(seq) => seq,
        None => return Err(ConversionError::SourceExhausted),
    };
    if !utf8::is_legal_utf8(seq) {
        return Err(illegal(op, source.position()));
    }

    Ok((utf8::decode(seq), seq.len()))
}

/// Writes `ch` as UTF-8, returning whether it fit.
#[inline]
fn put_utf8(target: &mut Writer<'_, u8>, ch: u32) -> bool {
    let (bytes, len) = utf8::encode(ch);
    if !target.has_room(len) {
        return false;
    }
    target.put(&bytes[..len]);
    true
}

/// Splits a scalar value into one or two UTF-16 units.
#[inline]
fn encode_utf16(c: char) -> ([u16; 2], usize) {
    match CodePoint::from_char(c).to_surrogate_pair() {
        Some((high, low)) => ([high.to_u16(), low.to_u16()], 2),
        None => ([c as u16, 0], 1),
    }
}
