//! Unicode code points, surrogates and the surrogate-pair arithmetic shared by
//! every UTF-16 conversion.

use core::fmt;
use core::num::NonZeroU16;

#[cfg(test)]
mod tests;

/// Highest code point of the Basic Multilingual Plane.
pub const MAX_BMP: u32 = 0xFFFF;

/// Highest code point defined by the Unicode standard.
pub const MAX_LEGAL_UTF32: u32 = 0x10FFFF;

/// `U+FFFD`, written in place of invalid input under lenient conversion.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

const HALF_SHIFT: u32 = 10;
const HALF_BASE: u32 = 0x1_0000;
const HALF_MASK: u32 = 0x3FF;

const SURROGATE_HIGH_START: u16 = 0xD800;
const SURROGATE_LOW_START: u16 = 0xDC00;

/// A Unicode code point: from U+0000 to U+10FFFF.
///
/// Compares with the `char` type,
/// which represents a Unicode scalar value:
/// a code point that is not a surrogate (U+D800 to U+DFFF).
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct CodePoint {
    value: u32,
}

/// Format the code point as `U+` followed by four to six hexadecimal digits.
/// Example: `U+1F600`
impl fmt::Debug for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl CodePoint {
    /// The replacement character “�”.
    pub const REPLACEMENT: CodePoint = CodePoint {
        value: REPLACEMENT_CHARACTER,
    };

    /// The legal maximum, U+10FFFF.
    pub const MAX: CodePoint = CodePoint {
        value: MAX_LEGAL_UTF32,
    };

    /// Creates a new `CodePoint` if the value is a valid code point.
    ///
    /// Returns `None` if `value` is above 0x10FFFF.
    #[inline]
    pub const fn from_u32(value: u32) -> Option<CodePoint> {
        match value {
            0..=MAX_LEGAL_UTF32 => Some(CodePoint { value }),
            _ => None,
        }
    }

    /// Creates a new `CodePoint` from a `char`.
    ///
    /// Since all Unicode scalar values are code points, this always succeeds.
    #[inline]
    pub const fn from_char(value: char) -> CodePoint {
        CodePoint {
            value: value as u32,
        }
    }

    /// Combines a high and a low surrogate into the supplementary code point
    /// they encode.
    ///
    /// Returns `None` unless `high` is a high surrogate and `low` a low one.
    #[inline]
    pub fn from_surrogate_pair(high: Surrogate, low: Surrogate) -> Option<CodePoint> {
        if !high.is_high_surrogate() || low.is_high_surrogate() {
            return None;
        }

        let high = (high.to_u16() - SURROGATE_HIGH_START) as u32;
        let low = (low.to_u16() - SURROGATE_LOW_START) as u32;
        Some(CodePoint {
            value: (high << HALF_SHIFT) + low + HALF_BASE,
        })
    }

    /// Returns the numeric value of the code point.
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        self.value
    }

    /// Optionally returns a Unicode scalar value for the code point.
    ///
    /// Returns `None` if the code point is a surrogate (from U+D800 to U+DFFF).
    #[inline]
    pub fn to_char(&self) -> Option<char> {
        match self.categorize() {
            CodePointCategory::Scalar(c) => Some(c),
            CodePointCategory::Surrogate(_) => None,
        }
    }

    /// Splits a supplementary code point (U+10000 to U+10FFFF) into its
    /// high and low surrogates.
    ///
    /// Returns `None` for code points of the Basic Multilingual Plane, which
    /// take a single UTF-16 unit.
    #[inline]
    pub fn to_surrogate_pair(&self) -> Option<(Surrogate, Surrogate)> {
        if self.value <= MAX_BMP {
            return None;
        }

        let offset = self.value - HALF_BASE;
        let high = (offset >> HALF_SHIFT) as u16 + SURROGATE_HIGH_START;
        let low = (offset & HALF_MASK) as u16 + SURROGATE_LOW_START;
        // Safety: offset is at most 0xFFFFF, so both halves land in the
        // surrogate range.
        unsafe {
            Some((
                Surrogate::from_u16_unchecked(high),
                Surrogate::from_u16_unchecked(low),
            ))
        }
    }

    /// Returns a [CodePointCategory], categorizing the code point as a surrogate
    /// or a valid Unicode scalar.
    #[inline]
    pub fn categorize(&self) -> CodePointCategory {
        match self.value {
            // Safety: value is known to be in surrogate range.
            0xD800..=0xDFFF => CodePointCategory::Surrogate(unsafe {
                Surrogate::from_u16_unchecked(self.value as u16)
            }),
            // Safety: value is not a surrogate and is at most 0x10FFFF, which
            // is guaranteed by the type.
            _ => CodePointCategory::Scalar(unsafe { char::from_u32_unchecked(self.value) }),
        }
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<Surrogate> for CodePoint {
    #[inline]
    fn from(s: Surrogate) -> Self {
        CodePoint {
            value: s.to_u16() as u32,
        }
    }
}

/// A Unicode high or low surrogate: from U+D800 to U+DFFF.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct Surrogate {
    // Every surrogate is non-zero, so Option<Surrogate> packs into 2 bytes.
    value: NonZeroU16,
}

/// Format the surrogate as `U+` followed by four hexadecimal digits.
/// Example: `U+D83D`
impl fmt::Debug for Surrogate {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl Surrogate {
    /// Unsafely creates a new `Surrogate` without checking the value.
    ///
    /// # Safety
    ///
    /// Only safe if `value` is between 0xD800 and 0xDFFF, inclusive.
    #[inline]
    pub unsafe fn from_u16_unchecked(value: u16) -> Surrogate {
        // Safety: if the value is >= 0xD800, it must be non-zero.
        Surrogate {
            value: NonZeroU16::new_unchecked(value),
        }
    }

    /// Creates a new `Surrogate` if the value is a valid Unicode surrogate.
    ///
    /// Returns `None` if `value` is below 0xD800 or above 0xDFFF.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Surrogate> {
        match value {
            // Safety: we have just checked the function invariant.
            0xD800..=0xDFFF => Some(unsafe { Surrogate::from_u16_unchecked(value) }),
            _ => None,
        }
    }

    /// Returns the numeric value of the surrogate.
    #[inline]
    pub fn to_u16(&self) -> u16 {
        self.value.get()
    }

    /// Returns `true` if the surrogate is a high surrogate (from U+D800 to U+DBFF)
    /// and `false` if the surrogate is a low surrogate (from U+DC00 to U+DFFF).
    #[inline]
    pub fn is_high_surrogate(&self) -> bool {
        matches!(self.value.get(), 0xD800..=0xDBFF)
    }
}

/// An enum that separates a Unicode code point into two options:
/// valid Unicode scalar, or surrogate.
///
/// Returned from the [`categorize`] method on [CodePoint].
///
/// [`categorize`]: CodePoint::categorize
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug)]
pub enum CodePointCategory {
    Scalar(char),
    Surrogate(Surrogate),
}

/// Categorizes a raw 32-bit value read from a UTF-32 buffer.
///
/// Returns `None` when the value lies beyond U+10FFFF.
#[inline]
pub(crate) fn categorize_u32(value: u32) -> Option<CodePointCategory> {
    CodePoint::from_u32(value).map(|c| c.categorize())
}
