//! UTF-8 lookup tables, the legality validator, and the byte-level decode and
//! encode steps used by the conversions.

use crate::codepoint::{MAX_LEGAL_UTF32, REPLACEMENT_CHARACTER};

#[cfg(test)]
mod tests;

/// Number of trailing bytes that follow a given lead byte.
///
/// Legal UTF-8 never uses the 4 and 5 entries; they are kept so that the
/// decoder can still tell how long an obsolete 5 or 6 byte sequence claims
/// to be before rejecting it.
pub(crate) static TRAILING_BYTES_FOR_UTF8: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0xC0;
    while i < 256 {
        table[i] = match i {
            0xC0..=0xDF => 1,
            0xE0..=0xEF => 2,
            0xF0..=0xF7 => 3,
            0xF8..=0xFB => 4,
            _ => 5,
        };
        i += 1;
    }
    table
};

/// Values subtracted after accumulating a sequence, cancelling the lead byte
/// marker and the `0x80` of every continuation byte. Indexed by trailing count.
pub(crate) static OFFSETS_FROM_UTF8: [u32; 6] = [
    0x0000_0000,
    0x0000_3080,
    0x000E_2080,
    0x03C8_2080,
    0xFA08_2080,
    0x8208_2080,
];

/// Marker OR-ed into the lead byte, indexed by total sequence length.
pub(crate) static FIRST_BYTE_MARK: [u8; 7] = [0x00, 0x00, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC];

const CONT_MARK: u32 = 0x80;
const CONT_MASK: u32 = 0xBF;

/// Returns the total length of the sequence introduced by `lead`.
#[inline]
pub(crate) fn sequence_len(lead: u8) -> usize {
    TRAILING_BYTES_FOR_UTF8[lead as usize] as usize + 1
}

/// Returns whether `seq`, taken as one complete sequence, is legal UTF-8.
///
/// The length of the candidate is the length of the slice. Overlong forms,
/// encoded surrogates, values above U+10FFFF, and the obsolete 5 and 6 byte
/// forms are all rejected.
pub fn is_legal_utf8(seq: &[u8]) -> bool {
    let (&lead, trail) = match seq.split_first() {
        Some(x) => x,
        None => return false,
    };
    if seq.len() > 4 {
        return false;
    }

    if let Some((&second, rest)) = trail.split_first() {
        if rest.iter().any(|b| !matches!(b, 0x80..=0xBF)) {
            return false;
        }
        let second_ok = match lead {
            0xE0 => matches!(second, 0xA0..=0xBF),
            0xED => matches!(second, 0x80..=0x9F),
            0xF0 => matches!(second, 0x90..=0xBF),
            0xF4 => matches!(second, 0x80..=0x8F),
            _ => matches!(second, 0x80..=0xBF),
        };
        if !second_ok {
            return false;
        }
    }

    !matches!(lead, 0x80..=0xC1 | 0xF5..=0xFF)
}

/// Returns whether `source` starts with a legal UTF-8 sequence.
///
/// The sequence length comes from the lead byte; the end of `source` is the
/// bound, so a sequence cut short by it is not legal.
pub fn is_legal_utf8_sequence(source: &[u8]) -> bool {
    match source.first() {
        Some(&lead) => source
            .get(..sequence_len(lead))
            .map_or(false, is_legal_utf8),
        None => false,
    }
}

/// Accumulates the value of a sequence already checked with [`is_legal_utf8`].
#[inline]
pub(crate) fn decode(seq: &[u8]) -> u32 {
    let mut ch: u32 = 0;
    for (i, &b) in seq.iter().enumerate() {
        if i > 0 {
            ch <<= 6;
        }
        ch = ch.wrapping_add(b as u32);
    }
    ch.wrapping_sub(OFFSETS_FROM_UTF8[seq.len() - 1])
}

/// Number of bytes needed to write `ch`.
///
/// Anything at or above 0x110000 is written as the replacement character and
/// so takes three bytes.
#[inline]
pub(crate) fn encoded_len(ch: u32) -> usize {
    match ch {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        0x1_0000..=MAX_LEGAL_UTF32 => 4,
        _ => 3,
    }
}

/// Encodes `ch` into the first [`encoded_len`] bytes of the returned array.
#[inline]
pub(crate) fn encode(ch: u32) -> ([u8; 4], usize) {
    let len = encoded_len(ch);
    let mut ch = if ch > MAX_LEGAL_UTF32 {
        REPLACEMENT_CHARACTER
    } else {
        ch
    };

    // Continuation bytes are filled from the back, then the lead byte.
    let mut bytes = [0u8; 4];
    for b in bytes[1..len].iter_mut().rev() {
        *b = ((ch | CONT_MARK) & CONT_MASK) as u8;
        ch >>= 6;
    }
    bytes[0] = (ch | FIRST_BYTE_MARK[len] as u32) as u8;
    (bytes, len)
}
