#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # utfcvt
//!
//! Conversions between UTF-8, UTF-16 and UTF-32 over caller-owned buffers.
//!
//! Nothing here allocates. Each conversion reads from a [`Reader`] and writes
//! to a [`Writer`], advancing both cursors past what it consumed and produced.
//! When it has to stop, the returned [`ConversionError`] says why, and the
//! source cursor is left so that calling again resumes cleanly:
//!
//! ```
//! use utfcvt::{convert_utf8_to_utf16, ConversionError, ConversionFlags, Reader, Writer};
//!
//! let input = "a😀".as_bytes();
//! let mut source = Reader::new(input);
//!
//! let mut small = [0u16; 2];
//! let mut target = Writer::new(&mut small);
//! let result = convert_utf8_to_utf16(&mut source, &mut target, ConversionFlags::Strict);
//! assert_eq!(result, Err(ConversionError::TargetExhausted));
//! assert_eq!(target.written(), &[0x61]);
//! assert_eq!(source.position(), 1);
//!
//! let mut large = [0u16; 2];
//! let mut target = Writer::new(&mut large);
//! convert_utf8_to_utf16(&mut source, &mut target, ConversionFlags::Strict).unwrap();
//! assert_eq!(target.written(), &[0xD83D, 0xDE00]);
//! assert!(source.is_empty());
//! ```
//!
//! A [`Writer::counting`] destination computes the output length instead:
//!
//! ```
//! use utfcvt::{convert_utf16_to_utf8, ConversionFlags, Reader, Writer};
//!
//! let mut source = Reader::new(&[0x61u16, 0xD83D, 0xDE00]);
//! let mut target = Writer::counting();
//! convert_utf16_to_utf8(&mut source, &mut target, ConversionFlags::Strict).unwrap();
//! assert_eq!(target.position(), 5);
//! ```

pub mod codepoint;
pub mod convert;
pub mod cursor;
pub mod utf8;

pub use codepoint::{CodePoint, CodePointCategory, Surrogate};
pub use convert::{
    convert_utf16_to_utf32, convert_utf16_to_utf8, convert_utf32_to_utf16, convert_utf32_to_utf8,
    convert_utf8_to_utf16, convert_utf8_to_utf32, ConversionError, ConversionFlags,
    ConversionResult,
};
pub use cursor::{Reader, Writer};
pub use utf8::{is_legal_utf8, is_legal_utf8_sequence};
