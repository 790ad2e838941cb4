//! Source and destination cursors over caller-owned buffers.
//!
//! A conversion advances a cursor only past units it has fully consumed or
//! produced. When it stops early, the source cursor sits on the first unit of
//! the character it could not finish, so calling again with more input or a
//! larger destination picks up exactly where it left off.


/// A read cursor: a borrowed source buffer and the index of the next unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reader<'a, T> {
    buf: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> Reader<'a, T> {
    /// Creates a cursor at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [T]) -> Self {
        Self::at(buf, 0)
    }

    /// Creates a cursor at `pos` within `buf`.
    ///
    /// A position past the end is accepted here and rejected by the
    /// conversions with [`SourceIllegal`](crate::ConversionError::SourceIllegal).
    #[inline]
    pub fn at(buf: &'a [T], pos: usize) -> Self {
        Reader { buf, pos }
    }

    /// Index of the next unit to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The units not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        self.buf.get(self.pos..).unwrap_or(&[])
    }

    /// Returns whether every unit has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn get_ref(&self) -> &'a [T] {
        self.buf
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.pos <= self.buf.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<T> {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn peek_at(&self, offset: usize) -> Option<T> {
        self.remaining().get(offset).copied()
    }

    /// Marks `n` more units as consumed. Callers only pass counts they have
    /// already peeked.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining().len());
        self.pos += n;
    }
}

/// A write cursor.
///
/// Either backed by a caller-owned buffer, or counting: a counting writer has
/// no storage and only tracks how many units a conversion would produce.
#[derive(Debug)]
pub struct Writer<'a, T> {
    buf: Option<&'a mut [T]>,
    pos: usize,
}

impl<'a, T: Copy> Writer<'a, T> {
    /// Creates a cursor at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [T]) -> Self {
        Self::at(buf, 0)
    }

    /// Creates a cursor at `pos` within `buf`.
    ///
    /// A position past the end is accepted here and rejected by the
    /// conversions with [`SourceIllegal`](crate::ConversionError::SourceIllegal).
    #[inline]
    pub fn at(buf: &'a mut [T], pos: usize) -> Self {
        Writer { buf: Some(buf), pos }
    }

    /// Creates a counting writer, which makes a conversion compute its output
    /// length without writing anything.
    #[inline]
    pub fn counting() -> Self {
        Writer { buf: None, pos: 0 }
    }

    /// Returns whether this writer only counts.
    #[inline]
    pub fn is_counting(&self) -> bool {
        self.buf.is_none()
    }

    /// Number of units written so far, or that would have been written for a
    /// counting writer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Free space left in the buffer, or `None` for a counting writer.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.buf
            .as_deref()
            .map(|buf| buf.len().saturating_sub(self.pos))
    }

    /// The units written so far. Empty for a counting writer.
    #[inline]
    pub fn written(&self) -> &[T] {
        match self.buf.as_deref() {
            Some(buf) => buf.get(..self.pos).unwrap_or(buf),
            None => &[],
        }
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        self.buf.as_deref().map_or(true, |buf| self.pos <= buf.len())
    }

    #[inline]
    pub(crate) fn has_room(&self, n: usize) -> bool {
        self.remaining().map_or(true, |free| free >= n)
    }

    /// Appends `units`. Callers check [`has_room`](Self::has_room) first.
    #[inline]
    pub(crate) fn put(&mut self, units: &[T]) {
        if let Some(buf) = self.buf.as_deref_mut() {
            buf[self.pos..self.pos + units.len()].copy_from_slice(units);
        }
        self.pos += units.len();
    }
}
