//! Positions into a token sequence.

use std::fmt;

/// Index of the next token to examine.
///
/// Cursors are plain values. A parser takes the cursor it starts from and,
/// on success, returns a new one; on failure it returns nothing and the
/// caller still holds its original cursor. A failed attempt therefore can
/// never leave the position partially advanced.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cursor {
    pos: usize,
}

impl Cursor {
    /// Cursor at the first token.
    pub const START: Cursor = Cursor { pos: 0 };

    #[inline]
    pub const fn new(pos: usize) -> Self {
        Cursor { pos }
    }

    /// Index into the token sequence.
    #[inline]
    pub const fn position(self) -> usize {
        self.pos
    }

    /// The cursor one token further on.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Cursor {
        Cursor { pos: self.pos + 1 }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.pos)
    }
}
