//! Per-call matching context: the tokens, the end bound, the skip parser,
//! and the furthest-failure tracker.

use std::cell::Cell;

use tarn_lexer::Token;

use crate::{Cursor, Grammar, Parser};

/// Parser for insignificant input consumed ahead of every primitive.
///
/// Implemented for every [`Parser`]; the output is thrown away.
pub trait Skip {
    /// Try to consume one run of skippable input starting at `at`.
    fn skip_once(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<Cursor>;
}

impl<P: Parser + ?Sized> Skip for P {
    #[inline]
    fn skip_once(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<Cursor> {
        self.parse(ctx, at).map(|(_, next)| next)
    }
}

/// Everything a parser needs besides its starting cursor.
///
/// Built by a [`Session`](crate::Session) for each match call. Cheap to
/// copy; all fields are borrows.
#[derive(Clone, Copy)]
pub struct Context<'a, 'src> {
    tokens: &'a [Token<'src>],
    grammar: &'a Grammar,
    end: usize,
    skip: Option<&'a dyn Skip>,
    furthest: &'a Cell<usize>,
}

impl<'a, 'src> Context<'a, 'src> {
    pub(crate) fn new(
        tokens: &'a [Token<'src>],
        grammar: &'a Grammar,
        end: Cursor,
        skip: Option<&'a dyn Skip>,
        furthest: &'a Cell<usize>,
    ) -> Self {
        Context {
            tokens,
            grammar,
            end: end.position().min(tokens.len()),
            skip,
            furthest,
        }
    }

    /// The grammar rules resolve against.
    #[inline]
    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Exclusive end bound; nothing matches at or past it.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.end)
    }

    /// Token under `at`, or `None` at or past the end bound.
    #[inline]
    pub fn token_at(&self, at: Cursor) -> Option<&'a Token<'src>> {
        if at.position() >= self.end {
            return None;
        }
        self.tokens.get(at.position())
    }

    /// The same context with skipping disabled.
    ///
    /// Skip parsers run under this so they never recurse into themselves.
    #[inline]
    #[must_use]
    pub fn without_skip(&self) -> Self {
        Context { skip: None, ..*self }
    }

    /// Consume skippable input from `at` for as long as the skip parser
    /// keeps advancing.
    pub fn skip_from(&self, at: Cursor) -> Cursor {
        let Some(skip) = self.skip else {
            return at;
        };
        let inner = self.without_skip();
        let mut cursor = at;
        while let Some(next) = skip.skip_once(&inner, cursor) {
            if next <= cursor {
                break;
            }
            cursor = next;
        }
        cursor
    }

    /// Record that a token could not be matched at `at`.
    #[inline]
    pub fn note_failure(&self, at: Cursor) {
        if at.position() > self.furthest.get() {
            self.furthest.set(at.position());
        }
    }

    /// Furthest position any primitive failed at so far.
    #[inline]
    pub fn furthest(&self) -> Cursor {
        Cursor::new(self.furthest.get())
    }
}
