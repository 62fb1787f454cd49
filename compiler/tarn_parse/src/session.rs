//! Driving a match over one token sequence.
//!
//! Matching itself never fails loudly: a parser either produces a value or
//! nothing. [`Session::run`] reports that raw outcome together with the
//! furthest position any primitive failed at. Whether a non-match, or a
//! match that stops short of the end, is an error is the caller's call;
//! [`Session::parse_all`] is the common answer, turning both into a
//! [`SyntaxError`].

use std::cell::Cell;

use tarn_lexer::TokenSequence;
use tracing::debug;

use crate::{Context, Cursor, Grammar, Parser, Skip};

/// Raw outcome of one match call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<T> {
    /// The result, if the parser matched.
    pub value: Option<T>,
    /// Where matching stopped: past the consumed input on success, the
    /// starting cursor on failure.
    pub cursor: Cursor,
    /// Furthest position reached, including failed attempts.
    pub furthest: Cursor,
}

impl<T> Match<T> {
    #[inline]
    pub fn is_match(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Input that could not be parsed in full.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("syntax error at offset {offset}: unexpected `{found}`")]
    UnexpectedToken { offset: usize, found: String },

    #[error("syntax error at offset {offset}: unexpected end of input")]
    UnexpectedEnd { offset: usize },
}

impl SyntaxError {
    /// Byte offset into the source.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { offset, .. } | SyntaxError::UnexpectedEnd { offset } => {
                *offset
            }
        }
    }

    fn at(tokens: &TokenSequence<'_>, at: Cursor) -> Self {
        let offset = tokens.offset_of(at.position());
        match tokens.get(at.position()) {
            Some(token) => SyntaxError::UnexpectedToken {
                offset,
                found: token.text().to_owned(),
            },
            None => SyntaxError::UnexpectedEnd { offset },
        }
    }
}

/// One parse over one token sequence.
///
/// Holds only borrows; any number of sessions may share a grammar and a
/// token sequence, on any threads.
#[derive(Clone, Copy, Debug)]
pub struct Session<'a, 'src> {
    grammar: &'a Grammar,
    tokens: &'a TokenSequence<'src>,
}

impl<'a, 'src> Session<'a, 'src> {
    pub fn new(grammar: &'a Grammar, tokens: &'a TokenSequence<'src>) -> Self {
        Session { grammar, tokens }
    }

    /// Session for parsers that use no rules.
    pub fn standalone(tokens: &'a TokenSequence<'src>) -> Self {
        Session {
            grammar: Grammar::empty(),
            tokens,
        }
    }

    #[inline]
    pub fn tokens(&self) -> &'a TokenSequence<'src> {
        self.tokens
    }

    /// Cursor at the first token.
    #[inline]
    pub fn start(&self) -> Cursor {
        Cursor::START
    }

    /// Cursor one past the last token.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.tokens.len())
    }

    /// Match `parser` from `from`, never looking at or past `end`.
    ///
    /// `skip` is consumed ahead of every primitive.
    pub fn run<P: Parser + ?Sized>(
        &self,
        parser: &P,
        from: Cursor,
        end: Cursor,
        skip: Option<&dyn Skip>,
    ) -> Match<P::Output> {
        let furthest = Cell::new(from.position());
        let ctx = Context::new(self.tokens.as_slice(), self.grammar, end, skip, &furthest);
        let outcome = parser.parse(&ctx, from);

        match outcome {
            Some((value, next)) => Match {
                value: Some(value),
                cursor: next,
                furthest: next.max(ctx.furthest()),
            },
            None => Match {
                value: None,
                cursor: from,
                furthest: ctx.furthest(),
            },
        }
    }

    /// Match `parser` against the whole sequence.
    ///
    /// Trailing skippable input is allowed. Anything else left over, or no
    /// match at all, is reported at the furthest position reached.
    pub fn parse_all<P: Parser + ?Sized>(
        &self,
        parser: &P,
        skip: Option<&dyn Skip>,
    ) -> Result<P::Output, SyntaxError> {
        let furthest = Cell::new(0);
        let ctx = Context::new(self.tokens.as_slice(), self.grammar, self.end(), skip, &furthest);

        let failure = match parser.parse(&ctx, self.start()) {
            Some((value, next)) => {
                let rest = ctx.skip_from(next);
                if rest == self.end() {
                    return Ok(value);
                }
                rest.max(ctx.furthest())
            }
            None => ctx.furthest(),
        };

        let error = SyntaxError::at(self.tokens, failure);
        debug!(%error, "parse failed");
        Err(error)
    }
}
