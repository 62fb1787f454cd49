//! Single-token parsers.

use std::fmt;

use tarn_lexer::{Token, TokenKind};
use tracing::trace;

use crate::{Context, Cursor, Parser};

/// Matches exactly one token of a fixed definition.
///
/// Optionally restricted to a set of literal texts, for definitions that
/// cover several lexemes (`[-+*/]` as one `OP` definition, say). Leading
/// skippable input is consumed first. The result is the payload decoded by
/// the definition's own decoder.
pub struct Primitive<T> {
    kind: TokenKind<T>,
    texts: Option<Vec<String>>,
}

impl<T> Clone for Primitive<T> {
    fn clone(&self) -> Self {
        Primitive {
            kind: self.kind.clone(),
            texts: self.texts.clone(),
        }
    }
}

impl<T> fmt::Debug for Primitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("tag", &self.kind.tag())
            .field("texts", &self.texts)
            .finish()
    }
}

impl<T> Primitive<T> {
    /// Definition this primitive matches.
    #[inline]
    pub fn kind(&self) -> &TokenKind<T> {
        &self.kind
    }

    fn accepts(&self, token: &Token<'_>) -> bool {
        if !self.kind.matches(token) {
            return false;
        }
        match &self.texts {
            Some(texts) => texts.iter().any(|text| text == token.text()),
            None => true,
        }
    }
}

impl<T> Parser for Primitive<T> {
    type Output = T;

    fn parse(&self, ctx: &Context<'_, '_>, at: Cursor) -> Option<(T, Cursor)> {
        let start = ctx.skip_from(at);
        let matched = ctx
            .token_at(start)
            .filter(|token| self.accepts(token))
            .and_then(|token| self.kind.decode(token).map(|value| (value, token)));

        match matched {
            Some((value, token)) => {
                trace!(tag = token.tag(), text = token.text(), pos = start.position(), "token");
                Some((value, start.next()))
            }
            None => {
                ctx.note_failure(start);
                None
            }
        }
    }
}

/// Parser matching one token of `kind`.
pub fn token<T>(kind: &TokenKind<T>) -> Primitive<T> {
    Primitive {
        kind: kind.clone(),
        texts: None,
    }
}

/// Parser matching one token of `kind` whose text is one of `texts`.
pub fn one_of<T, I, S>(kind: &TokenKind<T>, texts: I) -> Primitive<T>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Primitive {
        kind: kind.clone(),
        texts: Some(texts.into_iter().map(Into::into).collect()),
    }
}
