//! Tokens and the token sequence produced by [`tokenize`](crate::tokenize).

use std::fmt;
use std::ops::Index;

use crate::{Span, TokenId, TokenKind};

/// A classified lexeme.
///
/// Carries the id and tag of the definition that produced it, the raw
/// matched text, and its byte span. The payload is not decoded up front;
/// use [`TokenKind::decode`] (or [`Token::decode`]) when it is needed.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    id: TokenId,
    tag: &'static str,
    text: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub(crate) fn new(id: TokenId, tag: &'static str, text: &'src str, span: Span) -> Self {
        Token {
            id,
            tag,
            text,
            span,
        }
    }

    /// Definition that produced this token.
    #[inline]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Tag of the producing definition, for dispatch and display.
    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The matched source text.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.text
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Decode the payload through the definition's handle.
    ///
    /// Same as `kind.decode(self)`.
    #[inline]
    pub fn decode<T>(&self, kind: &TokenKind<T>) -> Option<T> {
        kind.decode(self)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {:?}", self.tag, self.text, self.span)
    }
}

/// The full token stream for one source text.
///
/// Immutable once produced. Borrows the source, so it lives no longer than
/// the text it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSequence<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenSequence<'src> {
    #[inline]
    pub(crate) fn new(source: &'src str, tokens: Vec<Token<'src>>) -> Self {
        TokenSequence { source, tokens }
    }

    /// The text the tokens were produced from.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<'src>> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }

    /// Byte offset where the token at `index` starts.
    ///
    /// Positions at or past the end map to the source length.
    pub fn offset_of(&self, index: usize) -> usize {
        self.tokens
            .get(index)
            .map_or(self.source.len(), |token| token.span().start as usize)
    }
}

impl<'src> Index<usize> for TokenSequence<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, 'src> IntoIterator for &'a TokenSequence<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
