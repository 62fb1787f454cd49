//! Token definitions and the ordered registry that holds them.
//!
//! Registration order is match priority: at any offset the tokenizer picks
//! the first definition whose pattern matches, even if a later one would
//! match more text. Keywords therefore go before identifiers, `0x` literals
//! before plain integers, and so on.
//!
//! # Typed payloads
//!
//! [`TokensDescription::define`] returns a [`TokenKind<T>`] carrying the
//! decoder for that definition. Decoding goes through the handle, so a token
//! can only ever be decoded as the type its own definition declared. Asking
//! a handle to decode a token from another definition returns `None`.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::Token;

/// Index of a definition inside its [`TokensDescription`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    /// Position of the definition in registration order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error raised while registering a definition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern for token `{tag}`")]
    InvalidPattern {
        tag: &'static str,
        #[source]
        source: regex::Error,
    },
    /// The pattern accepts empty text. The tokenizer would never advance.
    #[error("pattern `{pattern}` for token `{tag}` matches empty text")]
    ZeroWidth {
        tag: &'static str,
        pattern: String,
    },
}

type Decoder<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Typed handle to one registered definition.
///
/// Cheap to clone. The handle is the only way to decode a token's payload,
/// which ties the payload type to the definition at construction time.
pub struct TokenKind<T> {
    id: TokenId,
    tag: &'static str,
    decode: Decoder<T>,
}

impl<T> TokenKind<T> {
    /// The definition this handle was issued for.
    #[inline]
    pub fn id(&self) -> TokenId {
        self.id
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Whether `token` was produced by this definition.
    #[inline]
    pub fn matches(&self, token: &Token<'_>) -> bool {
        token.id() == self.id
    }

    /// Decode the payload of `token`.
    ///
    /// Returns `None` if the token belongs to another definition or the
    /// decoder rejects its text (e.g. an integer literal that overflows).
    pub fn decode(&self, token: &Token<'_>) -> Option<T> {
        if !self.matches(token) {
            return None;
        }
        (self.decode)(token.text())
    }
}

impl<T> Clone for TokenKind<T> {
    fn clone(&self) -> Self {
        TokenKind {
            id: self.id,
            tag: self.tag,
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for TokenKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKind")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// One registered pattern, compiled and anchored at the match offset.
#[derive(Clone, Debug)]
struct Definition {
    tag: &'static str,
    pattern: String,
    anchored: Regex,
}

/// Result of probing the description at one offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Probe {
    pub(crate) id: TokenId,
    pub(crate) tag: &'static str,
    pub(crate) len: usize,
}

/// Ordered registry of token definitions; the tokenizer's priority list.
#[derive(Clone, Debug, Default)]
pub struct TokensDescription {
    definitions: Vec<Definition>,
}

impl TokensDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition and return its typed handle.
    ///
    /// `pattern` is matched anchored at the current offset; a leading `^` is
    /// not needed. Patterns that accept the empty string are rejected.
    pub fn define<T, F>(
        &mut self,
        tag: &'static str,
        pattern: &str,
        decode: F,
    ) -> Result<TokenKind<T>, DefinitionError>
    where
        F: Fn(&str) -> Option<T> + Send + Sync + 'static,
    {
        let anchored = Regex::new(&format!(r"\A(?:{pattern})"))
            .map_err(|source| DefinitionError::InvalidPattern { tag, source })?;
        if anchored.is_match("") {
            return Err(DefinitionError::ZeroWidth {
                tag,
                pattern: pattern.to_owned(),
            });
        }

        let id = TokenId(u32::try_from(self.definitions.len()).unwrap_or(u32::MAX));
        self.definitions.push(Definition {
            tag,
            pattern: pattern.to_owned(),
            anchored,
        });
        tracing::trace!(tag, pattern, index = id.index(), "registered token definition");

        Ok(TokenKind {
            id,
            tag,
            decode: Arc::new(decode),
        })
    }

    /// Register a definition whose payload is the matched text itself.
    pub fn define_text(
        &mut self,
        tag: &'static str,
        pattern: &str,
    ) -> Result<TokenKind<String>, DefinitionError> {
        self.define(tag, pattern, |text| Some(text.to_owned()))
    }

    /// Number of registered definitions.
    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Tag of the definition at `id`.
    pub fn tag(&self, id: TokenId) -> Option<&'static str> {
        self.definitions.get(id.index()).map(|d| d.tag)
    }

    /// Source pattern of the definition at `id`, as registered.
    pub fn pattern(&self, id: TokenId) -> Option<&str> {
        self.definitions.get(id.index()).map(|d| d.pattern.as_str())
    }

    /// Find the first definition matching at the start of `rest`.
    ///
    /// The returned length may be zero for patterns that only match empty
    /// text in context (word boundaries, line anchors); the tokenizer turns
    /// that into an error.
    pub(crate) fn probe(&self, rest: &str) -> Option<Probe> {
        self.definitions
            .iter()
            .enumerate()
            .find_map(|(index, definition)| {
                definition.anchored.find(rest).map(|m| Probe {
                    id: TokenId(u32::try_from(index).unwrap_or(u32::MAX)),
                    tag: definition.tag,
                    len: m.end(),
                })
            })
    }
}
