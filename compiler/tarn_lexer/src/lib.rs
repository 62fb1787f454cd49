//! Regex-driven tokenizer for Tarn grammars.
//!
//! A [`TokensDescription`] is an ordered list of token definitions. Each
//! definition pairs a tag with a regular expression and a decoder, and
//! registering it hands back a typed [`TokenKind`] handle. [`tokenize`] walks
//! the source left to right and, at every offset, emits a token for the
//! first definition (in registration order) whose pattern matches there.
//!
//! Nothing is skipped implicitly. Whitespace and comments need their own
//! definitions; the parser layer filters them out with skip parsers.
//!
//! ```text
//! let mut description = TokensDescription::new();
//! let ws = description.define("WS", r"\s+", |_| Some(()))?;
//! let int = description.define("INT", "[0-9]+", |s| s.parse::<i64>().ok())?;
//!
//! let tokens = tokenize("12 34", &description)?;
//! assert_eq!(int.decode(&tokens[0]), Some(12));
//! ```

mod definition;
mod lex_error;
mod span;
mod token;
mod tokenize;

pub use definition::{DefinitionError, TokenId, TokenKind, TokensDescription};
pub use lex_error::LexError;
pub use span::Span;
pub use token::{Token, TokenSequence};
pub use tokenize::tokenize;
