//! Backtracking parser combinators over Tarn token sequences.
//!
//! Grammars are built once from three kinds of node:
//!
//! - [`Primitive`]s match one token of a given definition
//!   ([`token`], [`one_of`]);
//! - combinators compose nodes ([`sequence`], [`alternative`], [`either`],
//!   [`many`], [`many1`], [`exclude`], [`discard`], [`optional`], [`map`],
//!   or the same through [`ParserExt`]);
//! - [`Rule`]s name a production so it can be referenced before it is
//!   defined, which is what recursive grammars need. Rules are declared and
//!   bound through a [`GrammarBuilder`].
//!
//! Per input, open a [`Session`] over the token sequence and run a parser.
//! Matching backtracks freely: every node either returns a value and a new
//! [`Cursor`], or nothing, in which case the caller's cursor is unchanged.
//!
//! # Ambiguity
//!
//! Alternatives are ordered and the first match wins. There is no operator
//! precedence: a flat rule like `expr = atom op expr | atom` groups by
//! declaration order alone.

mod combinator;
mod context;
mod cursor;
mod either;
mod grammar;
mod parser;
mod primitive;
mod session;
mod stack;

pub use combinator::{
    alternative, discard, either, exclude, many, many1, map, optional, sequence, Alternative,
    Discard, EitherOf, Exclude, IgnoreThen, Many, Many1, Map, Optional, Sequence, ThenIgnore,
};
pub use context::{Context, Skip};
pub use cursor::Cursor;
pub use either::Either;
pub use grammar::{Grammar, GrammarBuilder, GrammarError, Rule, RuleId};
pub use parser::{BoxedParser, Parser, ParserExt};
pub use primitive::{one_of, token, Primitive};
pub use session::{Match, Session, SyntaxError};
pub use stack::ensure_sufficient_stack;

#[cfg(test)]
mod tests;
