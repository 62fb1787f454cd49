//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `end_to_end`: tokenize-then-parse scenarios over small arithmetic grammars
//! - `session`: match outcomes, end bounds, and syntax error positions
//! - `properties`: proptest checks of the cursor contract and combinator laws
//!
//! Combinator and grammar unit tests live next to their modules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod end_to_end;

use tarn_lexer::{tokenize, TokenKind, TokenSequence, TokensDescription};

use crate::{Match, Parser, Session, Skip};

/// Token definitions shared by the tests: a tiny expression language.
pub(crate) struct Lang {
    pub description: TokensDescription,
    pub ws: TokenKind<()>,
    pub hex: TokenKind<i64>,
    pub int: TokenKind<i64>,
    pub ident: TokenKind<String>,
    pub op: TokenKind<String>,
    pub lparen: TokenKind<()>,
    pub rparen: TokenKind<()>,
}

impl Lang {
    pub fn new() -> Self {
        let mut description = TokensDescription::new();
        let ws = description.define("WS", r"\s+", |_| Some(())).unwrap();
        let hex = description
            .define("HEX", "0[xX][0-9a-fA-F]+", |s| {
                i64::from_str_radix(&s[2..], 16).ok()
            })
            .unwrap();
        let int = description
            .define("INT", "[0-9]+", |s| s.parse::<i64>().ok())
            .unwrap();
        let ident = description
            .define_text("IDENT", "[A-Za-z_][A-Za-z0-9_]*")
            .unwrap();
        let op = description.define_text("OP", "[-+*/]").unwrap();
        let lparen = description.define("LPAREN", r"\(", |_| Some(())).unwrap();
        let rparen = description.define("RPAREN", r"\)", |_| Some(())).unwrap();

        Lang {
            description,
            ws,
            hex,
            int,
            ident,
            op,
            lparen,
            rparen,
        }
    }

    pub fn lex<'s>(&self, source: &'s str) -> TokenSequence<'s> {
        tokenize(source, &self.description).unwrap()
    }
}

/// Run `parser` over the whole of `tokens` in a rule-free session.
pub(crate) fn run<P: Parser>(
    tokens: &TokenSequence<'_>,
    parser: &P,
    skip: Option<&dyn Skip>,
) -> Match<P::Output> {
    let session = Session::standalone(tokens);
    session.run(parser, session.start(), session.end(), skip)
}
