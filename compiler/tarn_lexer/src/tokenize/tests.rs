#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::TokenKind;

struct Arith {
    description: TokensDescription,
    hex: TokenKind<i64>,
    int: TokenKind<i64>,
    op: TokenKind<String>,
}

fn arith() -> Arith {
    let mut description = TokensDescription::new();
    description.define_text("WS", r"\s+").unwrap();
    let hex = description
        .define("HEX", "0[xX][0-9a-fA-F]+", |s| {
            i64::from_str_radix(&s[2..], 16).ok()
        })
        .unwrap();
    let int = description
        .define("INT", "[0-9]+", |s| s.parse::<i64>().ok())
        .unwrap();
    let op = description.define_text("OP", "[-+*/]").unwrap();
    Arith {
        description,
        hex,
        int,
        op,
    }
}

fn tags_and_text<'a>(tokens: &'a TokenSequence<'_>) -> Vec<(&'static str, &'a str)> {
    tokens.iter().map(|t| (t.tag(), t.text())).collect()
}

#[test]
fn tokenizes_simple_addition() {
    let arith = arith();
    let tokens = tokenize("12+34", &arith.description).unwrap();

    assert_eq!(
        tags_and_text(&tokens),
        vec![("INT", "12"), ("OP", "+"), ("INT", "34")]
    );
    assert_eq!(arith.int.decode(&tokens[0]), Some(12));
    assert_eq!(arith.op.decode(&tokens[1]), Some("+".to_owned()));
    assert_eq!(arith.int.decode(&tokens[2]), Some(34));
}

#[test]
fn hex_literal_is_a_single_token() {
    let arith = arith();
    let tokens = tokenize("0x10", &arith.description).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag(), "HEX");
    assert_eq!(arith.hex.decode(&tokens[0]), Some(16));
}

#[test]
fn whitespace_is_kept_as_tokens() {
    let arith = arith();
    let tokens = tokenize(" 1 \t+ 2\n", &arith.description).unwrap();

    assert_eq!(
        tags_and_text(&tokens),
        vec![
            ("WS", " "),
            ("INT", "1"),
            ("WS", " \t"),
            ("OP", "+"),
            ("WS", " "),
            ("INT", "2"),
            ("WS", "\n"),
        ]
    );
}

#[test]
fn spans_cover_the_source() {
    let arith = arith();
    let source = "10 * 0xff";
    let tokens = tokenize(source, &arith.description).unwrap();

    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.span().start, expected_start);
        assert_eq!(&source[token.span().to_range()], token.text());
        expected_start = token.span().end;
    }
    assert_eq!(expected_start as usize, source.len());
    assert_eq!(tokens.offset_of(2), 3);
    assert_eq!(tokens.offset_of(tokens.len()), source.len());
}

#[test]
fn empty_source_yields_no_tokens() {
    let arith = arith();
    let tokens = tokenize("", &arith.description).unwrap();

    assert!(tokens.is_empty());
    assert_eq!(tokens.source(), "");
}

#[test]
fn earlier_definition_wins_over_longer_match() {
    let mut description = TokensDescription::new();
    description.define_text("SHORT", "[a-z]").unwrap();
    description.define_text("LONG", "[a-z]+").unwrap();

    let tokens = tokenize("abc", &description).unwrap();

    assert_eq!(
        tags_and_text(&tokens),
        vec![("SHORT", "a"), ("SHORT", "b"), ("SHORT", "c")]
    );
}

#[test]
fn keyword_before_identifier() {
    let mut description = TokensDescription::new();
    description.define_text("LET", "let").unwrap();
    description.define_text("IDENT", "[a-z]+").unwrap();
    description.define_text("WS", " +").unwrap();

    let tokens = tokenize("let letter", &description).unwrap();

    // Priority, not longest match: `letter` starts with the keyword.
    assert_eq!(
        tags_and_text(&tokens),
        vec![("LET", "let"), ("WS", " "), ("LET", "let"), ("IDENT", "ter")]
    );
}

#[test]
fn unmatched_input_reports_offset_and_remainder() {
    let arith = arith();
    let err = tokenize("1 + abc", &arith.description).unwrap_err();

    assert_eq!(
        err,
        LexError::NoMatch {
            offset: 4,
            remaining: "abc".to_owned(),
        }
    );
    assert_eq!(err.offset(), 4);
    assert_eq!(
        err.to_string(),
        "no token definition matches at offset 4, near \"abc\""
    );
}

#[test]
fn error_preview_is_truncated() {
    let arith = arith();
    let err = tokenize("abcdefghijklmnopqrstuvwxyz", &arith.description).unwrap_err();

    assert_eq!(
        err.to_string(),
        "no token definition matches at offset 0, near \"abcdefghijklmnop\""
    );
}

#[test]
fn zero_width_match_is_rejected() {
    let mut description = TokensDescription::new();
    // Only matches empty text next to a word character, so registration
    // accepts it.
    description.define_text("BOUNDARY", r"\b").unwrap();
    description.define_text("WORD", "[a-z]+").unwrap();

    let err = tokenize("ab", &description).unwrap_err();
    assert_eq!(
        err,
        LexError::ZeroWidthMatch {
            tag: "BOUNDARY",
            offset: 0,
        }
    );
}

#[test]
fn multibyte_text_keeps_byte_spans() {
    let mut description = TokensDescription::new();
    description.define_text("WORD", r"\w+").unwrap();
    description.define_text("WS", r"\s+").unwrap();

    let tokens = tokenize("héllo wörld", &description).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text(), "héllo");
    assert_eq!(tokens[0].span().len(), 6);
    assert_eq!(tokens[2].span().start, 7);
}

mod properties {
    use proptest::prelude::*;

    use super::arith;
    use crate::tokenize;

    proptest! {
        #[test]
        fn tokenizing_is_deterministic(source in "[0-9a-fx+*/ -]{0,40}") {
            let arith = arith();
            let first = tokenize(&source, &arith.description);
            let second = tokenize(&source, &arith.description);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn tokens_reassemble_the_source(source in "[0-9+*/ \t-]{0,40}") {
            let arith = arith();
            let tokens = tokenize(&source, &arith.description).unwrap();
            let rebuilt: String = tokens.iter().map(|t| t.text()).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn same_span_resolves_to_first_registration(word in "[a-z]{1,12}") {
            let mut description = crate::TokensDescription::new();
            let first = description.define_text("FIRST", "[a-z]+").unwrap();
            description.define_text("SECOND", "[a-z]+").unwrap();

            let tokens = tokenize(&word, &description).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].id(), first.id());
        }
    }
}
