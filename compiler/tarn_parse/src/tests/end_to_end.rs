//! Tokenize-then-parse scenarios.

use pretty_assertions::assert_eq;

use super::Lang;
use crate::{
    alternative, discard, either, one_of, sequence, token, Cursor, Either, GrammarBuilder,
    ParserExt, Session,
};

#[test]
fn addition_of_two_integers() {
    // number   = integer | hex
    // addition = number ~"+" expr
    // expr     = addition | number
    let lang = Lang::new();
    let tokens = lang.lex("12+34");
    assert_eq!(
        tokens.iter().map(|t| (t.tag(), t.text())).collect::<Vec<_>>(),
        vec![("INT", "12"), ("OP", "+"), ("INT", "34")]
    );

    let mut builder = GrammarBuilder::new();
    let expr = builder.declare::<i64>("expr");
    let number = builder
        .define("number", alternative(token(&lang.int), token(&lang.hex)))
        .unwrap();
    let addition = builder
        .define(
            "addition",
            sequence(sequence(number, discard(one_of(&lang.op, ["+"]))), expr)
                .map(|((lhs, ()), rhs)| lhs + rhs),
        )
        .unwrap();
    builder.bind(&expr, alternative(addition, number)).unwrap();
    let grammar = builder.build().unwrap();

    let session = Session::new(&grammar, &tokens);
    let m = session.run(&expr, session.start(), session.end(), None);

    assert_eq!(m.value, Some(46));
    assert_eq!(m.cursor, session.end());
}

#[test]
fn hex_number() {
    let lang = Lang::new();
    let tokens = lang.lex("0x10");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag(), "HEX");
    assert_eq!(lang.hex.decode(&tokens[0]), Some(16));

    let mut builder = GrammarBuilder::new();
    let number = builder
        .define("number", alternative(token(&lang.int), token(&lang.hex)))
        .unwrap();
    let grammar = builder.build().unwrap();

    let session = Session::new(&grammar, &tokens);
    assert_eq!(session.parse_all(&number, None), Ok(16));
}

#[test]
fn non_numeric_input_does_not_match() {
    let lang = Lang::new();
    let tokens = lang.lex("abc");

    let mut builder = GrammarBuilder::new();
    let number = builder
        .define("number", alternative(token(&lang.int), token(&lang.hex)))
        .unwrap();
    let grammar = builder.build().unwrap();

    let session = Session::new(&grammar, &tokens);
    let m = session.run(&number, session.start(), session.end(), None);

    assert_eq!(m.value, None);
    assert_eq!(m.cursor, Cursor::START);
    assert_eq!(tokens.offset_of(m.cursor.position()), 0);
}

#[test]
fn flat_rule_groups_by_declaration_order() {
    // binary = atom op expr ; expr = binary | atom
    //
    // No precedence: `2 * 3 + 1` is read as `2 * (3 + 1)`.
    let lang = Lang::new();
    let mut builder = GrammarBuilder::new();
    let expr = builder.declare::<i64>("expr");
    let atom = builder.define("atom", token(&lang.int)).unwrap();
    let binary = builder
        .define(
            "binary",
            sequence(sequence(atom, token(&lang.op)), expr).map(|((lhs, op), rhs)| {
                match op.as_str() {
                    "+" => lhs + rhs,
                    "-" => lhs - rhs,
                    "*" => lhs * rhs,
                    _ => lhs / rhs,
                }
            }),
        )
        .unwrap();
    builder.bind(&expr, alternative(binary, atom)).unwrap();
    let grammar = builder.build().unwrap();

    let ws = token(&lang.ws);
    for (source, expected) in [("2 * 3 + 1", 8), ("1 + 2 * 3", 7), ("10 - 4 - 3", 9)] {
        let tokens = lang.lex(source);
        let session = Session::new(&grammar, &tokens);
        assert_eq!(session.parse_all(&expr, Some(&ws)), Ok(expected), "{source}");
    }
}

#[test]
fn heterogeneous_alternatives_use_either() {
    // value = number | ident
    let lang = Lang::new();
    let mut builder = GrammarBuilder::new();
    let value = builder
        .define(
            "value",
            either(
                alternative(token(&lang.hex), token(&lang.int)),
                token(&lang.ident),
            ),
        )
        .unwrap();
    let values = builder.define("values", value.many()).unwrap();
    let grammar = builder.build().unwrap();

    let ws = token(&lang.ws);
    let tokens = lang.lex("0xff x 3 y_1");
    let session = Session::new(&grammar, &tokens);

    assert_eq!(
        session.parse_all(&values, Some(&ws)),
        Ok(vec![
            Either::Left(255),
            Either::Right("x".to_owned()),
            Either::Left(3),
            Either::Right("y_1".to_owned()),
        ])
    );
}
