// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end REPL sessions over in-memory input and output.

use pretty_assertions::assert_eq;
use tarnc::{Calculator, ColorMode, Repl, ReplConfig};

fn plain() -> ReplConfig {
    ReplConfig {
        prompt: String::new(),
        color: ColorMode::Never,
        ..ReplConfig::default()
    }
}

fn session(config: &ReplConfig, input: &str) -> (String, usize) {
    let calculator = Calculator::new().unwrap();
    let repl = Repl::new(&calculator, config, false);
    let mut output = Vec::new();
    let failures = repl.run(input.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), failures)
}

#[test]
fn prints_one_value_per_line() {
    let (output, failures) = session(&plain(), "1 + 2\n0x10\n2 * 3 + 1\n(2 * 3) + 1\n");
    assert_eq!(output, "3\n16\n8\n7\n\n");
    assert_eq!(failures, 0);
}

#[test]
fn blank_lines_are_skipped() {
    let (output, _) = session(&plain(), "\n   \n4\n");
    assert_eq!(output, "4\n\n");
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let (output, failures) = session(&plain(), "1+)\n8 / 0\n1 $ 2\n5\n");
    assert_eq!(
        output,
        concat!(
            "error: syntax error at offset 2: unexpected `)`\n",
            "  | 1+)\n",
            "  |   ^\n",
            "error: division by zero\n",
            "error: no token definition matches at offset 2, near \"$ 2\"\n",
            "  | 1 $ 2\n",
            "  |   ^\n",
            "5\n",
            "\n",
        )
    );
    assert_eq!(failures, 3);
}

#[test]
fn exit_ends_the_session() {
    let (output, _) = session(&plain(), "1\nexit\n2\n");
    assert_eq!(output, "1\n");
}

#[test]
fn prompt_precedes_each_read() {
    let config = ReplConfig {
        prompt: "> ".to_string(),
        ..plain()
    };
    let (output, _) = session(&config, "7\n");
    assert_eq!(output, "> 7\n> \n");
}

#[test]
fn windows_line_endings() {
    let (output, _) = session(&plain(), "1 + 1\r\n");
    assert_eq!(output, "2\n\n");
}

#[test]
fn tokens_are_listed_when_asked() {
    let config = ReplConfig {
        show_tokens: true,
        ..plain()
    };
    let calculator = Calculator::new().unwrap();
    let repl = Repl::new(&calculator, &config, false);

    let mut output = Vec::new();
    assert!(repl.eval_line("12+0x1", &mut output).unwrap());
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "tokens: INT(\"12\") @ 0..2, OP(\"+\") @ 2..3, HEX(\"0x1\") @ 3..6\n13\n"
    );
}

#[test]
fn single_expression_reports_failure() {
    let config = plain();
    let calculator = Calculator::new().unwrap();
    let repl = Repl::new(&calculator, &config, false);

    let mut output = Vec::new();
    assert!(!repl.eval_line("(1", &mut output).unwrap());
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "error: syntax error at offset 2: unexpected end of input\n  | (1\n  |   ^\n"
    );
}
