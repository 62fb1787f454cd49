//! Read-evaluate-print loop over any reader and writer.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::calc::Calculator;
use crate::config::ReplConfig;
use crate::report::Reporter;

/// Lines that end the session.
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

pub struct Repl<'a> {
    calculator: &'a Calculator,
    config: &'a ReplConfig,
    is_tty: bool,
}

impl<'a> Repl<'a> {
    /// `is_tty` resolves [`ColorMode::Auto`](crate::report::ColorMode::Auto).
    pub fn new(calculator: &'a Calculator, config: &'a ReplConfig, is_tty: bool) -> Self {
        Repl {
            calculator,
            config,
            is_tty,
        }
    }

    /// Prompt, read, and evaluate lines until end of input or an exit
    /// command. Returns how many lines failed.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<usize> {
        let mut failures = 0;
        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            let source = line.trim_end_matches(['\n', '\r']);
            let command = source.trim();
            if command.is_empty() {
                continue;
            }
            if EXIT_COMMANDS.contains(&command) {
                break;
            }
            if !self.eval_line(source, &mut output)? {
                failures += 1;
            }
        }
        debug!(failures, "session finished");
        Ok(failures)
    }

    /// Evaluate one line, writing either its value or a report. Returns
    /// whether evaluation succeeded.
    pub fn eval_line<W: Write>(&self, source: &str, output: &mut W) -> io::Result<bool> {
        if self.config.show_tokens {
            if let Ok(tokens) = self.calculator.tokenize(source) {
                let listed: Vec<String> = tokens.iter().map(|t| format!("{t:?}")).collect();
                writeln!(output, "tokens: {}", listed.join(", "))?;
            }
        }

        match self.calculator.evaluate(source) {
            Ok(value) => {
                writeln!(output, "{value}")?;
                Ok(true)
            }
            Err(error) => {
                Reporter::with_color_mode(&mut *output, self.config.color, self.is_tty)
                    .report(source, &error)?;
                Ok(false)
            }
        }
    }
}
