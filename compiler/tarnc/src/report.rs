//! Human-readable error output with optional ANSI color.

use std::io::{self, Write};

use crate::calc::CalcError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes a [`CalcError`] as a header line plus, when the error has an
/// offset, the input line with a caret under it:
///
/// ```text
/// error: syntax error at offset 2: unexpected `)`
///   | 1+)
///   |   ^
/// ```
pub struct Reporter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> Reporter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        Reporter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    pub fn report(&mut self, source: &str, error: &CalcError) -> io::Result<()> {
        self.write_colored("error", colors::ERROR)?;
        writeln!(self.writer, ": {error}")?;

        if let Some(offset) = error.offset() {
            let column = source.get(..offset).map_or(0, |before| before.chars().count());
            self.write_colored("  |", colors::GUTTER)?;
            writeln!(self.writer, " {source}")?;
            self.write_colored("  |", colors::GUTTER)?;
            write!(self.writer, " {}", " ".repeat(column))?;
            self.write_colored("^", colors::ERROR)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }
}
