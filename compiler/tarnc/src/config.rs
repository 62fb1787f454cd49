//! Command-line options for the `tarn` binary.

use crate::report::ColorMode;

/// Prompt printed before each line when none is given.
pub const DEFAULT_PROMPT: &str = "> ";

/// Options for one REPL run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Print the token sequence of each line before its value.
    pub show_tokens: bool,
    /// Use the hierarchical `tracing-tree` layer when `RUST_LOG` is set.
    pub trace_tree: bool,
    pub prompt: String,
    pub color: ColorMode,
    /// Evaluate this one expression instead of reading stdin.
    pub expression: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            show_tokens: false,
            trace_tree: false,
            prompt: DEFAULT_PROMPT.to_string(),
            color: ColorMode::Auto,
            expression: None,
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Repl(ReplConfig),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),

    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse arguments, program name excluded.
pub fn parse_args(args: &[String]) -> Result<Command, ConfigError> {
    let mut config = ReplConfig::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "help" || arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        } else if arg == "--tokens" {
            config.show_tokens = true;
        } else if arg == "--trace-tree" {
            config.trace_tree = true;
        } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
            config.prompt = prompt.to_string();
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            config.color = parse_color(mode)?;
        } else if arg == "-e" {
            let Some(expression) = args.get(i + 1) else {
                return Err(ConfigError::MissingValue("-e"));
            };
            config.expression = Some(expression.clone());
            i += 1;
        } else if arg.starts_with('-') {
            return Err(ConfigError::UnknownOption(arg.to_string()));
        } else {
            return Err(ConfigError::UnexpectedArgument(arg.to_string()));
        }
        i += 1;
    }
    Ok(Command::Repl(config))
}

fn parse_color(mode: &str) -> Result<ColorMode, ConfigError> {
    match mode {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(ConfigError::InvalidColor(mode.to_string())),
    }
}
