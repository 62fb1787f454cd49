//! Tarn calculator
//!
//! An integer calculator REPL built on `tarn_lexer` and `tarn_parse`: the
//! token definitions and grammar live in [`calc`], the loop in [`repl`].

pub mod calc;
pub mod config;
pub mod repl;
pub mod report;
mod tracing_setup;

pub use calc::{BinaryOp, BuildError, CalcError, Calculator, EvalError, Expr};
pub use config::{parse_args, Command, ConfigError, ReplConfig};
pub use repl::Repl;
pub use report::{ColorMode, Reporter};
pub use tracing_setup::init_tracing;
