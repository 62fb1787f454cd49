//! The calculator language: token definitions, grammar, and evaluation.
//!
//! ```text
//! number = hex | integer
//! atom   = number | "(" expr ")"
//! expr   = atom (op expr)?
//! ```
//!
//! The grammar is flat: operators group to the right by declaration order
//! alone, so `2 * 3 + 1` is `2 * (3 + 1)`. Parentheses override that.
//! `expr` is written with `atom` factored out of `atom op expr | atom`, so
//! each atom is parsed once and nesting stays linear.

use std::fmt;

use tarn_lexer::{tokenize, DefinitionError, LexError, TokenSequence, TokensDescription};
use tarn_parse::{
    alternative, ensure_sufficient_stack, token, Grammar, GrammarBuilder, GrammarError,
    ParserExt, Primitive, Rule, Session, SyntaxError,
};
use tracing::debug;

/// Arithmetic operator, decoded straight from an `OP` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(EvalError::Overflow { op: self })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed calculator expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate with checked `i64` arithmetic.
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Binary { op, lhs, rhs } => ensure_sufficient_stack(|| {
                let lhs = lhs.evaluate()?;
                let rhs = rhs.evaluate()?;
                op.apply(lhs, rhs)
            }),
        }
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized, so the grouping the parser chose is visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow in `{op}`")]
    Overflow { op: BinaryOp },
}

/// Anything that can go wrong with one line of input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Byte offset into the line, for errors that have one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CalcError::Lex(err) => Some(err.offset()),
            CalcError::Syntax(err) => Some(err.offset()),
            CalcError::Eval(_) => None,
        }
    }
}

/// The calculator's token definitions or grammar failed to build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid token definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),
}

/// Token definitions plus the grammar over them, built once and reused for
/// every line.
pub struct Calculator {
    description: TokensDescription,
    grammar: Grammar,
    expr: Rule<Expr>,
    ws: Primitive<()>,
}

impl Calculator {
    pub fn new() -> Result<Self, BuildError> {
        let mut description = TokensDescription::new();
        let ws = description.define("WS", r"\s+", |_| Some(()))?;
        let hex = description.define("HEX", "0[xX][0-9a-fA-F]+", |text| {
            text.get(2..)
                .and_then(|digits| i64::from_str_radix(digits, 16).ok())
        })?;
        let int = description.define("INT", "[0-9]+", |text| text.parse::<i64>().ok())?;
        let op = description.define("OP", "[-+*/]", BinaryOp::from_symbol)?;
        let lparen = description.define("LPAREN", r"\(", |_| Some(()))?;
        let rparen = description.define("RPAREN", r"\)", |_| Some(()))?;

        let mut builder = GrammarBuilder::new();
        let expr = builder.declare::<Expr>("expr");
        let number = builder.define(
            "number",
            alternative(token(&hex), token(&int)).map(Expr::Number),
        )?;
        let parens = token(&lparen)
            .ignore_then(expr)
            .then_ignore(token(&rparen));
        let atom = builder.define("atom", alternative(number, parens))?;
        builder.bind(
            &expr,
            atom.then(token(&op).then(expr).optional())
                .map(|(lhs, tail)| match tail {
                    Some((op, rhs)) => Expr::Binary {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                    None => lhs,
                }),
        )?;
        let grammar = builder.build()?;

        debug!(
            definitions = description.len(),
            rules = grammar.len(),
            "calculator ready"
        );

        Ok(Calculator {
            description,
            grammar,
            expr,
            ws: token(&ws),
        })
    }

    /// Split `source` into calculator tokens, whitespace included.
    pub fn tokenize<'src>(&self, source: &'src str) -> Result<TokenSequence<'src>, LexError> {
        tokenize(source, &self.description)
    }

    /// Parse a whole line into an expression tree.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn parse(&self, source: &str) -> Result<Expr, CalcError> {
        let tokens = self.tokenize(source)?;
        let session = Session::new(&self.grammar, &tokens);
        Ok(session.parse_all(&self.expr, Some(&self.ws))?)
    }

    /// Parse and evaluate a whole line.
    pub fn evaluate(&self, source: &str) -> Result<i64, CalcError> {
        let expr = self.parse(source)?;
        Ok(expr.evaluate()?)
    }
}
