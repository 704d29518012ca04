use crate::engine::RuleError;
use crate::lexer::LexError;
use crate::parser::ParseError;
use thiserror::Error;

/// Failure of a whole script run. Only the first failure is reported.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("Lexing and parsing failed: {0}")]
    Lex(#[from] LexError),
    #[error("Lexing and parsing failed: {0}")]
    Parse(#[from] ParseError),
    /// `line` is the 1-based script line whose rule could not be applied.
    #[error("{source}")]
    Rule { line: usize, source: RuleError },
}
