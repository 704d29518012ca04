pub mod engine;
mod error;
pub mod formula;
pub mod lexer;
pub mod parser;
pub mod rule;

pub use engine::{apply, run, ProofState, RuleError};
pub use error::Error;
pub use formula::Formula;
pub use parser::{parse_formula, parse_script};
pub use rule::{Param, Rule, RuleName};
