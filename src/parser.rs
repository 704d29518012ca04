use crate::formula::Formula;
use crate::lexer::{tokenize, Token};
use crate::rule::{Param, Rule, RuleName};
use crate::Error;

#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[error("line {line}: expected {expected}")]
pub struct ParseError {
    pub line: usize,
    pub expected: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Connective {
    And,
    Or,
    Implies,
}

impl Connective {
    fn build(self, p: Formula, q: Formula) -> Formula {
        match self {
            Self::And => Formula::and(p, q),
            Self::Or => Formula::or(p, q),
            Self::Implies => Formula::implies(p, q),
        }
    }

    /// Builds `x1 op x2 op ... op xn` as `op(x1, ((x2 op x3) op ...) op xn)`.
    fn chain(self, first: Formula, rest: Vec<Formula>) -> Formula {
        let mut rest = rest.into_iter();
        let Some(second) = rest.next() else {
            return first;
        };
        let tail = rest.fold(second, |acc, p| self.build(acc, p));
        self.build(first, tail)
    }
}

fn atom(name: &str) -> Formula {
    match name {
        "true" => Formula::True,
        "false" => Formula::False,
        _ => Formula::var(name),
    }
}

peg::parser! { grammar script_parser<'a>() for [&'a Token] {
    rule lparen() = quiet!{[Token::LParen]} / expected!("`(`")
    rule rparen() = quiet!{[Token::RParen]} / expected!("`)`")
    rule newline() = quiet!{[Token::Newline]} / expected!("newline")
    rule and_op() = quiet!{[Token::And]} / expected!("`&`")
    rule or_op() = quiet!{[Token::Or]} / expected!("`or`")
    rule implies_op() = quiet!{[Token::Implies]} / expected!("`=>`")
    rule not_op() = quiet!{[Token::Not]} / expected!("`~`")

    rule ident() -> Formula
        = quiet!{[Token::Ident(name)] { atom(name) }} / expected!("identifier")

    rule atomic() -> Formula
        = ident()
        / lparen() p:formula() rparen() { p }

    rule negation() -> Formula
        = not_op() p:(negation() / atomic()) { Formula::not(p) }

    rule operand() -> Formula
        = negation()
        / atomic()

    rule chain() -> (Connective, Vec<Formula>)
        = and_op() l:(operand() ++ and_op()) { (Connective::And, l) }
        / or_op() l:(operand() ++ or_op()) { (Connective::Or, l) }
        / implies_op() l:(operand() ++ implies_op()) { (Connective::Implies, l) }

    pub rule formula() -> Formula
        = p:operand() c:chain()? {
            match c {
                Some((op, rest)) => op.chain(p, rest),
                None => p,
            }
        }

    rule rule_name() -> RuleName
        = [Token::Keyword(name)] { *name }

    rule param() -> Param
        = p:formula() { Param::Formula(p) }
        / [Token::Number(n)] { Param::Index(*n) }

    rule line() -> Rule
        = pop:[Token::Dash]? name:rule_name()? param:param()? {
            Rule { pop: pop.is_some(), name, param }
        }

    pub rule script() -> Vec<Rule>
        = l:(line() ** newline()) { l }
}}

fn to_parse_error(tokens: &[&Token], e: peg::error::ParseError<usize>) -> ParseError {
    let line = 1 + tokens[..e.location.min(tokens.len())]
        .iter()
        .filter(|token| ***token == Token::Newline)
        .count();
    ParseError {
        line,
        expected: e.expected.to_string(),
    }
}

/// Parses a single formula.
pub fn parse_formula(s: &str) -> Result<Formula, Error> {
    let tokens = tokenize(s)?;
    let tokens = tokens.iter().collect::<Vec<_>>();
    Ok(script_parser::formula(&tokens).map_err(|e| to_parse_error(&tokens, e))?)
}

/// Parses a whole script into one [`Rule`] per line.
pub fn parse_script(s: &str) -> Result<Vec<Rule>, Error> {
    let tokens = tokenize(s)?;
    let tokens = tokens.iter().collect::<Vec<_>>();
    let rules = script_parser::script(&tokens).map_err(|e| to_parse_error(&tokens, e))?;
    tracing::debug!(rules = rules.len(), "parsed script");
    Ok(rules)
}
