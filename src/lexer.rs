use crate::rule::RuleName;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Dash,
    Number(usize),
    Keyword(RuleName),
    Ident(String),
    LParen,
    RParen,
    And,
    Or,
    Implies,
    Not,
    Newline,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LexError {
    #[error("unexpected character `{found}` at line {line}, column {column}")]
    UnexpectedChar {
        found: char,
        line: usize,
        column: usize,
    },
    #[error("number `{0}` is too large at line {1}")]
    NumberTooLarge(String, usize),
}

#[derive(Clone, Copy, Debug)]
enum Kind {
    Space,
    Newline,
    Dash,
    Number,
    Keyword(RuleName),
    LParen,
    RParen,
    And,
    Or,
    Implies,
    Not,
    Ident,
}

/// Token patterns in priority order. On equal match length the earlier pattern wins, so keywords
/// and `or` shadow identifiers.
static PATTERNS: Lazy<Vec<(Kind, Regex)>> = Lazy::new(|| {
    let mut patterns = vec![
        (Kind::Space, r"[^\S\n]+".to_string()),
        (Kind::Newline, r"\n".into()),
        (Kind::Dash, "-".into()),
        (Kind::Number, "[0-9]+".into()),
    ];
    patterns.extend(
        RuleName::ALL
            .iter()
            .map(|&name| (Kind::Keyword(name), regex::escape(name.keyword()))),
    );
    patterns.extend([
        (Kind::LParen, r"\(".to_string()),
        (Kind::RParen, r"\)".to_string()),
        (Kind::And, "&".to_string()),
        (Kind::Or, "or".to_string()),
        (Kind::Implies, "=>".to_string()),
        (Kind::Not, "~".to_string()),
        (Kind::Ident, "[a-z]+".to_string()),
    ]);
    patterns
        .into_iter()
        .map(|(kind, re)| (kind, Regex::new(&format!("^(?:{re})")).unwrap()))
        .collect()
});

/// Splits a script into tokens, dropping whitespace other than newlines.
pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
    let s: String = s.nfkc().collect();
    let mut tokens = vec![];
    let mut rest = s.as_str();
    let (mut line, mut column) = (1, 1);
    while !rest.is_empty() {
        let Some((kind, len)) = longest_match(rest) else {
            let found = rest.chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedChar {
                found,
                line,
                column,
            });
        };
        let (text, tail) = rest.split_at(len);
        rest = tail;
        let token = match kind {
            Kind::Space => {
                column += text.chars().count();
                continue;
            }
            Kind::Newline => {
                line += 1;
                column = 1;
                tokens.push(Token::Newline);
                continue;
            }
            Kind::Dash => Token::Dash,
            Kind::Number => Token::Number(
                text.parse()
                    .map_err(|_| LexError::NumberTooLarge(text.into(), line))?,
            ),
            Kind::Keyword(name) => Token::Keyword(name),
            Kind::LParen => Token::LParen,
            Kind::RParen => Token::RParen,
            Kind::And => Token::And,
            Kind::Or => Token::Or,
            Kind::Implies => Token::Implies,
            Kind::Not => Token::Not,
            Kind::Ident => Token::Ident(text.into()),
        };
        column += text.chars().count();
        tokens.push(token);
    }
    tracing::debug!(tokens = tokens.len(), lines = line, "tokenized script");
    Ok(tokens)
}

fn longest_match(s: &str) -> Option<(Kind, usize)> {
    let mut best: Option<(Kind, usize)> = None;
    for (kind, re) in PATTERNS.iter() {
        let Some(m) = re.find(s) else {
            continue;
        };
        if m.end() > best.map_or(0, |(_, len)| len) {
            best = Some((*kind, m.end()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_tokenize_line() {
        use Token::*;
        assert_eq!(
            tokenize("- implE (a => ~b)").unwrap(),
            vec![
                Dash,
                Keyword(RuleName::ImplE),
                LParen,
                Ident("a".into()),
                Implies,
                Not,
                Ident("b".into()),
                RParen
            ]
        );
        assert_eq!(
            tokenize("goal a\nassm 12\n").unwrap(),
            vec![
                Keyword(RuleName::Goal),
                Ident("a".into()),
                Newline,
                Keyword(RuleName::Assm),
                Number(12),
                Newline
            ]
        );
    }

    #[test]
    fn test_tokenize_keywords_with_shared_prefix() {
        use Token::*;
        assert_eq!(
            tokenize("andE1 andE2 orI1 orI2 orE andI").unwrap(),
            vec![
                Keyword(RuleName::AndE1),
                Keyword(RuleName::AndE2),
                Keyword(RuleName::OrI1),
                Keyword(RuleName::OrI2),
                Keyword(RuleName::OrE),
                Keyword(RuleName::AndI),
            ]
        );
        assert_eq!(
            tokenize("notI notE dNeg lem abort").unwrap(),
            vec![
                Keyword(RuleName::NotI),
                Keyword(RuleName::NotE),
                Keyword(RuleName::DNeg),
                Keyword(RuleName::Lem),
                Keyword(RuleName::Abort),
            ]
        );
    }

    #[test]
    fn test_tokenize_or_and_identifiers() {
        use Token::*;
        assert_eq!(
            tokenize("p or ora goals").unwrap(),
            vec![
                Ident("p".into()),
                Or,
                Ident("ora".into()),
                Ident("goals".into())
            ]
        );
        assert_eq!(tokenize("a&b").unwrap(), vec![Ident("a".into()), And, Ident("b".into())]);
    }

    #[test]
    fn test_tokenize_full_width() {
        assert_eq!(
            tokenize("assm １").unwrap(),
            vec![Token::Keyword(RuleName::Assm), Token::Number(1)]
        );
    }

    #[test]
    fn test_tokenize_error() {
        assert_snapshot!(tokenize("goal a\ngoal B").unwrap_err(), @"unexpected character `B` at line 2, column 6");
        assert_snapshot!(tokenize("p | q").unwrap_err(), @"unexpected character `|` at line 1, column 3");
        assert!(matches!(
            tokenize("assm 99999999999999999999999999"),
            Err(LexError::NumberTooLarge(_, 1))
        ));
    }
}
