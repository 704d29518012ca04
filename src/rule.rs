use crate::formula::Formula;
use std::fmt;

/// Name of an inference rule as written in a script.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RuleName {
    Goal,
    Assm,
    AndI,
    AndE1,
    AndE2,
    OrI1,
    OrI2,
    OrE,
    ImplI,
    ImplE,
    NotI,
    NotE,
    DNeg,
    Lem,
    Abort,
}

/// Argument of a rule: an assumption index (1-based) or a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Param {
    Index(usize),
    Formula(Formula),
}

/// One parsed script line.
///
/// A line may pop the next pending goal (`pop`), apply a rule, or both; a line with neither is a
/// no-op.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rule {
    pub pop: bool,
    pub name: Option<RuleName>,
    pub param: Option<Param>,
}

impl RuleName {
    pub const ALL: [Self; 15] = [
        Self::Goal,
        Self::Assm,
        Self::AndI,
        Self::AndE1,
        Self::AndE2,
        Self::OrI1,
        Self::OrI2,
        Self::OrE,
        Self::ImplI,
        Self::ImplE,
        Self::NotI,
        Self::NotE,
        Self::DNeg,
        Self::Lem,
        Self::Abort,
    ];

    pub fn keyword(self) -> &'static str {
        use RuleName::*;
        match self {
            Goal => "goal",
            Assm => "assm",
            AndI => "andI",
            AndE1 => "andE1",
            AndE2 => "andE2",
            OrI1 => "orI1",
            OrI2 => "orI2",
            OrE => "orE",
            ImplI => "implI",
            ImplE => "implE",
            NotI => "notI",
            NotE => "notE",
            DNeg => "dNeg",
            Lem => "lem",
            Abort => "abort",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Rule {
    /// The formula parameter, if the line carries one.
    pub fn motive(&self) -> Option<&Formula> {
        match &self.param {
            Some(Param::Formula(fml)) => Some(fml),
            _ => None,
        }
    }

    /// The numeric parameter, if the line carries one.
    pub fn index(&self) -> Option<usize> {
        match self.param {
            Some(Param::Index(n)) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_keywords_are_distinct() {
        assert!(RuleName::ALL.iter().map(|name| name.keyword()).all_unique());
    }

    #[test]
    fn test_param_accessors() {
        let rule = Rule {
            name: Some(RuleName::Assm),
            param: Some(Param::Index(2)),
            ..Default::default()
        };
        assert_eq!(rule.index(), Some(2));
        assert_eq!(rule.motive(), None);

        let rule = Rule {
            name: Some(RuleName::OrE),
            param: Some(Param::Formula(Formula::var("p"))),
            ..Default::default()
        };
        assert_eq!(rule.index(), None);
        assert_eq!(rule.motive(), Some(&Formula::var("p")));
    }
}
