use std::fmt;

/// Propositional formula.
///
/// Equality is structural: two formulae are equal iff they have the same shape and the same
/// variable names at the leaves.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Formula {
    Var(String),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Not(Box<Formula>),
    False,
    True,
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn and(p: Self, q: Self) -> Self {
        Self::And(Box::new(p), Box::new(q))
    }

    pub fn or(p: Self, q: Self) -> Self {
        Self::Or(Box::new(p), Box::new(q))
    }

    pub fn implies(p: Self, q: Self) -> Self {
        Self::Implies(Box::new(p), Box::new(q))
    }

    pub fn not(p: Self) -> Self {
        Self::Not(Box::new(p))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Formula::*;
        match self {
            Var(name) => write!(f, "{name}"),
            And(p, q) => write!(f, "({p} ∧ {q})"),
            Or(p, q) => write!(f, "({p} ∨ {q})"),
            Implies(p, q) => write!(f, "({p} ⇨ {q})"),
            Not(p) => write!(f, "¬{p}"),
            False => write!(f, "⊥"),
            True => write!(f, "⊤"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_display() {
        let a = Formula::var("a");
        let b = Formula::var("b");
        assert_eq!(a.to_string(), "a");
        assert_eq!(Formula::False.to_string(), "⊥");
        assert_eq!(Formula::True.to_string(), "⊤");
        assert_snapshot!(Formula::not(Formula::not(a.clone())), @"¬¬a");
        assert_snapshot!(
            Formula::implies(Formula::and(a.clone(), b.clone()), Formula::or(b, Formula::not(a))),
            @"((a ∧ b) ⇨ (b ∨ ¬a))"
        );
    }

    #[test]
    fn test_structural_eq() {
        let p = Formula::and(Formula::var("a"), Formula::not(Formula::var("b")));
        let q = Formula::and(Formula::var("a"), Formula::not(Formula::var("b")));
        assert_eq!(p, q);
        assert_ne!(p, Formula::and(Formula::not(Formula::var("b")), Formula::var("a")));
        assert_ne!(Formula::var("a"), Formula::var("b"));
        assert_ne!(Formula::False, Formula::True);
    }
}
