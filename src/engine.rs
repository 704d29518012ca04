use crate::formula::Formula;
use crate::parser::parse_script;
use crate::rule::{Rule, RuleName};
use crate::Error;
use itertools::Itertools;
use std::collections::{vec_deque, VecDeque};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, thiserror::Error, PartialEq)]
pub enum RuleError {
    #[error("No goals left.")]
    NoGoalsLeft,
    #[error("Current goal not proven yet.")]
    GoalNotProven,
    #[error("Not a valid goal.")]
    InvalidGoal,
    #[error("No current goal. Either set or pop one.")]
    NoCurrentGoal,
    #[error("Assumption rule requires a positive number.")]
    AssumptionIndexRequired,
    #[error("Assumption out of bounds.")]
    AssumptionOutOfBounds,
    #[error("Assumption does not match goal.")]
    AssumptionMismatch,
    #[error("Not an & formula.")]
    NotAnd,
    #[error("No valid & formula given.")]
    AndMotiveRequired,
    #[error("And-elimination-1 does not apply.")]
    AndE1Mismatch,
    #[error("And-elimination-2 does not apply.")]
    AndE2Mismatch,
    #[error("Not an or formula.")]
    NotOr,
    #[error("Or-elimination needs a disjunctive motive.")]
    OrMotiveRequired,
    #[error("Impl-introduction does not apply.")]
    NotImplies,
    #[error("Impl-elimination needs an implicative motive.")]
    ImpliesMotiveRequired,
    #[error("Not-introduction does not apply.")]
    NotNot,
    #[error("Not-elimination needs a formula motive.")]
    NotMotiveRequired,
    #[error("Excluded middle does not apply.")]
    NotExcludedMiddle,
}

/// A pending subgoal together with the assumptions it introduces when popped.
pub type Sequent = (Vec<Formula>, Formula);

/// First-in-first-out queue of pending subgoals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GoalQueue {
    goals: VecDeque<Sequent>,
}

impl GoalQueue {
    pub fn enqueue(&mut self, assumptions: Vec<Formula>, goal: Formula) {
        self.goals.push_back((assumptions, goal));
    }

    pub fn dequeue(&mut self) -> Option<Sequent> {
        self.goals.pop_front()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Sequent> {
        self.goals.iter()
    }
}

/// State of a proof in progress.
///
/// `current_goal` is `None` once the goal has been solved (or before any goal is set).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProofState {
    pub assumptions: Vec<Formula>,
    pub current_goal: Option<Formula>,
    pub other_goals: GoalQueue,
}

impl ProofState {
    fn new(goal: Formula) -> Self {
        Self {
            current_goal: Some(goal),
            ..Default::default()
        }
    }

    /// Returns `true` when nothing is left to prove.
    pub fn is_complete(&self) -> bool {
        self.current_goal.is_none() && self.other_goals.is_empty()
    }

    fn take_goal(&mut self) -> Result<Formula, RuleError> {
        self.current_goal.take().ok_or(RuleError::NoCurrentGoal)
    }

    fn pop_goal(&mut self) -> Result<(), RuleError> {
        if self.other_goals.is_empty() {
            return Err(RuleError::NoGoalsLeft);
        }
        if self.current_goal.is_some() {
            return Err(RuleError::GoalNotProven);
        }
        let Some((assumptions, goal)) = self.other_goals.dequeue() else {
            return Err(RuleError::NoGoalsLeft);
        };
        self.assumptions.extend(assumptions);
        self.current_goal = Some(goal);
        Ok(())
    }
}

/// Applies one script line to a proof state.
///
/// On error the input state is consumed; callers keep their own copy of the last good state.
pub fn apply(mut state: ProofState, rule: &Rule) -> Result<ProofState, RuleError> {
    use Formula::*;
    use RuleError::*;

    if rule.pop {
        state.pop_goal()?;
    }
    let Some(name) = rule.name else {
        return Ok(state);
    };

    state.current_goal = match name {
        RuleName::Goal => {
            let goal = rule.motive().ok_or(InvalidGoal)?;
            return Ok(ProofState::new(goal.clone()));
        }
        RuleName::Assm => {
            let goal = state.take_goal()?;
            let n = rule.index().ok_or(AssumptionIndexRequired)?;
            let assumption = n
                .checked_sub(1)
                .and_then(|i| state.assumptions.get(i))
                .ok_or(AssumptionOutOfBounds)?;
            if *assumption != goal {
                return Err(AssumptionMismatch);
            }
            None
        }
        RuleName::AndI => {
            let And(p, q) = state.take_goal()? else {
                return Err(NotAnd);
            };
            state.other_goals.enqueue(vec![], *p);
            state.other_goals.enqueue(vec![], *q);
            None
        }
        RuleName::AndE1 | RuleName::AndE2 => {
            let goal = state.take_goal()?;
            let Some(motive @ And(p, q)) = rule.motive() else {
                return Err(AndMotiveRequired);
            };
            // andE1 keeps the right conjunct as the goal, andE2 the left one
            let (conjunct, mismatch) = if name == RuleName::AndE1 {
                (q, AndE1Mismatch)
            } else {
                (p, AndE2Mismatch)
            };
            if **conjunct != goal {
                return Err(mismatch);
            }
            Some(motive.clone())
        }
        RuleName::OrI1 | RuleName::OrI2 => {
            let Or(p, q) = state.take_goal()? else {
                return Err(NotOr);
            };
            Some(if name == RuleName::OrI1 { *p } else { *q })
        }
        RuleName::OrE => {
            let goal = state.take_goal()?;
            let Some(motive @ Or(p, q)) = rule.motive() else {
                return Err(OrMotiveRequired);
            };
            state.other_goals.enqueue(vec![], motive.clone());
            state.other_goals.enqueue(vec![(**p).clone()], goal.clone());
            state.other_goals.enqueue(vec![(**q).clone()], goal);
            None
        }
        RuleName::ImplI => {
            let Implies(p, q) = state.take_goal()? else {
                return Err(NotImplies);
            };
            state.assumptions.push(*p);
            Some(*q)
        }
        RuleName::ImplE => {
            state.take_goal()?;
            let Some(motive @ Implies(p, _)) = rule.motive() else {
                return Err(ImpliesMotiveRequired);
            };
            state.other_goals.enqueue(vec![], motive.clone());
            state.other_goals.enqueue(vec![], (**p).clone());
            None
        }
        RuleName::NotI => {
            let Not(p) = state.take_goal()? else {
                return Err(NotNot);
            };
            state.assumptions.push(*p);
            Some(False)
        }
        RuleName::NotE => {
            state.take_goal()?;
            let motive = rule.motive().ok_or(NotMotiveRequired)?;
            state
                .other_goals
                .enqueue(vec![], Formula::not(motive.clone()));
            state.other_goals.enqueue(vec![], motive.clone());
            None
        }
        RuleName::DNeg => Some(Formula::not(Formula::not(state.take_goal()?))),
        RuleName::Lem => match state.take_goal()? {
            Or(p, q) if matches!(&*p, Not(r) if *r == q) => None,
            _ => return Err(NotExcludedMiddle),
        },
        RuleName::Abort => {
            state.take_goal()?;
            Some(False)
        }
    };
    Ok(state)
}

/// Parses a script and folds [`apply`] over it, starting from the empty state.
///
/// Stops at the first error; no later line is applied.
pub fn run(s: &str) -> Result<ProofState, Error> {
    let rules = parse_script(s)?;
    rules
        .iter()
        .enumerate()
        .try_fold(ProofState::default(), |state, (i, rule)| {
            let state = apply(state, rule).map_err(|source| Error::Rule { line: i + 1, source })?;
            tracing::debug!(line = i + 1, rule = ?rule.name, pop = rule.pop, "applied rule");
            tracing::trace!("{state}");
            Ok(state)
        })
}

impl fmt::Display for ProofState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assumptions:")?;
        for (i, fml) in self.assumptions.iter().enumerate() {
            writeln!(f, "  {}. {fml}", i + 1)?;
        }
        writeln!(f, "Other goals:")?;
        for (assumptions, goal) in self.other_goals.iter() {
            if assumptions.is_empty() {
                writeln!(f, "  ⊢ {goal}")?;
            } else {
                writeln!(f, "  {} ⊢ {goal}", assumptions.iter().join(", "))?;
            }
        }
        match &self.current_goal {
            Some(goal) => write!(f, "Current goal: {goal}"),
            None => write!(f, "Current goal: Done."),
        }
    }
}
