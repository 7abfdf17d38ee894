//! Ordered rule chain.
//!
//! The chain is the declared order of the turn pipeline. The engine pulls
//! the start gate and win check out by phase, then runs the board-effect
//! rules exactly in the order they were pushed. Reordering board effects
//! changes game semantics: with a snake whose tail is a ladder foot,
//! `[LandOnSnake, LandOnLadder]` bites then climbs, while
//! `[LandOnLadder, LandOnSnake]` only bites.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rule::{Rule, RulePhase};
use crate::core::ConfigurationError;

/// An ordered list of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChain {
    rules: SmallVec<[Rule; 5]>,
}

impl RuleChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start gate, win check, snakes, ladders.
    pub fn classic() -> Self {
        Self::new()
            .with(Rule::NoSixToStart)
            .with(Rule::WonGame)
            .with(Rule::LandOnSnake)
            .with(Rule::LandOnLadder)
    }

    /// Classic chain plus coin collection.
    pub fn with_coins() -> Self {
        Self::classic().with(Rule::LandOnCoin)
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn contains(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    /// All rules in declared order.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied()
    }

    /// First rule of a phase, if any.
    #[must_use]
    pub fn find(&self, phase: RulePhase) -> Option<Rule> {
        self.iter().find(|r| r.phase() == phase)
    }

    /// Board-effect rules in declared order.
    pub fn board_effects(&self) -> impl Iterator<Item = Rule> + '_ {
        self.iter().filter(|r| r.phase() == RulePhase::BoardEffect)
    }

    /// Check the chain can drive an engine.
    ///
    /// Fails if the start gate or win check is missing, or if any rule
    /// appears twice.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].contains(rule) {
                return Err(ConfigurationError::DuplicateRule(*rule));
            }
        }
        if self.find(RulePhase::StartGate).is_none() {
            return Err(ConfigurationError::MissingRule(Rule::NoSixToStart));
        }
        if self.find(RulePhase::WinCheck).is_none() {
            return Err(ConfigurationError::MissingRule(Rule::WonGame));
        }
        Ok(())
    }
}

impl FromIterator<Rule> for RuleChain {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
