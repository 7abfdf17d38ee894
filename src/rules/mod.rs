//! Rules and the turn engine.
//!
//! - [`Rule`]: closed set of pipeline steps, each with a [`RulePhase`]
//! - [`RuleChain`]: the declared order the engine runs them in
//! - [`TurnEngine`]: plays one roll for one player and reports a [`MoveOutcome`]
//!
//! The engine reads the chain but never interprets board cells directly;
//! snakes, ladders, and coins are only seen through their rules.

mod chain;
mod engine;
mod rule;

pub use chain::RuleChain;
pub use engine::{MoveOutcome, TurnEngine};
pub use rule::{Rule, RulePhase};
