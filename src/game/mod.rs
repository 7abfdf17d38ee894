//! External game loop.
//!
//! The turn engine plays one roll and never rotates. [`Game`] owns the
//! roster and the dice, feeds rolls to the engine, and decides who goes
//! next from each [`MoveOutcome`](crate::rules::MoveOutcome):
//!
//! | Outcome    | Default                  | Alternative                  |
//! |------------|--------------------------|------------------------------|
//! | `NoMove`   | same player rolls again  | `NoMovePolicy::EndTurn`      |
//! | `Started`  | same player rolls again  | `StartedPolicy::EndTurn`     |
//! | `Advanced` | next player (wraps)      |                              |
//! | `Won`      | game over                |                              |
//!
//! An overshoot rejected under exact landing forfeits the roll and passes
//! play on.

mod runner;

pub use runner::{Game, GameBuilder, GameSummary, TurnReport};
