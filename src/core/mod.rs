//! Core types: players, dice, configuration, errors, and the shared game state.
//!
//! Everything here is independent of the rule chain; rules and the turn
//! engine are built on top in [`crate::rules`].

pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod player;
pub mod state;

pub use config::{
    EngineConfig, GameConfig, NoMovePolicy, OverflowPolicy, StartedPolicy, DEFAULT_DICE_SIDES,
    DEFAULT_START_FACE,
};
pub use dice::{Dice, DiceSource, ScriptedDice};
pub use error::{ConfigurationError, EngineError};
pub use event::{CellEffect, TurnEvent};
pub use player::{Player, PlayerId, TurnState};
pub use state::GameState;
