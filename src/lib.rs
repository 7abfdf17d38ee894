//! # snakes-ladders
//!
//! A Snakes & Ladders turn engine driven by an ordered, composable rule chain.
//!
//! ## Design Principles
//!
//! 1. **Rules Over Cells**: Board cells are plain data. Everything that
//!    happens on a turn is a [`Rule`] in a [`RuleChain`], evaluated against
//!    the shared [`GameState`].
//!
//! 2. **Order Is Semantics**: Board-effect rules run once each, in the order
//!    they were declared. Reordering the chain changes how stacked effects
//!    resolve.
//!
//! 3. **Engine Plays, Loop Rotates**: [`TurnEngine::execute_move`] plays one
//!    roll and reports a [`MoveOutcome`]. Who rolls next is decided by the
//!    [`Game`] loop.
//!
//! ## Architecture
//!
//! - **Validated Construction**: Boards, chains, and engines are checked once
//!   when built. Play never sees a malformed board.
//!
//! - **Persistent History**: Cell effects are kept in an `im` vector, so
//!   cloning an engine is a cheap snapshot a turn can be replayed from.
//!
//! - **Deterministic Dice**: Randomness lives outside the engine behind
//!   [`DiceSource`]; seeded ChaCha8 or a fixed script.
//!
//! ## Modules
//!
//! - `core`: Players, dice, configuration, errors, game state, cell effects
//! - `board`: Cells, validated boards, presets
//! - `rules`: Rule set, rule chain, turn engine
//! - `game`: Roster, rotation, and the run loop
//!
//! ```
//! use snakes_ladders::{Board, EngineConfig, MoveOutcome, Player, PlayerId, RuleChain, TurnEngine};
//!
//! let board = Board::new(100, &[(30, 14)], &[(15, 21)], &[]).unwrap();
//! let mut engine = TurnEngine::new(board, RuleChain::classic(), EngineConfig::default()).unwrap();
//! let mut ada = Player::new(PlayerId::new(0), "Ada");
//!
//! assert_eq!(engine.execute_move(4, &mut ada).unwrap(), MoveOutcome::NoMove);
//! assert_eq!(engine.execute_move(6, &mut ada).unwrap(), MoveOutcome::Started);
//! assert_eq!(engine.execute_move(5, &mut ada).unwrap(), MoveOutcome::Advanced);
//! assert_eq!(engine.position_of(ada.id()), 5);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CellEffect, ConfigurationError, Dice, DiceSource, EngineConfig, EngineError, GameConfig,
    GameState, NoMovePolicy, OverflowPolicy, Player, PlayerId, ScriptedDice, StartedPolicy,
    TurnEvent, TurnState,
};

pub use crate::board::{Board, BoardBuilder, Cell};

pub use crate::rules::{MoveOutcome, Rule, RulePhase, RuleChain, TurnEngine};

pub use crate::game::{Game, GameBuilder, GameSummary, TurnReport};
