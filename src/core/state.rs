//! Shared game state.
//!
//! ## GameState
//!
//! The one mutable record every rule sees:
//! - Board (shared, read-only)
//! - Engine configuration
//! - Current player and last roll (bound once per turn)
//! - Position per player (source of truth for positions)
//! - Turn counter and effect history
//!
//! Rules communicate redirections back to the engine only by writing
//! positions here; they never touch a `Player`.
//!
//! Cloning is cheap: the board is behind an `Arc` and the history is an
//! `im::Vector`, so a clone is a snapshot a turn can be recomputed from.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use super::config::EngineConfig;
use super::error::EngineError;
use super::event::{CellEffect, TurnEvent};
use super::player::PlayerId;
use crate::board::Board;

/// Mutable per-game context shared by the turn engine and its rules.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Arc<Board>,
    config: EngineConfig,

    // === Current turn ===
    current_player: Option<PlayerId>,
    dice_value: Option<u8>,

    /// Position per player. Absent means never placed (position 0).
    positions: FxHashMap<PlayerId, u32>,

    /// Turns bound so far. The first bound turn is turn 1.
    turn_number: u32,

    history: Vector<TurnEvent>,
}

impl GameState {
    /// Create the state for a new game. No turn is bound yet.
    #[must_use]
    pub fn new(board: Arc<Board>, config: EngineConfig) -> Self {
        Self {
            board,
            config,
            current_player: None,
            dice_value: None,
            positions: FxHashMap::default(),
            turn_number: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Turn Binding ===

    /// Bind a player and roll for a new turn.
    pub fn bind_turn(&mut self, player: PlayerId, dice_value: u8) {
        self.current_player = Some(player);
        self.dice_value = Some(dice_value);
        self.turn_number = self.turn_number.wrapping_add(1);
    }

    /// The player whose turn is bound.
    pub fn current_player(&self) -> Result<PlayerId, EngineError> {
        self.current_player
            .ok_or(EngineError::InvalidState("no player bound to the current turn"))
    }

    /// The roll bound to the current turn.
    pub fn dice_value(&self) -> Result<u8, EngineError> {
        self.dice_value
            .ok_or(EngineError::InvalidState("no dice value bound to the current turn"))
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Positions ===

    /// Position of a player; 0 if never placed.
    #[must_use]
    pub fn position_of(&self, player: PlayerId) -> u32 {
        self.positions.get(&player).copied().unwrap_or(0)
    }

    /// Whether the player has ever been placed on the board.
    #[must_use]
    pub fn is_placed(&self, player: PlayerId) -> bool {
        self.positions.contains_key(&player)
    }

    pub fn set_position_of(&mut self, player: PlayerId, position: u32) {
        self.positions.insert(player, position);
    }

    /// Position of the player bound to the current turn.
    pub fn current_position(&self) -> Result<u32, EngineError> {
        Ok(self.position_of(self.current_player()?))
    }

    // === History ===

    /// Record a cell effect for the current turn and player.
    pub fn record(&mut self, effect: CellEffect) -> Result<(), EngineError> {
        let player = self.current_player()?;
        self.history.push_back(TurnEvent {
            turn: self.turn_number,
            player,
            effect,
        });
        Ok(())
    }

    /// Every recorded effect, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnEvent> {
        &self.history
    }

    /// Effects recorded after the history held `mark` events.
    #[must_use]
    pub fn events_since(&self, mark: usize) -> Vector<TurnEvent> {
        if mark >= self.history.len() {
            return Vector::new();
        }
        self.history.skip(mark)
    }

    /// Effects recorded during `turn`.
    pub fn events_for_turn(&self, turn: u32) -> impl Iterator<Item = &TurnEvent> + '_ {
        self.history.iter().filter(move |e| e.turn == turn)
    }
}
