//! Rule definitions.
//!
//! Rules are a closed set of stateless variants. Each one evaluates against
//! [`GameState`] and reports whether it fired. Board-effect rules also apply
//! their effect while evaluating: a snake or ladder rewrites the current
//! player's position, a coin records a collection event.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Cell;
use crate::core::{CellEffect, EngineError, GameState};

/// Where a rule runs in the turn pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RulePhase {
    /// Decides whether a not-yet-started player may start.
    StartGate,
    /// Decides whether the player has won, right after movement.
    WinCheck,
    /// Reacts to the cell the player is on after movement.
    BoardEffect,
}

/// A rule in the turn pipeline. The variant is its own discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Passes when the roll equals the configured start face, or when the
    /// player is already on the board.
    NoSixToStart,
    /// Fires when the current position reached the final cell.
    WonGame,
    /// Current position is a snake head: slide to its tail.
    LandOnSnake,
    /// Current position is a ladder foot: climb to its top.
    LandOnLadder,
    /// Current position holds a coin: record the collection.
    LandOnCoin,
}

impl Rule {
    /// Every rule, in the default pipeline order.
    pub const ALL: [Rule; 5] = [
        Rule::NoSixToStart,
        Rule::WonGame,
        Rule::LandOnSnake,
        Rule::LandOnLadder,
        Rule::LandOnCoin,
    ];

    #[must_use]
    pub const fn phase(self) -> RulePhase {
        match self {
            Rule::NoSixToStart => RulePhase::StartGate,
            Rule::WonGame => RulePhase::WinCheck,
            Rule::LandOnSnake | Rule::LandOnLadder | Rule::LandOnCoin => RulePhase::BoardEffect,
        }
    }

    /// Evaluate the rule for the player bound to the current turn.
    ///
    /// Returns `Ok(true)` if the rule fired. Fails with
    /// [`EngineError::InvalidState`] if no turn is bound.
    pub fn applies(self, state: &mut GameState) -> Result<bool, EngineError> {
        match self {
            Rule::NoSixToStart => start_gate(state),
            Rule::WonGame => won_game(state),
            Rule::LandOnSnake => land_on_snake(state),
            Rule::LandOnLadder => land_on_ladder(state),
            Rule::LandOnCoin => land_on_coin(state),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

fn start_gate(state: &mut GameState) -> Result<bool, EngineError> {
    let player = state.current_player()?;
    if state.is_placed(player) {
        return Ok(true);
    }
    Ok(state.dice_value()? == state.config().start_face)
}

fn won_game(state: &mut GameState) -> Result<bool, EngineError> {
    Ok(state.current_position()? >= state.board().final_cell())
}

fn land_on_snake(state: &mut GameState) -> Result<bool, EngineError> {
    let player = state.current_player()?;
    let from = state.position_of(player);
    let Some(Cell::Snake { end, .. }) = state.board().behavior_at(from) else {
        return Ok(false);
    };

    state.set_position_of(player, end);
    state.record(CellEffect::SnakeBite { from, to: end })?;
    debug!(%player, from, to = end, "snake bite");
    Ok(true)
}

fn land_on_ladder(state: &mut GameState) -> Result<bool, EngineError> {
    let player = state.current_player()?;
    let from = state.position_of(player);
    let Some(Cell::Ladder { end, .. }) = state.board().behavior_at(from) else {
        return Ok(false);
    };

    state.set_position_of(player, end);
    state.record(CellEffect::LadderClimb { from, to: end })?;
    debug!(%player, from, to = end, "ladder climb");
    Ok(true)
}

fn land_on_coin(state: &mut GameState) -> Result<bool, EngineError> {
    let player = state.current_player()?;
    let position = state.position_of(player);
    let Some(Cell::Coin { reward, .. }) = state.board().behavior_at(position) else {
        return Ok(false);
    };

    state.record(CellEffect::CoinCollected { position, reward })?;
    info!(%player, position, reward, "coin collected");
    Ok(true)
}
