//! Turn engine.
//!
//! One call to [`TurnEngine::execute_move`] plays one roll for one player:
//!
//! 1. `NotStarted`: bind the turn and evaluate the start gate only.
//!    Pass → `Starting`, outcome `Started`; fail → outcome `NoMove`.
//!    Nothing moves either way.
//! 2. Compute the target per [`OverflowPolicy`], then bind the turn into
//!    [`GameState`].
//! 3. `Starting`: promote to `Active`.
//! 4. Move. Win check fires → `Won`, board effects skipped.
//! 5. Board effects, once each, in chain order → `Advanced`.
//!
//! The engine never rotates players; the caller does that from the outcome.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::chain::RuleChain;
use super::rule::{Rule, RulePhase};
use crate::board::Board;
use crate::core::{
    ConfigurationError, EngineConfig, EngineError, GameState, OverflowPolicy, Player, PlayerId,
    TurnState,
};

/// Result of one `execute_move` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Start gate failed; nothing changed.
    NoMove,
    /// Start gate passed; the player has not moved yet.
    Started,
    /// Moved and board effects were applied.
    Advanced,
    /// Reached the final cell.
    Won,
}

impl MoveOutcome {
    /// Whether the game is over for this player.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Won)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MoveOutcome::NoMove => "no move",
            MoveOutcome::Started => "started",
            MoveOutcome::Advanced => "advanced",
            MoveOutcome::Won => "won",
        };
        f.write_str(s)
    }
}

/// Drives turns against a validated board and rule chain.
///
/// Cloning an engine takes a snapshot of its game state; replaying the same
/// roll for the same player on two clones gives identical results.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    rules: RuleChain,
    start_gate: Rule,
    win_check: Rule,
}

impl TurnEngine {
    /// Build an engine.
    ///
    /// Fails if the chain lacks a start gate or win check, repeats a rule,
    /// or the configuration is invalid.
    pub fn new(
        board: impl Into<Arc<Board>>,
        rules: RuleChain,
        config: EngineConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        rules.validate()?;

        let start_gate = rules
            .find(RulePhase::StartGate)
            .ok_or(ConfigurationError::MissingRule(Rule::NoSixToStart))?;
        let win_check = rules
            .find(RulePhase::WinCheck)
            .ok_or(ConfigurationError::MissingRule(Rule::WonGame))?;

        Ok(Self {
            state: GameState::new(board.into(), config),
            rules,
            start_gate,
            win_check,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.state.config()
    }

    #[must_use]
    pub fn position_of(&self, player: PlayerId) -> u32 {
        self.state.position_of(player)
    }

    /// Play one roll for `player`.
    ///
    /// Errors leave game state and the player's turn state untouched:
    /// - [`EngineError::InvalidState`] for a zero roll or a player who
    ///   already won;
    /// - [`EngineError::OverflowPolicyViolation`] when an exact landing is
    ///   required and the roll overshoots.
    #[instrument(level = "debug", skip(self, player), fields(player = %player.id()))]
    pub fn execute_move(&mut self, dice_value: u8, player: &mut Player) -> Result<MoveOutcome, EngineError> {
        if dice_value == 0 {
            return Err(EngineError::InvalidState("dice value must be at least 1"));
        }
        if !player.turn_state().is_playing() {
            return Err(EngineError::InvalidState("player has already won"));
        }

        let id = player.id();

        if player.turn_state() == TurnState::NotStarted {
            self.state.bind_turn(id, dice_value);
            if self.start_gate.applies(&mut self.state)? {
                player.set_turn_state(TurnState::Starting);
                info!(player = %id, "passed the start gate");
                return Ok(MoveOutcome::Started);
            }
            debug!(player = %id, "start gate not passed");
            return Ok(MoveOutcome::NoMove);
        }

        let from = self.state.position_of(id);
        let to = self.destination(id, from, dice_value)?;
        self.state.bind_turn(id, dice_value);

        if player.turn_state() == TurnState::Starting {
            player.set_turn_state(TurnState::Active);
        }
        self.state.set_position_of(id, to);

        if self.win_check.applies(&mut self.state)? {
            player.set_turn_state(TurnState::Won);
            info!(player = %id, from, to, "reached the final cell");
            return Ok(MoveOutcome::Won);
        }

        for rule in self.rules.board_effects() {
            rule.applies(&mut self.state)?;
        }

        debug!(
            player = %id,
            from,
            moved_to = to,
            settled_at = self.state.position_of(id),
            "advanced"
        );
        Ok(MoveOutcome::Advanced)
    }

    fn destination(&self, player: PlayerId, from: u32, roll: u8) -> Result<u32, EngineError> {
        let final_cell = self.state.board().final_cell();
        let target = from.saturating_add(u32::from(roll));

        match self.state.config().overflow {
            OverflowPolicy::Clamp => Ok(target.min(final_cell)),
            OverflowPolicy::ExactLanding if target > final_cell => {
                Err(EngineError::OverflowPolicyViolation {
                    player,
                    position: from,
                    roll,
                    final_cell,
                })
            }
            OverflowPolicy::ExactLanding => Ok(target),
        }
    }
}
