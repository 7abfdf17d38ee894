//! Error taxonomy.
//!
//! - [`ConfigurationError`]: detected while building a board, rule chain,
//!   engine, or game loop. Fatal: the value under construction is never
//!   handed out.
//! - [`EngineError`]: raised by a single turn. Local to that turn; game state
//!   is left exactly as it was before the call.

use thiserror::Error;

use super::player::PlayerId;
use crate::rules::Rule;

/// Errors raised while constructing a board, rule chain, engine, or game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("board must have at least one cell")]
    EmptyBoard,

    #[error("{kind} trigger at {position} is outside the board (0..{cell_count})")]
    TriggerOutOfRange {
        kind: &'static str,
        position: u32,
        cell_count: u32,
    },

    #[error("{kind} starting at {start} ends at {end}, outside the board (0..{cell_count})")]
    EndOutOfRange {
        kind: &'static str,
        start: u32,
        end: u32,
        cell_count: u32,
    },

    #[error("cell {position} already hosts a {existing}, cannot add a {added}")]
    DuplicateTrigger {
        position: u32,
        existing: &'static str,
        added: &'static str,
    },

    #[error("ladder {start}->{end} must climb")]
    LadderGoesDown { start: u32, end: u32 },

    #[error("snake {start}->{end} must descend")]
    SnakeGoesUp { start: u32, end: u32 },

    #[error("coin at {position} must have a positive reward")]
    ZeroReward { position: u32 },

    #[error("rule chain is missing the mandatory {0} rule")]
    MissingRule(Rule),

    #[error("rule {0} appears more than once in the chain")]
    DuplicateRule(Rule),

    #[error("start face must be at least 1")]
    InvalidStartFace,

    #[error("dice must have at least one side")]
    InvalidDiceSides,

    #[error("dice script must contain at least one roll, all of them at least 1")]
    InvalidDiceScript,

    #[error("start face {face} can never be rolled on a {sides}-sided die")]
    UnreachableStartFace { face: u8, sides: u8 },

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("player id {0} is used twice")]
    DuplicatePlayer(PlayerId),
}

/// Errors raised by a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("{player} at {position} rolled {roll}, overshooting the final cell {final_cell}")]
    OverflowPolicyViolation {
        player: PlayerId,
        position: u32,
        roll: u8,
        final_cell: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_messages() {
        let err = ConfigurationError::DuplicateTrigger {
            position: 30,
            existing: "snake",
            added: "ladder",
        };
        assert_eq!(err.to_string(), "cell 30 already hosts a snake, cannot add a ladder");

        let err = ConfigurationError::MissingRule(Rule::WonGame);
        assert_eq!(err.to_string(), "rule chain is missing the mandatory WonGame rule");

        let err = ConfigurationError::UnreachableStartFace { face: 7, sides: 6 };
        assert_eq!(err.to_string(), "start face 7 can never be rolled on a 6-sided die");
    }

    #[test]
    fn test_engine_messages() {
        let err = EngineError::OverflowPolicyViolation {
            player: PlayerId::new(1),
            position: 97,
            roll: 5,
            final_cell: 100,
        };
        assert_eq!(
            err.to_string(),
            "Player 1 at 97 rolled 5, overshooting the final cell 100"
        );
    }
}
