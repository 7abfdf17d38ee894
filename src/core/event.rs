//! Cell effects recorded while board-effect rules run.
//!
//! Events are informational: the engine never reads them back to decide
//! anything. They give callers a per-turn account of snake bites, ladder
//! climbs and coin collections.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// What a special cell did to the player who landed on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellEffect {
    /// Bitten at `from`, slid down to `to`.
    SnakeBite { from: u32, to: u32 },
    /// Climbed from `from` up to `to`.
    LadderClimb { from: u32, to: u32 },
    /// Picked up a coin worth `reward` at `position`.
    CoinCollected { position: u32, reward: u32 },
}

impl CellEffect {
    /// Position after the effect.
    #[must_use]
    pub const fn destination(self) -> u32 {
        match self {
            CellEffect::SnakeBite { to, .. } | CellEffect::LadderClimb { to, .. } => to,
            CellEffect::CoinCollected { position, .. } => position,
        }
    }
}

impl std::fmt::Display for CellEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellEffect::SnakeBite { from, to } => write!(f, "bitten by a snake from {} to {}", from, to),
            CellEffect::LadderClimb { from, to } => write!(f, "climbed a ladder from {} to {}", from, to),
            CellEffect::CoinCollected { position, reward } => {
                write!(f, "collected a coin worth {} at {}", reward, position)
            }
        }
    }
}

/// A cell effect stamped with the turn and player it happened to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Turn number (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    pub effect: CellEffect,
}
