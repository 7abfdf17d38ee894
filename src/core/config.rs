//! Engine and game-loop configuration.
//!
//! - `EngineConfig`: rules-level knobs read by the turn engine (start face,
//!   overshoot policy).
//! - `GameConfig`: knobs for the external loop (dice, rotation policies,
//!   safety cap on rolls).
//!
//! Both are plain serde structs with `Default` and `with_*` builders.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Face a player must roll before their first move.
pub const DEFAULT_START_FACE: u8 = 6;

/// Sides on the default die.
pub const DEFAULT_DICE_SIDES: u8 = 6;

/// What happens when `position + roll` passes the final cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Clamp to the final cell; overshooting wins.
    #[default]
    Clamp,
    /// Only an exact landing wins. An overshooting roll is rejected and the
    /// position stays where it was.
    ExactLanding,
}

/// What the loop does after a `Started` outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartedPolicy {
    /// The same player rolls again straight away and starts moving.
    #[default]
    RollAgain,
    /// Starting consumes the turn; rotate to the next player.
    EndTurn,
}

/// What the loop does after a `NoMove` outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoMovePolicy {
    /// The same player keeps rolling until the start gate passes.
    #[default]
    RollAgain,
    /// A failed start consumes the turn; rotate to the next player.
    EndTurn,
}

/// Configuration read by the turn engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Roll required to pass the start gate.
    pub start_face: u8,

    /// Overshoot handling at the final cell.
    pub overflow: OverflowPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_face: DEFAULT_START_FACE,
            overflow: OverflowPolicy::Clamp,
        }
    }
}

impl EngineConfig {
    /// Set the start face.
    #[must_use]
    pub fn with_start_face(mut self, face: u8) -> Self {
        self.start_face = face;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.start_face == 0 {
            return Err(ConfigurationError::InvalidStartFace);
        }
        Ok(())
    }
}

/// Configuration for the external game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sides on the die rolled each turn.
    pub dice_sides: u8,

    /// Rotation after `Started`.
    pub on_started: StartedPolicy,

    /// Rotation after `NoMove`.
    pub on_no_move: NoMovePolicy,

    /// Upper bound on rolls before `Game::run` gives up (0 = unlimited).
    pub max_rolls: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_sides: DEFAULT_DICE_SIDES,
            on_started: StartedPolicy::RollAgain,
            on_no_move: NoMovePolicy::RollAgain,
            max_rolls: 10_000,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u8) -> Self {
        self.dice_sides = sides;
        self
    }

    #[must_use]
    pub fn with_started_policy(mut self, policy: StartedPolicy) -> Self {
        self.on_started = policy;
        self
    }

    #[must_use]
    pub fn with_no_move_policy(mut self, policy: NoMovePolicy) -> Self {
        self.on_no_move = policy;
        self
    }

    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.dice_sides == 0 {
            return Err(ConfigurationError::InvalidDiceSides);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.start_face, 6);
        assert_eq!(config.overflow, OverflowPolicy::Clamp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::default()
            .with_start_face(1)
            .with_overflow(OverflowPolicy::ExactLanding);

        assert_eq!(config.start_face, 1);
        assert_eq!(config.overflow, OverflowPolicy::ExactLanding);
    }

    #[test]
    fn test_engine_config_zero_face() {
        let config = EngineConfig::default().with_start_face(0);
        assert_eq!(config.validate(), Err(ConfigurationError::InvalidStartFace));
    }

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.dice_sides, 6);
        assert_eq!(config.on_started, StartedPolicy::RollAgain);
        assert_eq!(config.on_no_move, NoMovePolicy::RollAgain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_game_config_zero_sides() {
        let config = GameConfig::default().with_dice_sides(0);
        assert_eq!(config.validate(), Err(ConfigurationError::InvalidDiceSides));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default()
            .with_started_policy(StartedPolicy::EndTurn)
            .with_max_rolls(50);

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);

        let engine = EngineConfig::default().with_overflow(OverflowPolicy::ExactLanding);
        let json = serde_json::to_string(&engine).unwrap();
        let restored: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(engine, restored);
    }
}
