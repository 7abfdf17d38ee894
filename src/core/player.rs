//! Player identification and the per-player turn-state machine.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id is the
//! stable key used by [`GameState`](super::GameState) for positions.
//!
//! ## TurnState
//!
//! ```text
//! NotStarted --(start gate passes)--> Starting --(next move)--> Active --(final cell)--> Won
//! NotStarted --(start gate fails)---> NotStarted
//! ```

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(256)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Where a player is in the start-to-finish lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Has not passed the start gate yet.
    #[default]
    NotStarted,
    /// Passed the start gate; the next move promotes to `Active`.
    Starting,
    /// Moving around the board.
    Active,
    /// Reached the final cell. Terminal.
    Won,
}

impl TurnState {
    /// Whether the player can still be handed to the engine.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        !matches!(self, TurnState::Won)
    }
}

/// A participant, owned by the roster of the game loop.
///
/// The engine only touches `turn_state`. Positions live in
/// [`GameState`](super::GameState), keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    turn_state: TurnState,
}

impl Player {
    /// Create a player who has not started yet.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            turn_state: TurnState::NotStarted,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn set_turn_state(&mut self, state: TurnState) {
        self.turn_state = state;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player_not_started() {
        let player = Player::new(PlayerId::new(2), "Ada");
        assert_eq!(player.id(), PlayerId::new(2));
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.turn_state(), TurnState::NotStarted);
        assert_eq!(player.to_string(), "Ada (Player 2)");
    }

    #[test]
    fn test_turn_state_is_playing() {
        assert!(TurnState::NotStarted.is_playing());
        assert!(TurnState::Starting.is_playing());
        assert!(TurnState::Active.is_playing());
        assert!(!TurnState::Won.is_playing());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1), "Grace");
        player.set_turn_state(TurnState::Active);

        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, restored);
    }
}
