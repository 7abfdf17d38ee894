//! Cell behaviors.

use serde::{Deserialize, Serialize};

/// One cell of the board.
///
/// Every variant carries its own trigger position, so a `Cell` read out of
/// the board is self-describing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No behavior.
    Plain { position: u32 },
    /// Landing on `start` sends the player down to `end`.
    Snake { start: u32, end: u32 },
    /// Landing on `start` sends the player up to `end`.
    Ladder { start: u32, end: u32 },
    /// Landing on `position` collects a coin worth `reward`.
    Coin { position: u32, reward: u32 },
}

impl Cell {
    /// Position at which this cell's behavior activates.
    #[must_use]
    pub const fn trigger(self) -> u32 {
        match self {
            Cell::Plain { position } | Cell::Coin { position, .. } => position,
            Cell::Snake { start, .. } | Cell::Ladder { start, .. } => start,
        }
    }

    /// Where a player on this cell is redirected to, if anywhere.
    #[must_use]
    pub const fn redirect(self) -> Option<u32> {
        match self {
            Cell::Snake { end, .. } | Cell::Ladder { end, .. } => Some(end),
            Cell::Plain { .. } | Cell::Coin { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Cell::Plain { .. })
    }

    /// Lowercase name, used in error messages and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Cell::Plain { .. } => "plain cell",
            Cell::Snake { .. } => "snake",
            Cell::Ladder { .. } => "ladder",
            Cell::Coin { .. } => "coin",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Plain { position } => write!(f, "{}", position),
            Cell::Snake { start, end } => write!(f, "{} (snake to {})", start, end),
            Cell::Ladder { start, end } => write!(f, "{} (ladder to {})", start, end),
            Cell::Coin { position, reward } => write!(f, "{} (coin worth {})", position, reward),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_and_redirect() {
        let snake = Cell::Snake { start: 30, end: 14 };
        assert_eq!(snake.trigger(), 30);
        assert_eq!(snake.redirect(), Some(14));

        let ladder = Cell::Ladder { start: 15, end: 21 };
        assert_eq!(ladder.trigger(), 15);
        assert_eq!(ladder.redirect(), Some(21));

        let coin = Cell::Coin { position: 10, reward: 5 };
        assert_eq!(coin.trigger(), 10);
        assert_eq!(coin.redirect(), None);

        let plain = Cell::Plain { position: 3 };
        assert_eq!(plain.trigger(), 3);
        assert!(!plain.is_special());
        assert!(coin.is_special());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Snake { start: 30, end: 14 }.to_string(), "30 (snake to 14)");
        assert_eq!(Cell::Plain { position: 7 }.to_string(), "7");
    }
}
