//! Ready-made 100-cell boards.

use super::layout::Board;
use crate::core::ConfigurationError;

/// Cells on every preset board.
pub const PRESET_CELLS: u32 = 100;

const CLASSIC_SNAKES: [(u32, u32); 6] = [(11, 5), (30, 14), (36, 23), (50, 39), (80, 20), (93, 45)];

const LONG_SNAKES: [(u32, u32); 8] = [
    (11, 5),
    (30, 14),
    (36, 23),
    (50, 39),
    (80, 20),
    (93, 45),
    (97, 60),
    (99, 85),
];

const LADDERS: [(u32, u32); 5] = [(15, 21), (32, 67), (43, 55), (70, 85), (89, 95)];

const COINS: [(u32, u32); 6] = [(10, 5), (25, 10), (40, 15), (60, 20), (75, 25), (90, 50)];

/// Six snakes and five ladders, no coins.
pub fn classic() -> Result<Board, ConfigurationError> {
    Board::new(PRESET_CELLS, &CLASSIC_SNAKES, &LADDERS, &[])
}

/// Eight snakes, five ladders and six coins.
pub fn with_coins() -> Result<Board, ConfigurationError> {
    Board::new(PRESET_CELLS, &LONG_SNAKES, &LADDERS, &COINS)
}

/// Eight snakes and six coins; no ladders at all.
pub fn without_ladders() -> Result<Board, ConfigurationError> {
    Board::new(PRESET_CELLS, &LONG_SNAKES, &[], &COINS)
}
