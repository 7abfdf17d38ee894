//! Board layout and validated construction.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::ConfigurationError;

/// Immutable board of `cell_count` cells.
///
/// Positions `0..cell_count` are cells; position 0 is the start square.
/// `cell_count` itself is the final cell: reaching it wins. It is never a
/// trigger.
///
/// Boards are only obtainable through validated construction, including
/// deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardBuilder", into = "BoardBuilder")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from literal `(start, end)` and `(position, reward)` lists.
    ///
    /// ```
    /// use snakes_ladders::board::{Board, Cell};
    ///
    /// let board = Board::new(100, &[(30, 14)], &[(15, 21)], &[(10, 5)]).unwrap();
    /// assert_eq!(board.final_cell(), 100);
    /// assert_eq!(board.behavior_at(30), Some(Cell::Snake { start: 30, end: 14 }));
    /// ```
    pub fn new(
        cell_count: u32,
        snakes: &[(u32, u32)],
        ladders: &[(u32, u32)],
        coins: &[(u32, u32)],
    ) -> Result<Self, ConfigurationError> {
        BoardBuilder {
            cell_count,
            snakes: snakes.to_vec(),
            ladders: ladders.to_vec(),
            coins: coins.to_vec(),
        }
        .build()
    }

    /// A board of plain cells only.
    pub fn plain(cell_count: u32) -> Result<Self, ConfigurationError> {
        BoardBuilder::new(cell_count).build()
    }

    /// Start a builder.
    pub fn builder(cell_count: u32) -> BoardBuilder {
        BoardBuilder::new(cell_count)
    }

    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Position that wins the game.
    #[must_use]
    pub fn final_cell(&self) -> u32 {
        self.cell_count()
    }

    /// Behavior of the cell at `index`, or `None` past the last cell.
    #[must_use]
    pub fn behavior_at(&self, index: u32) -> Option<Cell> {
        self.cells.get(index as usize).copied()
    }

    /// Special cells in position order.
    pub fn special_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied().filter(|c| c.is_special())
    }

    pub fn snakes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().filter_map(|c| match *c {
            Cell::Snake { start, end } => Some((start, end)),
            _ => None,
        })
    }

    pub fn ladders(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().filter_map(|c| match *c {
            Cell::Ladder { start, end } => Some((start, end)),
            _ => None,
        })
    }

    pub fn coins(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().filter_map(|c| match *c {
            Cell::Coin { position, reward } => Some((position, reward)),
            _ => None,
        })
    }
}

/// Builder for [`Board`].
///
/// Collects literal coordinate lists; all checks run in [`build`](Self::build).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardBuilder {
    pub cell_count: u32,
    #[serde(default)]
    pub snakes: Vec<(u32, u32)>,
    #[serde(default)]
    pub ladders: Vec<(u32, u32)>,
    #[serde(default)]
    pub coins: Vec<(u32, u32)>,
}

impl BoardBuilder {
    pub fn new(cell_count: u32) -> Self {
        Self {
            cell_count,
            ..Self::default()
        }
    }

    /// Add a snake from `start` down to `end`.
    #[must_use]
    pub fn snake(mut self, start: u32, end: u32) -> Self {
        self.snakes.push((start, end));
        self
    }

    /// Add a ladder from `start` up to `end`.
    #[must_use]
    pub fn ladder(mut self, start: u32, end: u32) -> Self {
        self.ladders.push((start, end));
        self
    }

    /// Add a coin worth `reward` at `position`.
    #[must_use]
    pub fn coin(mut self, position: u32, reward: u32) -> Self {
        self.coins.push((position, reward));
        self
    }

    /// Validate and build the board.
    pub fn build(self) -> Result<Board, ConfigurationError> {
        let n = self.cell_count;
        if n == 0 {
            return Err(ConfigurationError::EmptyBoard);
        }

        let mut cells: Vec<Cell> = (0..n).map(|position| Cell::Plain { position }).collect();

        let specials = self
            .snakes
            .iter()
            .map(|&(start, end)| Cell::Snake { start, end })
            .chain(self.ladders.iter().map(|&(start, end)| Cell::Ladder { start, end }))
            .chain(self.coins.iter().map(|&(position, reward)| Cell::Coin { position, reward }));

        for cell in specials {
            check_cell(cell, n)?;

            let slot = &mut cells[cell.trigger() as usize];
            if slot.is_special() {
                return Err(ConfigurationError::DuplicateTrigger {
                    position: cell.trigger(),
                    existing: slot.label(),
                    added: cell.label(),
                });
            }
            *slot = cell;
        }

        Ok(Board { cells })
    }
}

fn check_cell(cell: Cell, cell_count: u32) -> Result<(), ConfigurationError> {
    let trigger = cell.trigger();
    if trigger >= cell_count {
        return Err(ConfigurationError::TriggerOutOfRange {
            kind: cell.label(),
            position: trigger,
            cell_count,
        });
    }

    if let Some(end) = cell.redirect() {
        if end >= cell_count {
            return Err(ConfigurationError::EndOutOfRange {
                kind: cell.label(),
                start: trigger,
                end,
                cell_count,
            });
        }
    }

    match cell {
        Cell::Ladder { start, end } if end <= start => {
            Err(ConfigurationError::LadderGoesDown { start, end })
        }
        Cell::Snake { start, end } if end >= start => {
            Err(ConfigurationError::SnakeGoesUp { start, end })
        }
        Cell::Coin { position, reward: 0 } => Err(ConfigurationError::ZeroReward { position }),
        _ => Ok(()),
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = ConfigurationError;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        Self {
            cell_count: board.cell_count(),
            snakes: board.snakes().collect(),
            ladders: board.ladders().collect(),
            coins: board.coins().collect(),
        }
    }
}
