//! Board model: an immutable sequence of cells.
//!
//! Each cell is either plain or hosts exactly one special behavior:
//!
//! - **Snake**: slides the player down to a lower cell
//! - **Ladder**: lifts the player up to a higher cell
//! - **Coin**: records a collection event, no movement
//!
//! Boards are validated at construction and never mutated during play.
//! The turn engine shares one board with every rule through
//! [`GameState`](crate::core::GameState).

mod cell;
mod layout;
pub mod presets;

pub use cell::Cell;
pub use layout::{Board, BoardBuilder};
