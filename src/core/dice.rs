//! Dice: the engine's only source of randomness, kept outside the engine.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the same roll sequence
//! - **Scripted**: replay a fixed list of faces for tests and demos
//!
//! ```
//! use snakes_ladders::core::{Dice, DiceSource};
//!
//! let mut a = Dice::new(6, 42).unwrap();
//! let mut b = Dice::new(6, 42).unwrap();
//!
//! for _ in 0..20 {
//!     let roll = a.roll();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::ConfigurationError;

/// Anything the game loop can roll.
pub trait DiceSource {
    /// Roll once. Returns a face in `[1, sides]`.
    fn roll(&mut self) -> u8;

    /// Number of faces.
    fn sides(&self) -> u8;

    /// Whether `face` can ever come up.
    fn can_roll(&self, face: u8) -> bool {
        (1..=self.sides()).contains(&face)
    }
}

/// Seeded uniform die.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
#[derive(Clone, Debug)]
pub struct Dice {
    inner: ChaCha8Rng,
    sides: u8,
}

impl Dice {
    /// Create a die with `sides` faces, seeded with `seed`.
    pub fn new(sides: u8, seed: u64) -> Result<Self, ConfigurationError> {
        if sides == 0 {
            return Err(ConfigurationError::InvalidDiceSides);
        }
        Ok(Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            sides,
        })
    }
}

impl DiceSource for Dice {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=self.sides)
    }

    fn sides(&self) -> u8 {
        self.sides
    }
}

/// A die that replays a fixed list of faces, cycling at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a scripted die. The script must be non-empty and contain no zeros.
    pub fn new(rolls: impl Into<Vec<u8>>) -> Result<Self, ConfigurationError> {
        let rolls = rolls.into();
        if rolls.is_empty() || rolls.contains(&0) {
            return Err(ConfigurationError::InvalidDiceScript);
        }
        Ok(Self { rolls, cursor: 0 })
    }

    /// How many rolls have been taken so far.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        face
    }

    fn sides(&self) -> u8 {
        self.rolls.iter().copied().max().unwrap_or(1)
    }

    fn can_roll(&self, face: u8) -> bool {
        self.rolls.contains(&face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut d1 = Dice::new(6, 42).unwrap();
        let mut d2 = Dice::new(6, 42).unwrap();

        for _ in 0..100 {
            assert_eq!(d1.roll(), d2.roll());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut d1 = Dice::new(6, 1).unwrap();
        let mut d2 = Dice::new(6, 2).unwrap();

        let seq1: Vec<_> = (0..20).map(|_| d1.roll()).collect();
        let seq2: Vec<_> = (0..20).map(|_| d2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_in_range_and_cover_faces() {
        let mut dice = Dice::new(6, 7).unwrap();
        let mut seen = [false; 6];

        for _ in 0..600 {
            let roll = dice.roll();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "every face should appear in 600 rolls");
    }

    #[test]
    fn test_one_sided_die() {
        let mut dice = Dice::new(1, 9).unwrap();
        assert!((0..10).all(|_| dice.roll() == 1));
    }

    #[test]
    fn test_zero_sides_rejected() {
        assert_eq!(Dice::new(0, 1).unwrap_err(), ConfigurationError::InvalidDiceSides);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut dice = ScriptedDice::new(vec![6, 2, 3]).unwrap();
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![6, 2, 3, 6, 2, 3, 6]);
        assert_eq!(dice.rolls_taken(), 7);
        assert_eq!(dice.sides(), 6);
    }

    #[test]
    fn test_scripted_rejects_bad_scripts() {
        assert_eq!(
            ScriptedDice::new(Vec::<u8>::new()).unwrap_err(),
            ConfigurationError::InvalidDiceScript
        );
        assert_eq!(
            ScriptedDice::new(vec![3, 0]).unwrap_err(),
            ConfigurationError::InvalidDiceScript
        );
    }

    #[test]
    fn test_can_roll() {
        let dice = Dice::new(4, 1).unwrap();
        assert!(dice.can_roll(1));
        assert!(dice.can_roll(4));
        assert!(!dice.can_roll(0));
        assert!(!dice.can_roll(6));

        // A script only rolls what it lists, even below its highest face.
        let script = ScriptedDice::new(vec![2, 5]).unwrap();
        assert!(script.can_roll(5));
        assert!(!script.can_roll(3));
    }
}
