//! Die rolls for the betting game
//!
//! The ledger never reaches for ambient process randomness; callers hand
//! it a [`DieSource`]. The standard die is seedable, so a fixed seed
//! replays the same sequence of rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the die
pub const DIE_FACES: u8 = 6;

/// Source of die rolls
pub trait DieSource {
    /// Draw one roll in `1..=DIE_FACES`
    fn roll(&mut self) -> u8;
}

/// Die backed by a seedable PRNG
#[derive(Debug)]
pub struct StdDie {
    rng: StdRng,
}

impl StdDie {
    /// Die with a fixed seed; the same seed yields the same rolls
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Die seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DieSource for StdDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let mut first = StdDie::seeded(42);
        let mut second = StdDie::seeded(42);

        let a: Vec<u8> = (0..32).map(|_| first.roll()).collect();
        let b: Vec<u8> = (0..32).map(|_| second.roll()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rolls_stay_on_the_die() {
        let mut die = StdDie::seeded(7);
        for _ in 0..1000 {
            let roll = die.roll();
            assert!((1..=DIE_FACES).contains(&roll));
        }
    }
}
