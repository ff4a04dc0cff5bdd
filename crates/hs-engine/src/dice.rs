//! The die-roller seam between the engine and its randomness source.
//!
//! All randomness flows through an explicit [`DieRoller`] handle rather
//! than ambient global state, so each trial can carry its own seeded
//! source and tests can script exact die sequences.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Sides on the attack die used throughout the combat rules.
pub const D10: u32 = 10;

/// Source of die results and uniform picks for the engine.
pub trait DieRoller {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    /// A `sides` of zero is treated as a one-sided die.
    fn roll(&mut self, sides: u32) -> u32;

    /// Pick an index uniformly from `0..len`. Callers guarantee a
    /// non-empty range; a `len` of zero yields 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// A [`DieRoller`] backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    /// Create a roller from a fixed seed. Identical seeds produce
    /// identical die sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DieRoller for SeededRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// A roller fed fixed sequences, for forcing exact die outcomes in
/// tests. `roll` pops from the roll script and panics when it runs
/// dry; `pick` pops from the pick script and falls back to 0.
#[cfg(test)]
pub(crate) struct ScriptedRolls {
    rolls: std::collections::VecDeque<u32>,
    picks: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRolls {
    pub(crate) fn new(rolls: &[u32]) -> Self {
        Self::with_picks(rolls, &[])
    }

    pub(crate) fn with_picks(rolls: &[u32], picks: &[usize]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl DieRoller for ScriptedRolls {
    fn roll(&mut self, _sides: u32) -> u32 {
        self.rolls.pop_front().expect("roll script exhausted")
    }

    fn pick(&mut self, _len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}
