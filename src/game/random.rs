//! Randomness seam for the turn resolver.
//!
//! Enemy steps and item drops are the only random decisions in a turn. They go
//! through [`Randomness`] so a seeded generator can drive real games and a scripted
//! one can drive tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the resolver's random decisions.
pub trait Randomness {
    /// Uniform index in `[0, len)`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

/// Seeded generator backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Create a generator from a seed. Equal seeds replay equal games.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomness for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays fixed picks and rolls, in order.
///
/// Once a queue runs dry the fallback is used: pick `0`, roll `1.0` (which never
/// passes a probability check, so no item drops).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    /// Create a scripted source.
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = usize>, rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted values not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len() + self.rolls.len()
    }
}

impl Randomness for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .map_or(0, |idx| idx.min(len.saturating_sub(1)))
    }

    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(1.0)
    }
}
