//! Random source capability
//!
//! Every sampling call in the engine takes `&mut dyn RandomSource` explicitly.
//! One source is threaded sequentially through a whole game so that a seed
//! reproduces the game bit for bit; reordering draws breaks replay.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Seeded ChaCha8 stream, the production source.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaCha8Rng,
    seed: u64,
    draws: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed, draws: 0 }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws consumed so far (both `next_f64` and `inner_mut` users).
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Underlying generator for distribution sampling (`rand_distr`).
    ///
    /// Counts as one draw per call; callers sample exactly once per borrow.
    pub fn inner_mut(&mut self) -> &mut ChaCha8Rng {
        self.draws += 1;
        &mut self.rng
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws. Used to force specific rolls in tests.
///
/// Once the script is exhausted every draw returns `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self::with_fallback(values, 0.999)
    }

    pub fn with_fallback(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self { script: values.into_iter().collect(), fallback, consumed: 0 }
    }

    /// Draws taken so far, scripted or fallback.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.consumed += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Bernoulli roll: true with probability `p`.
#[inline]
pub fn roll(rng: &mut dyn RandomSource, p: f64) -> bool {
    rng.next_f64() < p
}
