//! Random source used by every generation phase.
//!
//! Generation code only ever asks for bounded integers, so the phases take a
//! `RandomSource` instead of a concrete generator. Seeded runs use
//! `ChaCha8Rng`; tests can drive a phase with a `ScriptedSource` to force a
//! known sequence of draws.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform integer in `lo..=hi`. Requires `lo <= hi`.
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize;

    /// Uniform integer in `0..n`. Requires `n > 0`.
    fn below(&mut self, n: u32) -> u32;
}

impl RandomSource for ChaCha8Rng {
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }

    fn below(&mut self, n: u32) -> u32 {
        self.gen_range(0..n)
    }
}

/// Create the generator for a seeded run.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Each draw reduces the next raw value into the requested range with `%`,
/// so `range_inclusive(lo, hi)` yields `lo + v % (hi - lo + 1)`.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// A source that returns the same raw value forever.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    fn next_raw(&mut self) -> u32 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        v
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        let span = hi - lo + 1;
        lo + self.next_raw() as usize % span
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next_raw() % n
    }
}
