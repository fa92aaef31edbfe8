use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Source of uniform draws in `[0, 1)` consumed by the match engine.
///
/// Everything random in a simulation goes through this trait so a match can be
/// replayed exactly by handing the engine the same source again.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]`
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }

        let span = (max - min) as u64 + 1;
        let offset = (self.next_f64() * span as f64) as u64;

        min + offset.min((max - min) as u64) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Process-wide generator, for production runs where replays are not needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty script always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();

        ScriptedRandom {
            values,
            position: 0,
        }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;

        value
    }
}
