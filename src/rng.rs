use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of the two kinds of randomness action selection needs.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform action index in `0..n_actions`.
    fn next_action(&mut self, n_actions: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    exploration_decider: Uniform<f64>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            exploration_decider: Uniform::from(0.0..1.0),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.exploration_decider.sample(&mut self.rng)
    }

    fn next_action(&mut self, n_actions: usize) -> usize {
        Uniform::from(0..n_actions).sample(&mut self.rng)
    }
}
