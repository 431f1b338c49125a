//! Synthetic availability series
//!
//! Each lot gets a sinusoid with its own frequency, phase, and amplitude,
//! plus additive Gaussian noise whose mean is offset by the lot number's
//! parity and remainder mod 3.

use parkwatch_core::LotId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// Shape parameters for synthetic availability series
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Number of time steps per series (default: 4 days of hourly steps)
    pub num_steps: usize,
    /// Uniform range the per-lot sinusoid frequency is drawn from
    pub freq_range: (f64, f64),
    /// Uniform range the per-lot amplitude is drawn from
    pub amplitude_range: (f64, f64),
    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f64,
    /// Baseline availability before the per-lot offsets
    pub base_level: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_steps: 24 * 4,
            freq_range: (0.1, 0.5),
            amplitude_range: (5.0, 10.0),
            noise_std: 5.0,
            base_level: 15.0,
        }
    }
}

/// Generates per-lot availability series from a seeded RNG
pub struct SeriesGenerator {
    config: SeriesConfig,
    rng: StdRng,
}

impl SeriesGenerator {
    /// Create a generator with a specific seed for reproducible series
    pub fn with_seed(config: SeriesConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Noise mean for a lot: baseline plus offsets keyed off the lot number
    fn noise_mean(&self, lot: LotId) -> f64 {
        let id = lot.value();
        self.config.base_level + f64::from(id % 2) * 5.0 + f64::from(id % 3) * 5.0
    }

    /// Generate one availability series for `lot`
    pub fn generate(&mut self, lot: LotId) -> Vec<f64> {
        let (f_lo, f_hi) = self.config.freq_range;
        let (a_lo, a_hi) = self.config.amplitude_range;
        let freq = self.rng.gen_range(f_lo..f_hi);
        let phase = self.rng.gen_range(0.0..2.0 * PI);
        let amplitude = self.rng.gen_range(a_lo..a_hi);
        let mean = self.noise_mean(lot);

        (0..self.config.num_steps)
            .map(|t| {
                let z: f64 = self.rng.sample(StandardNormal);
                amplitude * (PI * freq * t as f64 + phase).sin() + mean + self.config.noise_std * z
            })
            .collect()
    }

    /// Generate one series per lot, preserving input order
    pub fn generate_all(&mut self, lots: &[LotId]) -> Vec<(LotId, Vec<f64>)> {
        lots.iter()
            .map(|&lot| (lot, self.generate(lot)))
            .collect()
    }
}
