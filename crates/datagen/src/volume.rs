//! Daily volume history and forecast
//!
//! Produces the demo's volume-over-time data: a block of observed daily
//! volumes followed by a shorter forecast block, each dated from its own
//! start day.

use chrono::{Duration, NaiveDate};
use parkwatch_core::{VolumeKind, VolumePoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ranges and lengths for generated volume data
#[derive(Debug, Clone)]
pub struct VolumeConfig {
    /// Days of observed history
    pub history_days: usize,
    /// Days of forecast
    pub forecast_days: usize,
    /// Inclusive range for historical daily volume
    pub history_range: (u32, u32),
    /// Inclusive range for forecast daily volume
    pub forecast_range: (u32, u32),
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            history_days: 30,
            forecast_days: 7,
            history_range: (50, 200),
            forecast_range: (60, 150),
        }
    }
}

/// Generates daily volume points from a seeded RNG
pub struct VolumeGenerator {
    config: VolumeConfig,
    rng: StdRng,
}

impl VolumeGenerator {
    /// Create a generator with a specific seed for reproducible volumes
    pub fn with_seed(config: VolumeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &VolumeConfig {
        &self.config
    }

    /// Generate history from `history_start` followed by forecast from
    /// `forecast_start`, each on consecutive days
    pub fn generate(
        &mut self,
        history_start: NaiveDate,
        forecast_start: NaiveDate,
    ) -> Vec<VolumePoint> {
        let mut points = Vec::with_capacity(self.config.history_days + self.config.forecast_days);

        let (h_lo, h_hi) = self.config.history_range;
        for day in 0..self.config.history_days {
            points.push(VolumePoint::new(
                history_start + Duration::days(day as i64),
                self.rng.gen_range(h_lo..=h_hi),
                VolumeKind::Historical,
            ));
        }

        let (f_lo, f_hi) = self.config.forecast_range;
        for day in 0..self.config.forecast_days {
            points.push(VolumePoint::new(
                forecast_start + Duration::days(day as i64),
                self.rng.gen_range(f_lo..=f_hi),
                VolumeKind::Forecast,
            ));
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }

    #[test]
    fn test_block_lengths_and_kinds() {
        let (h, f) = starts();
        let mut generator = VolumeGenerator::with_seed(VolumeConfig::default(), 42);
        let points = generator.generate(h, f);

        assert_eq!(points.len(), 37);
        assert!(
            points[..30]
                .iter()
                .all(|p| p.kind == VolumeKind::Historical)
        );
        assert!(points[30..].iter().all(|p| p.kind == VolumeKind::Forecast));
    }

    #[test]
    fn test_volumes_stay_in_range() {
        let (h, f) = starts();
        let mut generator = VolumeGenerator::with_seed(VolumeConfig::default(), 7);
        let points = generator.generate(h, f);

        assert!(
            points[..30]
                .iter()
                .all(|p| (50..=200).contains(&p.volume))
        );
        assert!(points[30..].iter().all(|p| (60..=150).contains(&p.volume)));
    }

    #[test]
    fn test_dates_are_consecutive_within_each_block() {
        let (h, f) = starts();
        let mut generator = VolumeGenerator::with_seed(VolumeConfig::default(), 42);
        let points = generator.generate(h, f);

        assert_eq!(points[0].date, h);
        assert_eq!(points[29].date, h + Duration::days(29));
        assert_eq!(points[30].date, f);
        assert_eq!(points[36].date, f + Duration::days(6));
    }

    #[test]
    fn test_equal_seeds_reproduce_volumes() {
        let (h, f) = starts();
        let mut a = VolumeGenerator::with_seed(VolumeConfig::default(), 3);
        let mut b = VolumeGenerator::with_seed(VolumeConfig::default(), 3);
        assert_eq!(a.generate(h, f), b.generate(h, f));
    }
}
