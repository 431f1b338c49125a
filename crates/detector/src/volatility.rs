//! Rolling volatility mask
//!
//! A sample is "volatile" when the standard deviation of the window
//! centered on it exceeds a threshold. The window convention matches a
//! centered rolling computation that requires the full window: positions
//! whose window would extend past either end of the series get a deviation
//! of 0.0 and are never volatile.

use crate::error::{DetectorError, Result};
use crate::regions::{Region, find_regions};
use serde::{Deserialize, Serialize};

/// Parameters for unpredictability detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Rolling window size in samples. Odd sizes center exactly; an even
    /// size takes one more sample behind the center than ahead of it.
    pub window: usize,
    /// Standard deviation above which a sample counts as volatile
    pub threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window: 3,
            threshold: 10.0,
        }
    }
}

/// Centered rolling sample standard deviation.
///
/// The window at index `i` spans `[i - window/2, i + (window-1)/2]`
/// (integer division). Positions where that span does not fit entirely
/// inside the series yield 0.0, as does any window with fewer than two
/// samples, so `window == 0`, `window == 1`, and `window > len` all
/// produce an all-zero result.
pub fn rolling_std(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![0.0; n];
    if window == 0 || window > n {
        return out;
    }

    let back = window / 2;
    let ahead = (window - 1) / 2;
    for i in back..n - ahead {
        out[i] = sample_std(&series[i - back..=i + ahead]);
    }
    out
}

/// Sample standard deviation (ddof = 1); undefined below two samples
fn sample_std(window: &[f64]) -> f64 {
    if window.len() < 2 {
        return 0.0;
    }
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Flag the samples of `series` whose local standard deviation strictly
/// exceeds `threshold`.
///
/// Total over any series length and any `window` (see [`rolling_std`] for
/// the edge conventions). The threshold is validated strictly: negative or
/// NaN values are rejected with [`DetectorError::InvalidParameter`].
///
/// Non-finite samples propagate into the window statistics: a NaN standard
/// deviation compares false against the threshold, so such positions are
/// never flagged, while an infinite deviation always is.
pub fn volatility_mask(series: &[f64], window: usize, threshold: f64) -> Result<Vec<bool>> {
    validate_threshold(threshold)?;
    Ok(rolling_std(series, window)
        .iter()
        .map(|&sd| sd > threshold)
        .collect())
}

/// Element-wise OR of two masks.
///
/// The result has the length of the longer input; positions past the end
/// of the shorter one are treated as false.
pub fn merge_masks(a: &[bool], b: &[bool]) -> Vec<bool> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).copied().unwrap_or(false) || b.get(i).copied().unwrap_or(false))
        .collect()
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(DetectorError::InvalidParameter(format!(
            "threshold must be a non-negative number, got {threshold}"
        )));
    }
    Ok(())
}

/// Detects unpredictable regions in availability series
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Volatility mask for one series
    pub fn mask(&self, series: &[f64]) -> Result<Vec<bool>> {
        volatility_mask(series, self.config.window, self.config.threshold)
    }

    /// Unpredictable regions of one series
    pub fn detect(&self, series: &[f64]) -> Result<Vec<Region>> {
        Ok(find_regions(&self.mask(series)?))
    }

    /// Unpredictable regions over a group of series, where a position is
    /// volatile if it is volatile in any member of the group
    pub fn detect_combined(&self, group: &[&[f64]]) -> Result<Vec<Region>> {
        let mut combined: Vec<bool> = Vec::new();
        for series in group {
            let mask = self.mask(series)?;
            combined = merge_masks(&combined, &mask);
        }
        Ok(find_regions(&combined))
    }
}
