//! Demo lot registry and pipeline configuration

use parkwatch_core::LotKind;
use parkwatch_datagen::{LotBounds, SeriesConfig};
use parkwatch_detector::DetectorConfig;

/// Configuration for the detection pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Seed shared by all generators in one run
    pub seed: u64,
    /// Number of lot pairs to report on
    pub num_pairs: usize,
    /// Detection parameters
    pub detector: DetectorConfig,
    /// Series generation parameters
    pub series: SeriesConfig,
    /// Bounding box for lot placement
    pub lot_bounds: LotBounds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_pairs: 4,
            detector: DetectorConfig::default(),
            series: SeriesConfig::default(),
            lot_bounds: LotBounds::default(),
        }
    }
}

/// The eight demo lots, ordered so that fixed-order pairing groups lots of
/// the same kind together
pub fn demo_lots() -> Vec<(u32, LotKind)> {
    vec![
        (935, LotKind::School),
        (922, LotKind::School),
        (924, LotKind::Park),
        (921, LotKind::Park),
        (923, LotKind::Residence),
        (920, LotKind::Residence),
        (1672, LotKind::Mall),
        (929, LotKind::Mall),
    ]
}
