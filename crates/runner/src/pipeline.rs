//! Detection pipeline
//!
//! The non-visual half of the pair-comparison demo: generate one
//! availability series per lot, group the lots into fixed-order pairs, and
//! detect the stretches where either series in a pair is too volatile to
//! predict. The report carries everything a renderer needs to highlight
//! those stretches.

use log::{debug, info};
use parkwatch_core::{LotId, LotKind, PairingError, ParkingLot, split_into_pairs};
use parkwatch_datagen::{LotGenerator, SeriesGenerator};
use parkwatch_detector::{Detector, DetectorError, Region};
use serde::Serialize;
use thiserror::Error;

use crate::bootstrap::PipelineConfig;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Detection failed: {0}")]
    Detector(#[from] DetectorError),

    #[error("Pairing failed: {0}")]
    Pairing(#[from] PairingError),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Detection result for one lot pair
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub first: LotId,
    pub second: LotId,
    /// Registered kinds; pairs need not share one
    pub first_kind: LotKind,
    pub second_kind: LotKind,
    /// Unpredictable stretches of the combined pair masks
    pub regions: Vec<Region>,
}

/// Full pipeline output
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub seed: u64,
    /// Samples per series
    pub num_steps: usize,
    /// Lot registry with placed coordinates
    pub lots: Vec<ParkingLot>,
    pub pairs: Vec<PairReport>,
}

impl DetectionReport {
    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full pipeline over `lots`
pub fn run(
    config: &PipelineConfig,
    lots: &[(u32, LotKind)],
) -> Result<DetectionReport, PipelineError> {
    let mut lot_gen = LotGenerator::with_seed(config.lot_bounds.clone(), config.seed);
    let registry = lot_gen.generate(lots);

    let ids: Vec<LotId> = registry.iter().map(|lot| lot.id).collect();
    let mut series_gen = SeriesGenerator::with_seed(config.series.clone(), config.seed);
    let series = series_gen.generate_all(&ids);

    // Pair the series records directly so each pair keeps its samples
    let records: Vec<(LotId, LotKind, Vec<f64>)> = registry
        .iter()
        .zip(series)
        .map(|(lot, (_, samples))| (lot.id, lot.kind, samples))
        .collect();
    let paired = split_into_pairs(&records, config.num_pairs)?;

    let detector = Detector::new(config.detector.clone());
    let mut pairs = Vec::with_capacity(paired.len());
    for (index, (first, second)) in paired.into_iter().enumerate() {
        let (first_id, first_kind, first_samples) = first;
        let (second_id, second_kind, second_samples) = second;

        let regions =
            detector.detect_combined(&[first_samples.as_slice(), second_samples.as_slice()])?;
        info!(
            "[Pipeline] pair {}: {} & {} -> {} unpredictable region(s)",
            index + 1,
            first_id,
            second_id,
            regions.len()
        );
        for region in &regions {
            debug!("[Pipeline]   {region}");
        }

        pairs.push(PairReport {
            first: first_id,
            second: second_id,
            first_kind,
            second_kind,
            regions,
        });
    }

    Ok(DetectionReport {
        seed: config.seed,
        num_steps: config.series.num_steps,
        lots: registry,
        pairs,
    })
}
