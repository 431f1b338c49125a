use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a volume point is observed or projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeKind {
    Historical,
    Forecast,
}

/// One day of parking volume for a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    /// Vehicles parked over the day
    pub volume: u32,
    pub kind: VolumeKind,
}

impl VolumePoint {
    pub fn new(date: NaiveDate, volume: u32, kind: VolumeKind) -> Self {
        Self { date, volume, kind }
    }
}
