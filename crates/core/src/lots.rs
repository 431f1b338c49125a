use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a parking lot.
///
/// Wraps the external lot number from the reference data set (e.g. 935),
/// not a generated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LotId(u32);

impl LotId {
    /// Create a lot identifier from its external number
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The underlying lot number
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for LotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lot {}", self.0)
    }
}

/// Category of facility a lot serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotKind {
    School,
    Park,
    Residence,
    Mall,
}

impl fmt::Display for LotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LotKind::School => "School",
            LotKind::Park => "Park",
            LotKind::Residence => "Residence",
            LotKind::Mall => "Mall",
        };
        write!(f, "{name}")
    }
}

/// WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A parking facility with its category and map location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    /// External lot number
    pub id: LotId,
    /// Facility category
    pub kind: LotKind,
    /// Map location
    pub location: GeoPoint,
}

impl ParkingLot {
    pub fn new(id: impl Into<LotId>, kind: LotKind, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            kind,
            location,
        }
    }
}
