//! Lot registry generation
//!
//! Places lots at uniform random coordinates inside a bounding box. The
//! default box covers the Singapore demo area.

use parkwatch_core::{GeoPoint, LotKind, ParkingLot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounding box lots are placed in
#[derive(Debug, Clone)]
pub struct LotBounds {
    pub lat_range: (f64, f64),
    pub lon_range: (f64, f64),
}

impl Default for LotBounds {
    fn default() -> Self {
        Self {
            lat_range: (1.25, 1.4),
            lon_range: (103.7, 104.0),
        }
    }
}

/// Generates lot registries from a seeded RNG
pub struct LotGenerator {
    bounds: LotBounds,
    rng: StdRng,
}

impl LotGenerator {
    /// Create a generator with a specific seed for reproducible registries
    pub fn with_seed(bounds: LotBounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a registry for the given `(lot number, kind)` specs, placing
    /// each lot inside the bounding box
    pub fn generate(&mut self, specs: &[(u32, LotKind)]) -> Vec<ParkingLot> {
        let (lat_lo, lat_hi) = self.bounds.lat_range;
        let (lon_lo, lon_hi) = self.bounds.lon_range;
        specs
            .iter()
            .map(|&(id, kind)| {
                let location = GeoPoint::new(
                    self.rng.gen_range(lat_lo..lat_hi),
                    self.rng.gen_range(lon_lo..lon_hi),
                );
                ParkingLot::new(id, kind, location)
            })
            .collect()
    }
}
