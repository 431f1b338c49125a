//! Parkwatch Core Domain
//!
//! Pure domain types for the parkwatch toolkit.
//! This crate contains no randomness, no I/O, and is 100% unit testable.

pub mod lots;
pub mod pairing;
pub mod vehicles;
pub mod volume;

// Re-export commonly used types at crate root
pub use lots::{GeoPoint, LotId, LotKind, ParkingLot};
pub use pairing::{PairingError, split_into_pairs};
pub use vehicles::{VehicleKind, VehicleMix};
pub use volume::{VolumeKind, VolumePoint};
