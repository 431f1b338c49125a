//! Parkwatch Datagen
//!
//! Seeded synthetic data for the parking-availability demo:
//!
//! - **Series**: per-lot availability series (sinusoid plus Gaussian noise)
//! - **Volume**: date-stamped daily volume history and forecast
//! - **Vehicles**: fuel/electric counts per vehicle category
//! - **Lots**: lot registries with coordinates inside a bounding box
//!
//! Every generator owns a `StdRng` seeded through its `with_seed`
//! constructor, so equal seeds and configs reproduce identical data.
//! Randomness never leaks in from ambient sources.

pub mod lots;
pub mod series;
pub mod vehicles;
pub mod volume;

// Re-export commonly used types
pub use lots::{LotBounds, LotGenerator};
pub use series::{SeriesConfig, SeriesGenerator};
pub use vehicles::{VehicleMixConfig, VehicleMixGenerator};
pub use volume::{VolumeConfig, VolumeGenerator};
