//! Parkwatch Runner
//!
//! Wires the demo together:
//!
//! - **Bootstrap**: the demo lot registry and pipeline configuration
//! - **Pipeline**: series generation, fixed-order pairing, and combined
//!   unpredictability detection per pair
//! - **Snapshot**: the volume history and vehicle mix behind a selected
//!   lot's detail view
//!
//! ```text
//!   demo_lots ──► SeriesGenerator ──► split_into_pairs ──► Detector
//!                                                             │
//!                                          DetectionReport ◄──┘
//! ```
//!
//! Reports are plain serde types; rendering them is a caller concern.

pub mod bootstrap;
pub mod pipeline;
pub mod snapshot;

// Re-export main types
pub use bootstrap::{PipelineConfig, demo_lots};
pub use pipeline::{DetectionReport, PairReport, PipelineError, run};
pub use snapshot::{LotSnapshot, SnapshotConfig, lot_snapshot};
