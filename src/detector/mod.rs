//! Single-scale cascade scanning over one frame's integral tables.
//!
//! Overview
//! - [`ScanGrid`] enumerates window centres for one scale, x-major, with a
//!   border margin that keeps every table lookup in range.
//! - [`ScaleScanner`] classifies each window against the cascade and folds
//!   positive windows into [`RoiRegion`](crate::roi::RoiRegion)s with a
//!   first-overlap-wins running-mean merge.
//! - [`ScaleJob`] / [`run_scales`] form the job boundary: validated,
//!   self-contained scans, one per scale, optionally in parallel.
//!
//! Modules
//! - [`params`] – scan configuration.
//! - `scanner` – grid iteration and incremental merging.
//! - `jobs` – validation and parallel dispatch of scale jobs.

mod jobs;
pub mod params;
mod scanner;

pub use jobs::{run_scales, JobRequest, ScaleJob};
pub use params::ScanParams;
pub use scanner::{merge_detection, ScaleScanner, ScanGrid, ScanResult};
