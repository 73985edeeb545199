#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod cascade;
pub mod classifier;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod features;
pub mod integral;
pub mod roi;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::cascade::{Cascade, HaarFeature, HaarRect, Stage, WeakClassifier};
pub use crate::classifier::{classify_window, WindowOutcome};
pub use crate::detector::{run_scales, ScaleJob, ScaleScanner, ScanParams, ScanResult};
pub use crate::error::{CascadeError, ScanError, TableError};
pub use crate::integral::{IntegralTables, IntegralView};
pub use crate::roi::{Category, RegionState, RoiRegion};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use cascade_detector::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (w, h) = (64usize, 48usize);
/// let len = (w + 2) * (h + 2);
/// let (sum, sum_sq, tilted) = (vec![0f32; len], vec![0f32; len], vec![0f32; len]);
/// let view = IntegralView::new(w, h, &sum, &sum_sq, &tilted)?;
///
/// let cascade = Cascade::default();
/// let regions = ScaleScanner::new(ScanParams::default()).scan(&cascade, &view, 6.0);
/// println!("regions={}", regions.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{Cascade, IntegralView, RoiRegion, ScaleScanner, ScanParams};
}
