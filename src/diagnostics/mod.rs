//! Diagnostics data model returned alongside scan results.
//!
//! [`ScanReport`] summarises one single-scale scan: how many windows were
//! visited, how they were disposed of, and where the time went. Reports are
//! serialisable so the demo tool can dump them next to the regions.

pub mod scan;
pub mod timing;

pub use scan::{ScanInput, ScanReport};
pub use timing::{PhaseClock, ScanPhase, ScanTimings};
