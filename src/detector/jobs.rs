//! Job boundary: one self-contained scan per scale.
//!
//! A [`ScaleJob`] carries everything a scan needs (scale, cascade, tables)
//! and produces a self-contained [`ScanResult`]. Jobs share the cascade and
//! tables read-only and never see each other's regions, so [`run_scales`]
//! can fan them out on the rayon pool without locking. Cross-scale merging
//! is left to the caller.
use super::params::ScanParams;
use super::scanner::{ScaleScanner, ScanResult};
use crate::cascade::Cascade;
use crate::error::{ScanError, TableError};
use crate::integral::IntegralView;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One scale of one frame, borrowing the shared read-only inputs.
#[derive(Clone, Copy, Debug)]
pub struct ScaleJob<'a> {
    pub scale: f64,
    pub cascade: &'a Cascade,
    pub tables: IntegralView<'a>,
}

impl<'a> ScaleJob<'a> {
    pub fn new(scale: f64, cascade: &'a Cascade, tables: IntegralView<'a>) -> Self {
        Self {
            scale,
            cascade,
            tables,
        }
    }

    /// Validate the job and scan it.
    pub fn run(&self, params: &ScanParams) -> Result<ScanResult, ScanError> {
        params.validate()?;
        check_scale(self.scale)?;
        self.cascade.validate()?;
        Ok(ScaleScanner::new(params.clone()).scan_with_diagnostics(
            self.cascade,
            &self.tables,
            self.scale,
        ))
    }
}

fn check_scale(scale: f64) -> Result<(), ScanError> {
    if scale > 0.0 && scale.is_finite() {
        Ok(())
    } else {
        warn!("rejecting scale job with scale={scale}");
        Err(ScanError::InvalidScale(scale))
    }
}

/// Scan every scale in parallel, returning results in the order of `scales`.
///
/// The cascade, parameters and every scale are validated up front; nothing
/// is scanned if any of them is invalid.
pub fn run_scales(
    cascade: &Cascade,
    tables: IntegralView<'_>,
    scales: &[f64],
    params: &ScanParams,
) -> Result<Vec<ScanResult>, ScanError> {
    params.validate()?;
    cascade.validate()?;
    for &scale in scales {
        check_scale(scale)?;
    }
    debug!(
        "run_scales: {} scales over {}x{} frame",
        scales.len(),
        tables.width,
        tables.height
    );
    let scanner = ScaleScanner::new(params.clone());
    Ok(scales
        .par_iter()
        .map(|&scale| scanner.scan_with_diagnostics(cascade, &tables, scale))
        .collect())
}

/// Owned job description in the worker message layout:
/// `{ scale, frameWidth, frameHeight, cascade, satData: [sum, sumSq, tilted] }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub scale: f64,
    pub frame_width: usize,
    pub frame_height: usize,
    pub cascade: Cascade,
    pub sat_data: [Vec<f32>; 3],
}

impl JobRequest {
    /// Borrow the integral tables, checking their lengths.
    pub fn tables(&self) -> Result<IntegralView<'_>, TableError> {
        let [sum, sum_sq, tilted] = &self.sat_data;
        IntegralView::new(self.frame_width, self.frame_height, sum, sum_sq, tilted)
    }

    pub fn job(&self) -> Result<ScaleJob<'_>, TableError> {
        Ok(ScaleJob::new(self.scale, &self.cascade, self.tables()?))
    }

    /// Run the request as a single job.
    pub fn run(&self, params: &ScanParams) -> Result<ScanResult, ScanError> {
        self.job()?.run(params)
    }
}
