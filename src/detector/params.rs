//! Parameter types configuring a single-scale scan.
//!
//! Defaults: a 2 px border and a step of
//! 5 % of the scale, so large hypotheses are sampled more sparsely than small
//! ones.

use crate::error::ScanError;
use crate::roi::Category;
use serde::Deserialize;

/// Knobs for [`ScaleScanner`](super::ScaleScanner).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScanParams {
    /// Margin (pixels) kept between the window and the frame edge on top of
    /// the window half-size. Also keeps every integral lookup inside the
    /// padded tables.
    pub border: f64,
    /// Step between window centres as a fraction of the scale.
    pub step_fraction: f64,
    /// Label attached to every region produced by the scan.
    pub category: Category,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            border: 2.0,
            step_fraction: 0.05,
            category: Category::Face,
        }
    }
}

impl ScanParams {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Distance between consecutive window centres at `scale`.
    #[inline]
    pub fn step(&self, scale: f64) -> f64 {
        scale * self.step_fraction
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if !(self.step_fraction > 0.0 && self.step_fraction.is_finite()) {
            return Err(ScanError::InvalidParams("step_fraction must be positive"));
        }
        if !(self.border >= 0.0 && self.border.is_finite()) {
            return Err(ScanError::InvalidParams("border must be non-negative"));
        }
        Ok(())
    }
}
