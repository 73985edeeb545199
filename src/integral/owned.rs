//! Owned integral tables with a borrowed view conversion.
use super::IntegralView;
use crate::error::TableError;
use serde::{Deserialize, Serialize};

/// Owned `(sum, sumSq, tilted)` triple for a `width × height` frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegralTables {
    width: usize,
    height: usize,
    sum: Vec<f32>,
    sum_sq: Vec<f32>,
    tilted: Vec<f32>,
}

impl IntegralTables {
    pub fn new(
        width: usize,
        height: usize,
        sum: Vec<f32>,
        sum_sq: Vec<f32>,
        tilted: Vec<f32>,
    ) -> Result<Self, TableError> {
        IntegralView::new(width, height, &sum, &sum_sq, &tilted)?;
        Ok(Self {
            width,
            height,
            sum,
            sum_sq,
            tilted,
        })
    }

    /// Frame width in pixels (unpadded).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels (unpadded).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only view, re-checking table lengths.
    ///
    /// Deserialised tables bypass [`IntegralTables::new`], so the check is
    /// repeated here.
    pub fn as_view(&self) -> Result<IntegralView<'_>, TableError> {
        IntegralView::new(
            self.width,
            self.height,
            &self.sum,
            &self.sum_sq,
            &self.tilted,
        )
    }
}
