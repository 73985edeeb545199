//! Summed-area tables for one frame.
//!
//! The three tables cover a padded frame of `(width + 2) × (height + 2)`
//! cells stored row-major with `stride = width + 2`:
//! - `sum`: cumulative pixel intensity,
//! - `sum_sq`: cumulative squared intensity,
//! - `tilted`: cumulative sum along the 45° rotated integral.
//!
//! Construction from pixels happens upstream; this crate only reads them.

mod owned;

pub use owned::IntegralTables;

use crate::error::TableError;

/// Borrowed view over the three padded integral tables.
#[derive(Clone, Copy, Debug)]
pub struct IntegralView<'a> {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub sum: &'a [f32],
    pub sum_sq: &'a [f32],
    pub tilted: &'a [f32],
}

impl<'a> IntegralView<'a> {
    /// Wrap the tables of a `width × height` frame, checking their lengths.
    pub fn new(
        width: usize,
        height: usize,
        sum: &'a [f32],
        sum_sq: &'a [f32],
        tilted: &'a [f32],
    ) -> Result<Self, TableError> {
        if width == 0 || height == 0 {
            return Err(TableError::InvalidDimensions { width, height });
        }
        let expected = padded_len(width, height);
        for (table, data) in [("sum", sum), ("sumSq", sum_sq), ("tilted", tilted)] {
            if data.len() != expected {
                return Err(TableError::SizeMismatch {
                    table,
                    expected,
                    actual: data.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            stride: width + 2,
            sum,
            sum_sq,
            tilted,
        })
    }

    /// Linear index of padded cell `(x, y)`.
    #[inline]
    pub fn idx(&self, x: i64, y: i64) -> usize {
        debug_assert!(
            x >= 0 && y >= 0 && (x as usize) < self.stride && (y as usize) < self.height + 2,
            "integral lookup ({x}, {y}) outside padded {}x{} frame",
            self.stride,
            self.height + 2
        );
        (x + y * self.stride as i64) as usize
    }
}

/// Number of cells in each padded table.
#[inline]
pub fn padded_len(width: usize, height: usize) -> usize {
    (width + 2) * (height + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_wrong_table_length() {
        let good = vec![0.0f32; padded_len(4, 3)];
        let short = vec![0.0f32; padded_len(4, 3) - 1];
        let err = IntegralView::new(4, 3, &good, &good, &short).unwrap_err();
        assert_eq!(
            err,
            TableError::SizeMismatch {
                table: "tilted",
                expected: 30,
                actual: 29
            }
        );
    }

    #[test]
    fn index_uses_padded_stride() {
        let t = vec![0.0f32; padded_len(4, 3)];
        let view = IntegralView::new(4, 3, &t, &t, &t).expect("valid view");
        assert_eq!(view.stride, 6);
        assert_eq!(view.idx(2, 3), 2 + 3 * 6);
    }

    #[test]
    fn zero_sized_frame_is_rejected() {
        let t = vec![0.0f32; padded_len(0, 3)];
        assert!(matches!(
            IntegralView::new(0, 3, &t, &t, &t),
            Err(TableError::InvalidDimensions { .. })
        ));
    }
}
