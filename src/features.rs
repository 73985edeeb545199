//! Constant-time rectangle sums over the integral tables.
//!
//! A feature rectangle is placed relative to the window anchor `(mx, my)`
//! and stretched by `scale`. Corner coordinates are truncated toward zero
//! before lookup; `floor` or rounding would sample different cells for
//! negative or fractional intermediates and shift every feature response
//! relative to the cascade's training data.
//!
//! Upright rectangles read the `sum` table at
//! `(mx + 1 + x·s, my + 2 + y·s)`. Tilted rectangles read the `tilted` table
//! at the four corners of the 45° parallelogram spanned from `(x0, y0)`,
//! offset by `(mx + 1, my + 1)`.
use crate::cascade::{HaarFeature, HaarRect};
use crate::integral::IntegralView;

/// Truncate toward zero, matching an integer cast.
#[inline]
pub fn trunc(v: f64) -> i64 {
    v as i64
}

/// Four-corner sum over an axis-aligned box of table cells:
/// `T[x1,y1] − T[x0,y1] − T[x1,y0] + T[x0,y0]`.
#[inline]
pub fn box_sum(
    table: &[f32],
    view: &IntegralView<'_>,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
) -> f64 {
    f64::from(table[view.idx(x1, y1)]) - f64::from(table[view.idx(x0, y1)])
        - f64::from(table[view.idx(x1, y0)])
        + f64::from(table[view.idx(x0, y0)])
}

/// Truncated corner cells of an upright rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UprightCorners {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl UprightCorners {
    #[inline]
    pub fn new(r: &HaarRect, mx: f64, my: f64, scale: f64) -> Self {
        Self {
            x0: trunc(mx + 1.0 + r.x0 * scale),
            y0: trunc(my + 2.0 + r.y0 * scale),
            x1: trunc(mx + 1.0 + r.x1 * scale),
            y1: trunc(my + 2.0 + r.y1 * scale),
        }
    }

    /// Cells in lookup order.
    pub fn cells(&self) -> [(i64, i64); 4] {
        [
            (self.x0, self.y0),
            (self.x0, self.y1),
            (self.x1, self.y0),
            (self.x1, self.y1),
        ]
    }

    #[inline]
    pub fn sum(&self, view: &IntegralView<'_>) -> f64 {
        let t = view.sum;
        let mut value = 0.0;
        value += f64::from(t[view.idx(self.x0, self.y0)]);
        value -= f64::from(t[view.idx(self.x0, self.y1)]);
        value -= f64::from(t[view.idx(self.x1, self.y0)]);
        value += f64::from(t[view.idx(self.x1, self.y1)]);
        value
    }
}

/// Truncated corner cells of a 45° rotated rectangle.
///
/// With `rw = x1 − x0` and `rh = y1 − y0` the corners in feature units are
/// `p1 = (x0, y0)`, `p2 = (x0 + rw, y0 + rw)`, `p3 = (x0 − rh, y0 + rh)` and
/// `p4 = (x0 + rw − rh, y0 + rw + rh)`. `p2.y` uses `rw`, not `rh`; existing
/// cascades were tuned against exactly this geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiltedCorners {
    pub p1: (i64, i64),
    pub p2: (i64, i64),
    pub p3: (i64, i64),
    pub p4: (i64, i64),
}

impl TiltedCorners {
    #[inline]
    pub fn new(r: &HaarRect, mx: f64, my: f64, scale: f64) -> Self {
        let rw = r.x1 - r.x0;
        let rh = r.y1 - r.y0;
        let at = |px: f64, py: f64| (trunc(mx + 1.0 + scale * px), trunc(my + 1.0 + scale * py));
        Self {
            p1: at(r.x0, r.y0),
            p2: at(r.x0 + rw, r.y0 + rw),
            p3: at(r.x0 - rh, r.y0 + rh),
            p4: at(r.x0 + rw - rh, r.y0 + rw + rh),
        }
    }

    /// Cells in lookup order.
    pub fn cells(&self) -> [(i64, i64); 4] {
        [self.p4, self.p3, self.p2, self.p1]
    }

    #[inline]
    pub fn sum(&self, view: &IntegralView<'_>) -> f64 {
        let t = view.tilted;
        let mut value = 0.0;
        value += f64::from(t[view.idx(self.p4.0, self.p4.1)]);
        value -= f64::from(t[view.idx(self.p3.0, self.p3.1)]);
        value -= f64::from(t[view.idx(self.p2.0, self.p2.1)]);
        value += f64::from(t[view.idx(self.p1.0, self.p1.1)]);
        value
    }
}

/// Unweighted sum of one rectangle at window `(mx, my)`.
#[inline]
pub fn rect_sum(
    r: &HaarRect,
    tilted: bool,
    view: &IntegralView<'_>,
    mx: f64,
    my: f64,
    scale: f64,
) -> f64 {
    if tilted {
        TiltedCorners::new(r, mx, my, scale).sum(view)
    } else {
        UprightCorners::new(r, mx, my, scale).sum(view)
    }
}

/// Raw feature response: Σ rect sum · weight.
#[inline]
pub fn evaluate_feature(
    feature: &HaarFeature,
    view: &IntegralView<'_>,
    mx: f64,
    my: f64,
    scale: f64,
) -> f64 {
    let mut result = 0.0;
    for r in &feature.rects {
        result += rect_sum(r, feature.tilted, view, mx, my, scale) * r.weight;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integral::padded_len;

    /// Table whose cell value equals its linear index, so each lookup is
    /// recoverable from the result.
    fn index_table(w: usize, h: usize) -> Vec<f32> {
        (0..padded_len(w, h)).map(|i| i as f32).collect()
    }

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(trunc(2.9), 2);
        assert_eq!(trunc(-2.9), -2);
        assert_eq!(trunc(-0.5), 0);
        assert_ne!(trunc(-2.5), (-2.5f64).floor() as i64);
    }

    #[test]
    fn upright_corners_offset_and_scale() {
        let r = HaarRect::new(-1.0, -0.5, 1.0, 0.5, 1.0);
        let c = UprightCorners::new(&r, 10.3, 8.0, 3.0);
        // mx + 1 + x·s, my + 2 + y·s, truncated
        assert_eq!(c, UprightCorners { x0: 8, y0: 8, x1: 14, y1: 11 });
    }

    #[test]
    fn upright_sum_matches_area_on_unit_image() {
        // 6×6 frame of ones: T[x, y] = x·y over the padded grid.
        let (w, h) = (6usize, 6usize);
        let stride = w + 2;
        let mut sum = vec![0.0f32; padded_len(w, h)];
        for y in 0..h + 2 {
            for x in 0..stride {
                sum[x + y * stride] = (x * y) as f32;
            }
        }
        let zeros = vec![0.0f32; padded_len(w, h)];
        let view = IntegralView::new(w, h, &sum, &zeros, &zeros).expect("valid view");
        let r = HaarRect::new(0.0, 0.0, 2.0, 1.0, 1.0);
        let c = UprightCorners::new(&r, 1.0, 1.0, 2.0);
        assert_eq!(c, UprightCorners { x0: 2, y0: 3, x1: 6, y1: 5 });
        assert_eq!(c.sum(&view), 8.0);
        let weighted = HaarFeature::upright(vec![HaarRect { weight: -0.5, ..r }]);
        assert_eq!(evaluate_feature(&weighted, &view, 1.0, 1.0, 2.0), -4.0);
    }

    #[test]
    fn tilted_corners_follow_rotated_parallelogram() {
        let r = HaarRect::new(3.0, 1.0, 5.0, 2.0, 1.0);
        let c = TiltedCorners::new(&r, 0.0, 0.0, 1.0);
        // rw = 2, rh = 1
        assert_eq!(c.p1, (4, 2));
        assert_eq!(c.p2, (6, 4));
        assert_eq!(c.p3, (3, 3));
        assert_eq!(c.p4, (5, 5));
    }

    #[test]
    fn tilted_sum_reads_tilted_table_with_signs() {
        let (w, h) = (10usize, 10usize);
        let tilted = index_table(w, h);
        let zeros = vec![0.0f32; padded_len(w, h)];
        let view = IntegralView::new(w, h, &zeros, &zeros, &tilted).expect("valid view");
        let r = HaarRect::new(3.0, 1.0, 5.0, 2.0, 1.0);
        let c = TiltedCorners::new(&r, 0.0, 0.0, 1.0);
        let s = view.stride as f64;
        let at = |p: (i64, i64)| p.0 as f64 + p.1 as f64 * s;
        let expected = at(c.p4) - at(c.p3) - at(c.p2) + at(c.p1);
        assert_eq!(c.sum(&view), expected);
        // The upright table is all zeros, so a tilted feature must not touch it.
        assert_eq!(rect_sum(&r, false, &view, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(rect_sum(&r, true, &view, 0.0, 0.0, 1.0), expected);
    }

    #[test]
    fn tilted_and_upright_paths_sample_different_cells() {
        let rects = [
            HaarRect::new(-1.0, -1.0, 1.0, 1.0, 1.0),
            HaarRect::new(0.0, 0.0, 0.5, 0.25, 1.0),
            HaarRect::new(-0.75, 0.1, 0.2, 0.6, -2.0),
        ];
        for r in &rects {
            let up = UprightCorners::new(r, 12.4, 9.6, 4.0).cells();
            let tl = TiltedCorners::new(r, 12.4, 9.6, 4.0).cells();
            let mut up_sorted = up.to_vec();
            let mut tl_sorted = tl.to_vec();
            up_sorted.sort_unstable();
            tl_sorted.sort_unstable();
            assert_ne!(up_sorted, tl_sorted, "corner sets coincide for {:?}", r);
        }
    }
}
