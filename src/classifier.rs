//! Cascade evaluation for a single candidate window.
//!
//! Each window is normalised by the standard deviation of its base region
//! (a `2·scale` square around the anchor), then pushed through the stages in
//! order. The first stage whose vote sum falls below its threshold rejects
//! the window and no later stage is touched. Most background windows leave
//! after one or two stages, which is what keeps a full scan cheap.
//!
//! Windows whose base region is nearly uniform (variance below
//! [`MIN_VARIANCE`]) are reported as [`WindowOutcome::Degenerate`] without
//! evaluating any stage.
use crate::cascade::Cascade;
use crate::features::{box_sum, evaluate_feature, trunc};
use crate::integral::IntegralView;
use serde::Serialize;

/// Wire code for a window that passed every stage.
pub const DETECTED_CODE: i32 = 1000;
/// Wire code for a window skipped by the variance gate.
pub const DEGENERATE_CODE: i32 = -1;
/// Variance below which a base region is considered flat.
pub const MIN_VARIANCE: f64 = 1024.0;
/// Floor applied to the variance before taking the normalising sqrt.
pub const MIN_SD_VARIANCE: f64 = 10.0;

/// Result of classifying one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum WindowOutcome {
    Degenerate,
    Rejected { stage: usize },
    Detected,
}

impl WindowOutcome {
    /// Integer code: `-1` degenerate, stage index when rejected, `1000` detected.
    pub fn code(self) -> i32 {
        match self {
            Self::Degenerate => DEGENERATE_CODE,
            Self::Rejected { stage } => stage as i32,
            Self::Detected => DETECTED_CODE,
        }
    }

    /// Inverse of [`WindowOutcome::code`]. Codes above 999 mean detected.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            DEGENERATE_CODE => Some(Self::Degenerate),
            c if c > 999 => Some(Self::Detected),
            c if c >= 0 => Some(Self::Rejected { stage: c as usize }),
            _ => None,
        }
    }

    #[inline]
    pub fn is_detected(self) -> bool {
        matches!(self, Self::Detected)
    }
}

/// Intensity statistics of the base region around a window anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseRegion {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
    /// `1 / area` of the truncated box.
    pub recip_area: f64,
    /// Mean intensity.
    pub mean: f64,
    /// Mean squared intensity.
    pub mean_sq: f64,
}

impl BaseRegion {
    pub fn new(view: &IntegralView<'_>, mx: f64, my: f64, scale: f64) -> Self {
        let x0 = trunc(mx + 1.0 - scale);
        let y0 = trunc(my + 2.0 - scale);
        let x1 = trunc(mx + 1.0 + scale);
        let y1 = trunc(my + 2.0 + scale);
        let recip_area = 1.0 / ((x1 - x0) * (y1 - y0)) as f64;
        let mean = recip_area * box_sum(view.sum, view, x0, y0, x1, y1);
        let mean_sq = recip_area * box_sum(view.sum_sq, view, x0, y0, x1, y1);
        Self {
            x0,
            y0,
            x1,
            y1,
            recip_area,
            mean,
            mean_sq,
        }
    }

    /// Population variance `E[x²] − E[x]²`.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.mean_sq - self.mean * self.mean
    }
}

/// Work counters for one window evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTrace {
    pub stages_evaluated: usize,
    pub features_evaluated: usize,
}

/// Classify the window anchored at `(mx, my)`.
#[inline]
pub fn classify_window(
    cascade: &Cascade,
    view: &IntegralView<'_>,
    mx: f64,
    my: f64,
    scale: f64,
) -> WindowOutcome {
    let mut trace = WindowTrace::default();
    classify_window_traced(cascade, view, mx, my, scale, &mut trace)
}

/// [`classify_window`] that also counts the stages and features it touched.
pub fn classify_window_traced(
    cascade: &Cascade,
    view: &IntegralView<'_>,
    mx: f64,
    my: f64,
    scale: f64,
    trace: &mut WindowTrace,
) -> WindowOutcome {
    let base = BaseRegion::new(view, mx, my, scale);
    let determinant = base.variance();
    if determinant < MIN_VARIANCE {
        return WindowOutcome::Degenerate;
    }
    let sd = determinant.max(MIN_SD_VARIANCE).sqrt();

    for (i, stage) in cascade.stages.iter().enumerate() {
        trace.stages_evaluated += 1;
        let mut stage_sum = 0.0;
        for wc in &stage.weak_classifiers {
            trace.features_evaluated += 1;
            let ev = evaluate_feature(&wc.feature, view, mx, my, scale);
            stage_sum += if ev * base.recip_area < wc.threshold() * sd {
                wc.below()
            } else {
                wc.above()
            };
        }
        if stage_sum < stage.stage_threshold {
            return WindowOutcome::Rejected { stage: i };
        }
    }
    WindowOutcome::Detected
}
