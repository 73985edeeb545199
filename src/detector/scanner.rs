//! Single-scale sliding-window scan.
//!
//! Window centres run over `x` (outer) and `y` (inner) starting at
//! `border + scale` and advancing by `scale · step_fraction` while
//! `centre + scale + border` stays strictly below the frame size. The step
//! is accumulated, not recomputed from an index, so the last column can land
//! a hair below the bound and still be visited.
//!
//! Every window that passes the cascade becomes a `2·scale` square. It is
//! merged into the first existing region (in creation order) whose box
//! overlaps it, or appended as a new region when none does. First overlap
//! wins, with no search for the best match.
use super::params::ScanParams;
use crate::cascade::Cascade;
use crate::classifier::{classify_window_traced, WindowTrace};
use crate::diagnostics::{PhaseClock, ScanInput, ScanPhase, ScanReport};
use crate::integral::IntegralView;
use crate::roi::RoiRegion;
use log::{debug, trace};
use serde::Serialize;

/// Window centres visited at one scale, in scan order.
#[derive(Clone, Debug)]
pub struct ScanGrid {
    width: f64,
    height: f64,
    scale: f64,
    border: f64,
    step: f64,
    x: f64,
    y: f64,
}

impl ScanGrid {
    pub fn new(width: usize, height: usize, scale: f64, params: &ScanParams) -> Self {
        let start = params.border + scale;
        let step = params.step(scale);
        // A non-positive step would never terminate; start past the end.
        let x = if step > 0.0 { start } else { f64::INFINITY };
        Self {
            width: width as f64,
            height: height as f64,
            scale,
            border: params.border,
            step,
            x,
            y: start,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    fn x_in_range(&self) -> bool {
        self.x + self.scale + self.border < self.width
    }

    #[inline]
    fn y_in_range(&self) -> bool {
        self.y + self.scale + self.border < self.height
    }
}

impl Iterator for ScanGrid {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.x_in_range() {
            if self.y_in_range() {
                let p = (self.x, self.y);
                self.y += self.step;
                return Some(p);
            }
            self.x += self.step;
            self.y = self.border + self.scale;
        }
        None
    }
}

/// Regions found at one scale plus the scan diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub scale: f64,
    pub regions: Vec<RoiRegion>,
    pub report: ScanReport,
}

/// Merge `candidate` into the first overlapping region, or append it.
///
/// Returns `true` when an existing region absorbed the candidate.
pub fn merge_detection(regions: &mut Vec<RoiRegion>, candidate: RoiRegion) -> bool {
    for region in regions.iter_mut() {
        if region.try_absorb(&candidate) {
            return true;
        }
    }
    regions.push(candidate);
    false
}

/// Scans one scale of one frame. Holds only configuration, so a single
/// scanner can serve concurrent scans.
#[derive(Clone, Debug, Default)]
pub struct ScaleScanner {
    params: ScanParams,
}

impl ScaleScanner {
    pub fn new(params: ScanParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    /// Window centres this scanner visits on `view` at `scale`.
    pub fn grid(&self, view: &IntegralView<'_>, scale: f64) -> ScanGrid {
        ScanGrid::new(view.width, view.height, scale, &self.params)
    }

    /// Scan and return the merged regions in creation order.
    pub fn scan(&self, cascade: &Cascade, view: &IntegralView<'_>, scale: f64) -> Vec<RoiRegion> {
        self.scan_with_diagnostics(cascade, view, scale).regions
    }

    /// Scan and return both the regions and per-outcome counters, with
    /// classification and merge time tracked separately.
    pub fn scan_with_diagnostics(
        &self,
        cascade: &Cascade,
        view: &IntegralView<'_>,
        scale: f64,
    ) -> ScanResult {
        let mut clock = PhaseClock::start();
        let grid = self.grid(view, scale);
        debug!(
            "ScaleScanner::scan start w={} h={} scale={:.3} step={:.4} stages={}",
            view.width,
            view.height,
            scale,
            grid.step(),
            cascade.stages.len()
        );
        let mut report = ScanReport::new(ScanInput {
            frame_width: view.width,
            frame_height: view.height,
            scale,
            step: grid.step(),
            stages: cascade.stages.len(),
        });

        let mut regions: Vec<RoiRegion> = Vec::new();
        for (x, y) in grid {
            let mut window = WindowTrace::default();
            let outcome = clock.time(ScanPhase::Classify, || {
                classify_window_traced(cascade, view, x, y, scale, &mut window)
            });
            report.record(outcome, &window);
            if !outcome.is_detected() {
                continue;
            }
            let candidate = RoiRegion::from_center(self.params.category, x, y, scale);
            let merged = clock.time(ScanPhase::Merge, || {
                merge_detection(&mut regions, candidate)
            });
            if merged {
                report.merges += 1;
                trace!("merged detection at ({x:.2}, {y:.2})");
            } else {
                trace!("new region #{} at ({x:.2}, {y:.2})", regions.len() - 1);
            }
        }

        report.regions = regions.len();
        report.timings = clock.finish();
        debug!(
            "ScaleScanner::scan done scale={:.3} windows={} degenerate={} rejected={} detections={} regions={} ({:.3} ms, classify {:.3} ms, merge {:.3} ms)",
            scale,
            report.windows,
            report.degenerate,
            report.rejected(),
            report.detections,
            report.regions,
            report.timings.total_ms,
            report.timings.classify_ms,
            report.timings.merge_ms
        );
        ScanResult {
            scale,
            regions,
            report,
        }
    }
}
