//! Per-phase wall-clock accounting for a single-scale scan.
use serde::Serialize;
use std::time::{Duration, Instant};

/// Phases of a scan timed separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    /// Variance gate plus stage evaluation of one window.
    Classify,
    /// Folding one detection into the region list.
    Merge,
}

/// Wall-clock split of one scan, in milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTimings {
    pub total_ms: f64,
    pub classify_ms: f64,
    pub merge_ms: f64,
}

impl ScanTimings {
    /// Time outside both phases: grid stepping and counter bookkeeping.
    pub fn overhead_ms(&self) -> f64 {
        (self.total_ms - self.classify_ms - self.merge_ms).max(0.0)
    }
}

/// Accumulates phase durations over the windows of one scan.
#[derive(Debug)]
pub struct PhaseClock {
    started: Instant,
    classify: Duration,
    merge: Duration,
}

impl PhaseClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            classify: Duration::ZERO,
            merge: Duration::ZERO,
        }
    }

    /// Run `f`, charging its duration to `phase`.
    #[inline]
    pub fn time<T>(&mut self, phase: ScanPhase, f: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = f();
        let dt = t0.elapsed();
        match phase {
            ScanPhase::Classify => self.classify += dt,
            ScanPhase::Merge => self.merge += dt,
        }
        out
    }

    pub fn finish(self) -> ScanTimings {
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        ScanTimings {
            total_ms: ms(self.started.elapsed()),
            classify_ms: ms(self.classify),
            merge_ms: ms(self.merge),
        }
    }
}
