use super::ScanTimings;
use crate::classifier::{WindowOutcome, WindowTrace};
use serde::Serialize;

/// Parameters of the scan a report describes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanInput {
    pub frame_width: usize,
    pub frame_height: usize,
    pub scale: f64,
    pub step: f64,
    pub stages: usize,
}

/// Outcome counters for one single-scale scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub input: ScanInput,
    /// Window positions visited.
    pub windows: usize,
    /// Windows skipped by the variance gate.
    pub degenerate: usize,
    /// Windows that passed every stage.
    pub detections: usize,
    /// Detections absorbed into an existing region.
    pub merges: usize,
    /// Regions in the final list.
    pub regions: usize,
    /// `rejections_by_stage[i]` counts windows rejected by stage `i`.
    pub rejections_by_stage: Vec<usize>,
    /// Total stages evaluated across all windows.
    pub stages_evaluated: usize,
    /// Total weak classifiers evaluated across all windows.
    pub features_evaluated: usize,
    pub timings: ScanTimings,
}

impl ScanReport {
    pub fn new(input: ScanInput) -> Self {
        let stages = input.stages;
        Self {
            input,
            windows: 0,
            degenerate: 0,
            detections: 0,
            merges: 0,
            regions: 0,
            rejections_by_stage: vec![0; stages],
            stages_evaluated: 0,
            features_evaluated: 0,
            timings: ScanTimings::default(),
        }
    }

    /// Fold one classified window into the counters.
    pub fn record(&mut self, outcome: WindowOutcome, trace: &WindowTrace) {
        self.windows += 1;
        self.stages_evaluated += trace.stages_evaluated;
        self.features_evaluated += trace.features_evaluated;
        match outcome {
            WindowOutcome::Degenerate => self.degenerate += 1,
            WindowOutcome::Rejected { stage } => {
                if stage >= self.rejections_by_stage.len() {
                    self.rejections_by_stage.resize(stage + 1, 0);
                }
                self.rejections_by_stage[stage] += 1;
            }
            WindowOutcome::Detected => self.detections += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejections_by_stage.iter().sum()
    }

    /// Mean number of weak classifiers evaluated per non-degenerate window.
    pub fn mean_features_per_window(&self) -> f64 {
        let evaluated = self.windows - self.degenerate;
        if evaluated == 0 {
            0.0
        } else {
            self.features_evaluated as f64 / evaluated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(stages: usize) -> ScanInput {
        ScanInput {
            frame_width: 20,
            frame_height: 20,
            scale: 4.0,
            step: 0.2,
            stages,
        }
    }

    #[test]
    fn record_counts_each_outcome() {
        let mut report = ScanReport::new(input(3));
        let t = WindowTrace {
            stages_evaluated: 2,
            features_evaluated: 7,
        };
        report.record(WindowOutcome::Degenerate, &WindowTrace::default());
        report.record(WindowOutcome::Rejected { stage: 1 }, &t);
        report.record(WindowOutcome::Detected, &t);
        assert_eq!(report.windows, 3);
        assert_eq!(report.degenerate, 1);
        assert_eq!(report.detections, 1);
        assert_eq!(report.rejections_by_stage, vec![0, 1, 0]);
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.features_evaluated, 14);
        assert!((report.mean_features_per_window() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn serialises_camel_case() {
        let report = ScanReport::new(input(1));
        let json = serde_json::to_value(&report).expect("serialise report");
        assert!(json.get("rejectionsByStage").is_some());
        assert_eq!(json["input"]["frameWidth"], 20);
    }
}
