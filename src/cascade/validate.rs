use super::Cascade;
use crate::error::CascadeError;

impl Cascade {
    /// Check the structural preconditions the evaluator relies on.
    ///
    /// An empty stage list is accepted: every window then passes vacuously.
    pub fn validate(&self) -> Result<(), CascadeError> {
        for (si, stage) in self.stages.iter().enumerate() {
            if stage.weak_classifiers.is_empty() {
                return Err(CascadeError::EmptyStage { stage: si });
            }
            if !stage.stage_threshold.is_finite() {
                return Err(CascadeError::NonFinite {
                    stage: si,
                    what: "stage threshold",
                });
            }
            for (ci, wc) in stage.weak_classifiers.iter().enumerate() {
                if wc.internal_nodes.len() < 4 {
                    return Err(CascadeError::MissingThreshold {
                        stage: si,
                        classifier: ci,
                        len: wc.internal_nodes.len(),
                    });
                }
                if wc.leaf_values.len() < 2 {
                    return Err(CascadeError::MissingLeafValues {
                        stage: si,
                        classifier: ci,
                        len: wc.leaf_values.len(),
                    });
                }
                if !wc.threshold().is_finite() {
                    return Err(CascadeError::NonFinite {
                        stage: si,
                        what: "weak classifier threshold",
                    });
                }
                if !wc.below().is_finite() || !wc.above().is_finite() {
                    return Err(CascadeError::NonFinite {
                        stage: si,
                        what: "leaf value",
                    });
                }
            }
        }
        Ok(())
    }
}
