//! Read-only description of a boosted Haar cascade.
//!
//! The model is a strict ownership tree
//! `Cascade → Stage → WeakClassifier → HaarFeature → HaarRect` of plain
//! values. Nothing in the crate mutates it once built, so a single instance
//! can be shared by reference across any number of concurrent scans.
//!
//! Field names serialise in camelCase so the JSON exported for the browser
//! worker (`stageThreshold`, `weakClassifiers`, `internalNodes`, ...) loads
//! directly.

mod validate;

use serde::{Deserialize, Serialize};

/// One weighted summand of a feature, in the feature's local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HaarRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    #[serde(default = "unit_weight")]
    pub weight: f64,
}

fn unit_weight() -> f64 {
    1.0
}

impl HaarRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64, weight: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            weight,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Weighted rectangles summed over either the upright or the 45° table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HaarFeature {
    pub rects: Vec<HaarRect>,
    #[serde(default)]
    pub tilted: bool,
}

impl HaarFeature {
    pub fn upright(rects: Vec<HaarRect>) -> Self {
        Self {
            rects,
            tilted: false,
        }
    }

    pub fn tilted(rects: Vec<HaarRect>) -> Self {
        Self {
            rects,
            tilted: true,
        }
    }
}

/// Single-feature decision stump.
///
/// `internal_nodes[3]` holds the threshold (in units of the window standard
/// deviation). `leaf_values[0]` is voted below the threshold,
/// `leaf_values[1]` at or above it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakClassifier {
    pub internal_nodes: Vec<f64>,
    pub leaf_values: Vec<f64>,
    pub feature: HaarFeature,
}

impl WeakClassifier {
    /// Build a stump with the node layout used by OpenCV-derived cascades
    /// (`[left, right, feature index, threshold]`).
    pub fn stump(threshold: f64, below: f64, above: f64, feature: HaarFeature) -> Self {
        Self {
            internal_nodes: vec![0.0, -1.0, 0.0, threshold],
            leaf_values: vec![below, above],
            feature,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.internal_nodes[3]
    }

    #[inline]
    pub fn below(&self) -> f64 {
        self.leaf_values[0]
    }

    #[inline]
    pub fn above(&self) -> f64 {
        self.leaf_values[1]
    }
}

/// Boosted stage: weak votes are summed and compared to `stage_threshold`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub stage_threshold: f64,
    pub weak_classifiers: Vec<WeakClassifier>,
}

impl Stage {
    pub fn new(stage_threshold: f64, weak_classifiers: Vec<WeakClassifier>) -> Self {
        Self {
            stage_threshold,
            weak_classifiers,
        }
    }
}

/// Ordered stages plus an optional feature catalogue.
///
/// `features` / `features_tilted` are kept for round-tripping exported
/// cascades; evaluation only looks at each weak classifier's own feature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cascade {
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub features: Vec<HaarFeature>,
    #[serde(default)]
    pub features_tilted: Vec<HaarFeature>,
}

impl Cascade {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages,
            features: Vec::new(),
            features_tilted: Vec::new(),
        }
    }

    pub fn weak_classifier_count(&self) -> usize {
        self.stages.iter().map(|s| s.weak_classifiers.len()).sum()
    }

    pub fn tilted_feature_count(&self) -> usize {
        self.stages
            .iter()
            .flat_map(|s| s.weak_classifiers.iter())
            .filter(|wc| wc.feature.tilted)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_worker_json_layout() {
        let json = r#"{
            "stages": [{
                "stageThreshold": -0.5,
                "weakClassifiers": [{
                    "internalNodes": [0, -1, 0, 0.004],
                    "leafValues": [-0.8, 0.6],
                    "feature": {
                        "rects": [
                            {"x0": -1, "y0": -1, "x1": 1, "y1": 0, "weight": -1},
                            {"x0": -1, "y0": 0, "x1": 1, "y1": 1}
                        ],
                        "tilted": false
                    }
                }]
            }],
            "featuresTilted": []
        }"#;
        let cascade: Cascade = serde_json::from_str(json).expect("valid cascade json");
        assert_eq!(cascade.stages.len(), 1);
        let wc = &cascade.stages[0].weak_classifiers[0];
        assert!((wc.threshold() - 0.004).abs() < 1e-12);
        assert_eq!(wc.below(), -0.8);
        assert_eq!(wc.above(), 0.6);
        assert_eq!(wc.feature.rects[1].weight, 1.0, "weight defaults to 1");
        assert!(cascade.features.is_empty());
    }

    #[test]
    fn counts_tilted_features() {
        let rect = HaarRect::new(0.0, 0.0, 1.0, 1.0, 1.0);
        let cascade = Cascade::new(vec![Stage::new(
            0.0,
            vec![
                WeakClassifier::stump(0.0, 0.0, 1.0, HaarFeature::upright(vec![rect])),
                WeakClassifier::stump(0.0, 0.0, 1.0, HaarFeature::tilted(vec![rect])),
            ],
        )]);
        assert_eq!(cascade.weak_classifier_count(), 2);
        assert_eq!(cascade.tilted_feature_count(), 1);
    }
}
