//! Regions of interest produced by a scan.
//!
//! A [`RoiRegion`] starts as the exact box of one detected window and absorbs
//! every later overlapping detection by per-axis running mean. The mean
//! weights every merge event equally (not by area). Once a set of boxes has
//! been absorbed the result is their plain mean up to rounding, but arrival
//! order still decides which boxes pass the overlap gate.
use serde::{Deserialize, Serialize};

/// Detection class carried by a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    None,
    Face,
}

/// Frame-boundary adjacency. Not computed here; downstream trackers fill it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionState {
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
    Inside,
    Outside,
    #[default]
    None,
}

/// Auxiliary sensor readings attached to a region by sensor fusion.
/// Carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub value: f64,
    pub value_low_pass: f64,
    pub age: u32,
    pub missing: u32,
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned detection box with a merge counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRegion {
    pub category: Category,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub merge_count: u32,
    #[serde(default)]
    pub state: RegionState,
    #[serde(default)]
    pub sensor: SensorReading,
}

impl Default for RoiRegion {
    fn default() -> Self {
        Self::new(Category::None, 0.0, 0.0, 0.0, 0.0)
    }
}

impl RoiRegion {
    pub fn new(category: Category, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            category,
            x0,
            y0,
            x1,
            y1,
            merge_count: 1,
            state: RegionState::None,
            sensor: SensorReading::default(),
        }
    }

    /// Square box of half-size `half` around `(x, y)`.
    pub fn from_center(category: Category, x: f64, y: f64, half: f64) -> Self {
        Self::new(category, x - half, y - half, x + half, y + half)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    pub fn on_edge(&self) -> bool {
        matches!(
            self.state,
            RegionState::LeftEdge
                | RegionState::RightEdge
                | RegionState::TopEdge
                | RegionState::BottomEdge
        )
    }

    /// True when `other` is absent or narrower.
    pub fn wider(&self, other: Option<&RoiRegion>) -> bool {
        other.map_or(true, |o| self.width() > o.width())
    }

    /// True when `other` is absent or shorter.
    pub fn higher(&self, other: Option<&RoiRegion>) -> bool {
        other.map_or(true, |o| self.height() > o.height())
    }

    /// `-1` marks an unset coordinate.
    pub fn has_x_values(&self) -> bool {
        self.x0 != -1.0 && self.x1 != -1.0
    }

    pub fn has_y_values(&self) -> bool {
        self.y0 != -1.0 && self.y1 != -1.0
    }

    /// Open-interval overlap: boxes sharing only an edge do not overlap.
    pub fn overlaps(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        !(x1 <= self.x0 || y1 <= self.y0 || self.x1 <= x0 || self.y1 <= y0)
    }

    /// Point test, exclusive on the left/top edge and inclusive on the
    /// right/bottom edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !(x <= self.x0 || y <= self.y0 || self.x1 < x || self.y1 < y)
    }

    /// Absorb the box when it overlaps, moving every edge to the running
    /// mean of all absorbed boxes.
    pub fn try_merge(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        if !self.overlaps(x0, y0, x1, y1) {
            return false;
        }
        let n = f64::from(self.merge_count);
        self.x0 = (self.x0 * n + x0) / (n + 1.0);
        self.y0 = (self.y0 * n + y0) / (n + 1.0);
        self.x1 = (self.x1 * n + x1) / (n + 1.0);
        self.y1 = (self.y1 * n + y1) / (n + 1.0);
        self.merge_count += 1;
        true
    }

    /// [`RoiRegion::try_merge`] taking another region's box.
    pub fn try_absorb(&mut self, other: &RoiRegion) -> bool {
        self.try_merge(other.x0, other.y0, other.x1, other.y1)
    }
}
