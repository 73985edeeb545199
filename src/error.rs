//! Error types for cascade validation and scan jobs.
//!
//! Evaluation itself never returns errors; these cover the checks performed
//! once per job before any window is classified.
use core::fmt;

/// Structural problems in a cascade definition.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeError {
    /// A stage without weak classifiers.
    EmptyStage { stage: usize },
    /// `internal_nodes` too short to carry the threshold at index 3.
    MissingThreshold {
        stage: usize,
        classifier: usize,
        len: usize,
    },
    /// `leaf_values` shorter than two entries.
    MissingLeafValues {
        stage: usize,
        classifier: usize,
        len: usize,
    },
    /// NaN or infinite threshold / vote value.
    NonFinite { stage: usize, what: &'static str },
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStage { stage } => write!(f, "stage {stage} has no weak classifiers"),
            Self::MissingThreshold {
                stage,
                classifier,
                len,
            } => write!(
                f,
                "stage {stage} classifier {classifier}: internalNodes has {len} entries, need at least 4"
            ),
            Self::MissingLeafValues {
                stage,
                classifier,
                len,
            } => write!(
                f,
                "stage {stage} classifier {classifier}: leafValues has {len} entries, need 2"
            ),
            Self::NonFinite { stage, what } => {
                write!(f, "stage {stage}: non-finite {what}")
            }
        }
    }
}

impl std::error::Error for CascadeError {}

/// Integral table layout problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    SizeMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                table,
                expected,
                actual,
            } => write!(
                f,
                "{table} table size mismatch: expected {expected}, got {actual}"
            ),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid frame dimensions {width}x{height}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Reasons a scale job refuses to run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    InvalidScale(f64),
    InvalidParams(&'static str),
    Cascade(CascadeError),
    Table(TableError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale(s) => write!(f, "scale must be positive and finite, got {s}"),
            Self::InvalidParams(why) => write!(f, "invalid scan parameters: {why}"),
            Self::Cascade(e) => write!(f, "malformed cascade: {e}"),
            Self::Table(e) => write!(f, "malformed integral tables: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidScale(_) | Self::InvalidParams(_) => None,
            Self::Cascade(e) => Some(e),
            Self::Table(e) => Some(e),
        }
    }
}

impl From<CascadeError> for ScanError {
    fn from(e: CascadeError) -> Self {
        Self::Cascade(e)
    }
}

impl From<TableError> for ScanError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}
