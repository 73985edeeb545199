use crate::detector::ScanParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `scan_demo` tool.
#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    /// JSON job request (`scale`, `frameWidth`, `frameHeight`, `cascade`,
    /// `satData`).
    pub input: PathBuf,
    /// Scales to scan. Empty means the request's own scale.
    #[serde(default)]
    pub scales: Vec<f64>,
    #[serde(default)]
    pub params: ScanParams,
    pub output: ScanOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    /// Where the per-scale regions and reports are written.
    pub report_json: PathBuf,
    /// Also write the scan diagnostics, not only the regions.
    #[serde(default = "default_true")]
    pub include_diagnostics: bool,
}

fn default_true() -> bool {
    true
}

impl ScanToolConfig {
    /// Scales to run, falling back to `request_scale`.
    pub fn scales_or(&self, request_scale: f64) -> Vec<f64> {
        if self.scales.is_empty() {
            vec![request_scale]
        } else {
            self.scales.clone()
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<ScanToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
