//! JSON helpers shared by the tools.
//!
//! - `read_json_file`: deserialize a value from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::{Category, RoiRegion};

    #[test]
    fn regions_survive_a_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("cascade-detector-io-{}", std::process::id()));
        let path = dir.join("nested").join("regions.json");
        let regions = vec![RoiRegion::from_center(Category::Face, 10.0, 12.0, 3.0)];
        write_json_file(&path, &regions).expect("write json");
        let back: Vec<RoiRegion> = read_json_file(&path).expect("read json");
        assert_eq!(back, regions);
        let _ = fs::remove_dir_all(&dir);
    }
}
