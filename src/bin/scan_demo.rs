use cascade_detector::config::scan;
use cascade_detector::detector::{run_scales, JobRequest, ScanResult};
use cascade_detector::diagnostics::ScanReport;
use cascade_detector::io::{read_json_file, write_json_file};
use cascade_detector::roi::RoiRegion;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = scan::load_config(Path::new(&config_path))?;

    let request: JobRequest = read_json_file(&config.input)?;
    let tables = request.tables().map_err(|e| e.to_string())?;
    let scales = config.scales_or(request.scale);

    let start = Instant::now();
    let results =
        run_scales(&request.cascade, tables, &scales, &config.params).map_err(|e| e.to_string())?;
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    let summary = ScanSummary {
        frame_width: request.frame_width,
        frame_height: request.frame_height,
        stages: request.cascade.stages.len(),
        total_ms,
        scales: results
            .into_iter()
            .map(|r| ScaleEntry::new(r, config.output.include_diagnostics))
            .collect(),
    };

    write_json_file(&config.output.report_json, &summary)?;

    for entry in &summary.scales {
        println!(
            "scale {:>7.3}: {} region(s) in {:.3} ms",
            entry.scale,
            entry.regions.len(),
            entry.elapsed_ms
        );
    }
    println!(
        "Saved {} scale result(s) to {} ({:.3} ms)",
        summary.scales.len(),
        config.output.report_json.display(),
        total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: scan_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanSummary {
    frame_width: usize,
    frame_height: usize,
    stages: usize,
    /// Wall-clock time of the whole parallel batch.
    total_ms: f64,
    scales: Vec<ScaleEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScaleEntry {
    scale: f64,
    elapsed_ms: f64,
    regions: Vec<RoiRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ScanReport>,
}

impl ScaleEntry {
    fn new(result: ScanResult, include_diagnostics: bool) -> Self {
        Self {
            scale: result.scale,
            elapsed_ms: result.report.timings.total_ms,
            regions: result.regions,
            report: include_diagnostics.then_some(result.report),
        }
    }
}
