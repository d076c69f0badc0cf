//! Entry Zone CLI Library
//!
//! Telemetry loading (JSON / CSV) and boundary parsing for the `entry-zone` binary.

pub mod boundary;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use entry_core::{Point3D, Side, TelemetryFrame};

pub use boundary::{default_boundary, parse_boundary, DEFAULT_BOUNDARY};

/// Separator between weapon classes in the CSV `inventory` column
pub const CSV_INVENTORY_SEPARATOR: char = '|';

/// Flat CSV row: `side,clock_time,x,y,z,inventory`
#[derive(Debug, Deserialize)]
struct CsvFrameRow {
    side: Side,
    clock_time: String,
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    inventory: String,
}

impl From<CsvFrameRow> for TelemetryFrame {
    fn from(row: CsvFrameRow) -> Self {
        TelemetryFrame::new(row.side, row.clock_time, Point3D::new(row.x, row.y, row.z))
            .with_inventory(
                row.inventory
                    .split(CSV_INVENTORY_SEPARATOR)
                    .map(str::trim)
                    .filter(|c| !c.is_empty()),
            )
    }
}

/// Load frames, choosing the format by file extension (`.json` or `.csv`).
pub fn load_frames(path: &Path) -> Result<Vec<TelemetryFrame>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let frames = match ext.as_deref() {
        Some("json") => load_frames_json(path)?,
        Some("csv") => load_frames_csv(path)?,
        _ => bail!(
            "Unsupported telemetry file (expected .json or .csv): {}",
            path.display()
        ),
    };

    info!(frames = frames.len(), path = %path.display(), "loaded telemetry");
    Ok(frames)
}

/// Load frames from a JSON array of frame records.
pub fn load_frames_json(path: &Path) -> Result<Vec<TelemetryFrame>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read telemetry file: {}", path.display()))?;

    let frames: Vec<TelemetryFrame> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse telemetry JSON: {}", path.display()))?;

    Ok(frames)
}

/// Load frames from a CSV file with a header row.
pub fn load_frames_csv(path: &Path) -> Result<Vec<TelemetryFrame>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut frames = Vec::new();
    for (idx, row) in reader.deserialize::<CsvFrameRow>().enumerate() {
        // +2: 1-based, plus header line
        let row = row.with_context(|| format!("Invalid telemetry row at line {}", idx + 2))?;
        frames.push(TelemetryFrame::from(row));
    }

    Ok(frames)
}
