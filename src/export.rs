//! Export orchestration: history → report → PDF file on disk.

use std::path::{Path, PathBuf};

use asset_scan_common::export::pdf;
use asset_scan_common::{report_file_name, HistoryRecord, Report};
use chrono::Local;

use crate::error::{AssetScanError, Result};

/// Render the history into a timestamped PDF under `output_dir` and return
/// the file location. Takes the records by reference; a failed export leaves
/// the session history exactly as it was.
pub fn export_report(
    records: &[HistoryRecord],
    output_dir: &Path,
    title: &str,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(AssetScanError::OutputDirNotFound(
            output_dir.display().to_string(),
        ));
    }

    let report = Report::from_records(title, records);
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let output_path = output_dir.join(report_file_name(&timestamp));

    pdf::render_report(&report, &output_path)?;

    Ok(output_path)
}
