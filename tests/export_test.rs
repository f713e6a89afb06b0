//! PDF export integration tests.

use asset_scan_common::{Category, HistoryRecord};
use asset_scan_rust::error::AssetScanError;
use asset_scan_rust::export;
use std::path::Path;
use tempfile::tempdir;

fn sample_records() -> Vec<HistoryRecord> {
    vec![
        HistoryRecord::new("ABC123", Category::Monitor),
        HistoryRecord::new("XYZ999", Category::Cabinet),
    ]
}

#[test]
fn test_export_writes_pdf_file() {
    let dir = tempdir().expect("Failed to create temp dir");

    let path = export::export_report(&sample_records(), dir.path(), "Asset Inventory Report")
        .expect("export failed");

    assert!(path.exists(), "PDF file was not created");
    assert!(path.starts_with(dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("pdf"));

    let metadata = std::fs::metadata(&path).expect("failed to stat PDF");
    assert!(metadata.len() > 0, "PDF file is empty");
}

#[test]
fn test_export_empty_history_succeeds() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = export::export_report(&[], dir.path(), "Asset Inventory Report");
    assert!(result.is_ok(), "empty export failed: {:?}", result.err());
    assert!(result.unwrap().exists());
}

#[test]
fn test_export_to_missing_folder_fails() {
    let result = export::export_report(
        &sample_records(),
        Path::new("/nonexistent/asset-scan-out"),
        "Asset Inventory Report",
    );

    assert!(matches!(
        result,
        Err(AssetScanError::OutputDirNotFound(_))
    ));
}

#[test]
fn test_export_is_retryable_after_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records = sample_records();

    let failed = export::export_report(&records, Path::new("/nonexistent"), "Report");
    assert!(failed.is_err());

    // same records, valid destination: the retry succeeds
    let retried = export::export_report(&records, dir.path(), "Report");
    assert!(retried.is_ok());
}

#[test]
fn test_many_records_paginate() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records: Vec<HistoryRecord> = (0..120)
        .map(|i| HistoryRecord::new(format!("CODE{:04}", i), Category::Stabilizer))
        .collect();

    let path = export::export_report(&records, dir.path(), "Big Report").expect("export failed");
    let metadata = std::fs::metadata(&path).expect("failed to stat PDF");
    assert!(metadata.len() > 0);
}
