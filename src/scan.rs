//! Interactive scanning session for the terminal frontend.
//!
//! The decode source is a keyboard-wedge barcode scanner: it types the
//! payload into the prompt and presses Enter. While the scan lock is held
//! the payload prompt is not offered at all, so no decode event can reach
//! the session until the user re-arms with `r`.

use std::path::Path;

use asset_scan_common::{CameraAccess, CameraPermission, Category, ReportSink, ScanSession};
use dialoguer::{Confirm, Input, Select};

use crate::error::{AssetScanError, Result};
use crate::export;

/// Camera permission via a terminal confirm prompt. Stands in for the OS
/// permission dialog; a failed prompt counts as a refusal.
pub struct TerminalCamera;

impl CameraAccess for TerminalCamera {
    fn request_permission(&mut self) -> CameraPermission {
        match Confirm::new()
            .with_prompt("Allow camera access for barcode scanning?")
            .default(true)
            .interact()
        {
            Ok(true) => CameraPermission::Granted,
            _ => CameraPermission::Denied,
        }
    }
}

/// Save collaborator for the terminal: surfaces the file location.
pub struct TerminalSink;

impl ReportSink for TerminalSink {
    fn is_available(&self) -> bool {
        true
    }

    fn deliver(&mut self, report: &Path) -> std::io::Result<()> {
        println!("✔ Report location: {}", report.display());
        Ok(())
    }
}

/// One user action in the prompt loop.
enum ScanAction {
    /// A decoded barcode payload.
    Decode(String),
    SelectCategory,
    /// Re-arm the scanner after a scan.
    Rescan,
    Export,
    Quit,
}

/// Map raw prompt input to an action. While locked, free text is not a
/// decode event; the scan surface is disabled.
fn parse_scan_input(input: &str, locked: bool) -> Option<ScanAction> {
    let trimmed = input.trim();
    match trimmed {
        "" => None,
        "c" => Some(ScanAction::SelectCategory),
        "e" => Some(ScanAction::Export),
        "q" | "Q" => Some(ScanAction::Quit),
        "r" if locked => Some(ScanAction::Rescan),
        _ if locked => None,
        payload => Some(ScanAction::Decode(payload.to_string())),
    }
}

fn prompt_scan_action(locked: bool) -> Result<Option<ScanAction>> {
    let prompt = if locked {
        "Scanner locked (r:scan again c:category e:export q:quit)"
    } else {
        "Scan barcode (c:category e:export q:quit)"
    };

    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AssetScanError::Prompt(e.to_string()))?;

    let action = parse_scan_input(&input, locked);
    if action.is_none() && locked && !input.trim().is_empty() {
        println!("  Scanner is locked; press r to scan again");
    }
    Ok(action)
}

fn prompt_category(current: Category) -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let default = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);

    let index = Select::new()
        .with_prompt("Category for the next scans")
        .items(&labels)
        .default(default)
        .interact()
        .map_err(|e| AssetScanError::Prompt(e.to_string()))?;

    Ok(Category::ALL[index])
}

/// Drive one scanning session from permission gate to quit.
pub fn run_scan_session(
    session: &mut ScanSession,
    camera: &mut impl CameraAccess,
    sink: &mut impl ReportSink,
    output_dir: &Path,
    title: &str,
) -> Result<()> {
    println!("Requesting camera access...");
    let permission = camera.request_permission();
    session.set_camera_permission(permission);

    if permission == CameraPermission::Denied {
        println!("✖ Camera access denied. Scanning is disabled for this session.");
        return Ok(());
    }

    println!("✔ Camera ready\n");
    println!("Scan a barcode, or: [c]ategory [e]xport [q]uit\n");

    loop {
        println!(
            "[{} items] category: {}",
            session.history().len(),
            session.selected_category()
        );

        let Some(action) = prompt_scan_action(session.is_locked())? else {
            continue;
        };

        match action {
            ScanAction::Decode(payload) => {
                if let Some(record) = session.record_scan(&payload) {
                    println!("✔ Barcode scanned: {}\n", record.barcode);
                }
            }
            ScanAction::Rescan => {
                session.reset_scan();
                println!("  Scanner re-armed\n");
            }
            ScanAction::SelectCategory => {
                let category = prompt_category(session.selected_category())?;
                session.select_category(category);
                println!("  Category: {}\n", category);
            }
            ScanAction::Export => {
                run_export(session, sink, output_dir, title);
            }
            ScanAction::Quit => {
                println!("\n{} record(s) scanned this session", session.history().len());
                break;
            }
        }
    }

    Ok(())
}

/// Export boundary: every render/write/deliver failure is caught here and
/// surfaced as one generic notice. The history is untouched either way, so
/// the user can simply retry.
fn run_export(session: &ScanSession, sink: &mut impl ReportSink, output_dir: &Path, title: &str) {
    println!("- Generating PDF...");

    if !sink.is_available() {
        println!("✖ Export failed. Scanned records were kept.\n");
        return;
    }

    let delivered = export::export_report(session.history(), output_dir, title)
        .and_then(|path| sink.deliver(&path).map_err(AssetScanError::from));

    match delivered {
        Ok(()) => println!("✔ Export complete\n"),
        Err(_) => println!("✖ Export failed. Scanned records were kept.\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FixedCamera(CameraPermission);

    impl CameraAccess for FixedCamera {
        fn request_permission(&mut self) -> CameraPermission {
            self.0
        }
    }

    struct RecordingSink {
        delivered: Vec<PathBuf>,
    }

    impl ReportSink for RecordingSink {
        fn is_available(&self) -> bool {
            true
        }

        fn deliver(&mut self, report: &Path) -> std::io::Result<()> {
            self.delivered.push(report.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_denied_permission_disables_session() {
        let mut session = ScanSession::new();
        let mut camera = FixedCamera(CameraPermission::Denied);
        let mut sink = RecordingSink { delivered: vec![] };

        let result = run_scan_session(
            &mut session,
            &mut camera,
            &mut sink,
            Path::new("."),
            "Test",
        );

        assert!(result.is_ok());
        assert_eq!(session.camera_permission(), CameraPermission::Denied);
        assert!(session.history().is_empty());
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_parse_decode_while_unlocked() {
        match parse_scan_input("ABC123", false) {
            Some(ScanAction::Decode(payload)) => assert_eq!(payload, "ABC123"),
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn test_parse_ignores_payload_while_locked() {
        assert!(parse_scan_input("ABC123", true).is_none());
        assert!(matches!(
            parse_scan_input("r", true),
            Some(ScanAction::Rescan)
        ));
    }

    #[test]
    fn test_parse_menu_keys() {
        assert!(matches!(
            parse_scan_input("c", false),
            Some(ScanAction::SelectCategory)
        ));
        assert!(matches!(
            parse_scan_input("e", true),
            Some(ScanAction::Export)
        ));
        assert!(matches!(parse_scan_input("q", false), Some(ScanAction::Quit)));
        assert!(parse_scan_input("   ", false).is_none());
    }

    #[test]
    fn test_failed_export_keeps_history() {
        let mut session = ScanSession::new();
        session.set_camera_permission(CameraPermission::Granted);
        session.record_scan("ABC123");

        let mut sink = RecordingSink { delivered: vec![] };
        // nonexistent output dir forces the export path to fail
        run_export(
            &session,
            &mut sink,
            Path::new("/nonexistent/asset-scan-test"),
            "Test",
        );

        assert_eq!(session.history().len(), 1);
        assert!(sink.delivered.is_empty());
    }
}
