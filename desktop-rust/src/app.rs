use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText};

use asset_scan_common::export::pdf;
use asset_scan_common::{
    report_file_name, CameraAccess, CameraPermission, Category, HistoryRecord, Report, ReportSink,
    ScanSession, REPORT_TITLE,
};

/// Single-screen scanning app: permission gate, category selector, scan
/// field, history list and PDF export.
#[derive(Default)]
pub struct ScanApp {
    session: ScanSession,
    scan_input: String,
    status: String,
    export_status: String,
    exporting: bool,
    permission_rx: Option<Receiver<CameraPermission>>,
    export_rx: Option<Receiver<UiMessage>>,
    last_report: Option<PathBuf>,
}

enum UiMessage {
    ExportDone {
        message: String,
        path: Option<PathBuf>,
    },
}

/// Camera permission through a native message dialog. Runs on a worker
/// thread so the "requesting permission" state stays on screen meanwhile.
struct DialogCamera;

impl CameraAccess for DialogCamera {
    fn request_permission(&mut self) -> CameraPermission {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Camera access")
            .set_description("Allow camera access for barcode scanning?")
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();

        if answer == rfd::MessageDialogResult::Yes {
            CameraPermission::Granted
        } else {
            CameraPermission::Denied
        }
    }
}

/// Save collaborator: lets the user pick a destination for the rendered
/// report. Cancelling the dialog is not a failure.
struct DialogSink;

impl ReportSink for DialogSink {
    fn is_available(&self) -> bool {
        true
    }

    fn deliver(&mut self, report: &Path) -> std::io::Result<()> {
        let name = report
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("asset-report.pdf");
        if let Some(dest) = rfd::FileDialog::new().set_file_name(name).save_file() {
            std::fs::copy(report, dest)?;
        }
        Ok(())
    }
}

fn render_to_temp(records: &[HistoryRecord]) -> Result<PathBuf> {
    let report = Report::from_records(REPORT_TITLE, records);
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let path = std::env::temp_dir().join(report_file_name(&timestamp));
    pdf::render_report(&report, &path).context("render report")?;
    Ok(path)
}

impl ScanApp {
    fn request_permission(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.permission_rx = Some(rx);

        std::thread::spawn(move || {
            let mut camera = DialogCamera;
            let _ = tx.send(camera.request_permission());
        });
    }

    fn poll_messages(&mut self) {
        if let Some(rx) = &self.permission_rx {
            if let Ok(permission) = rx.try_recv() {
                self.session.set_camera_permission(permission);
                self.permission_rx = None;
            }
        }

        if let Some(rx) = &self.export_rx {
            if let Ok(UiMessage::ExportDone { message, path }) = rx.try_recv() {
                self.export_status = message;
                self.last_report = path;
                self.exporting = false;
                self.export_rx = None;
            }
        }
    }

    fn submit_scan(&mut self) {
        let payload = std::mem::take(&mut self.scan_input);
        if payload.is_empty() {
            return;
        }
        if let Some(record) = self.session.record_scan(&payload) {
            self.status = format!("Barcode scanned: {}", record.barcode);
        }
    }

    fn run_export(&mut self) {
        let records = self.session.history().to_vec();
        let (tx, rx) = mpsc::channel();
        self.export_rx = Some(rx);
        self.exporting = true;
        self.export_status = "Export running...".to_string();

        std::thread::spawn(move || {
            let message = match render_to_temp(&records) {
                Ok(path) => UiMessage::ExportDone {
                    message: format!("PDF generated: {}", path.display()),
                    path: Some(path),
                },
                Err(_) => UiMessage::ExportDone {
                    message: "Export failed. Scanned records were kept.".to_string(),
                    path: None,
                },
            };
            let _ = tx.send(message);
        });
    }

    fn save_report_as(&mut self) {
        let Some(report) = self.last_report.clone() else {
            return;
        };
        let mut sink = DialogSink;
        if !sink.is_available() {
            self.export_status = "Export failed. Scanned records were kept.".to_string();
            return;
        }
        match sink.deliver(&report) {
            Ok(()) => self.export_status = format!("Report ready: {}", report.display()),
            Err(_) => self.export_status = "Export failed. Scanned records were kept.".to_string(),
        }
    }

    fn render_scan_surface(&mut self, ui: &mut egui::Ui) {
        if self.session.is_locked() {
            // no scan field while locked: the decode source is disabled,
            // not filtered
            if ui.button("Tap to scan again").clicked() {
                self.session.reset_scan();
                self.status.clear();
            }
        } else {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.scan_input)
                    .hint_text("Scan barcode")
                    .desired_width(260.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit_scan();
                response.request_focus();
            }
        }
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        ui.label(format!("{} items", self.session.history().len()));
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for record in self.session.history() {
                    ui.label(record.report_line());
                }
            });
    }
}

impl eframe::App for ScanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        match self.session.camera_permission() {
            CameraPermission::Pending => {
                if self.permission_rx.is_none() {
                    self.request_permission();
                }
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("Requesting camera permission...");
                    });
                });
                ctx.request_repaint();
                return;
            }
            CameraPermission::Denied => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("No camera access. Scanning is disabled for this session.");
                    });
                });
                return;
            }
            CameraPermission::Granted => {}
        }

        if self.exporting {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("Asset Counter");
            if !self.status.is_empty() {
                ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
            }
            if !self.export_status.is_empty() {
                ui.label(RichText::new(&self.export_status).color(Color32::from_rgb(246, 196, 69)));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for category in Category::ALL {
                    let selected = self.session.selected_category() == category;
                    if ui.radio(selected, category.label()).clicked() {
                        self.session.select_category(category);
                    }
                }
            });
            ui.add_space(8.0);

            self.render_scan_surface(ui);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.exporting, egui::Button::new("Generate PDF"))
                    .clicked()
                {
                    self.run_export();
                }
                if ui
                    .add_enabled(self.last_report.is_some(), egui::Button::new("Save report as..."))
                    .clicked()
                {
                    self.save_report_as();
                }
            });
            ui.add_space(8.0);

            self.render_history(ui);
        });
    }
}
