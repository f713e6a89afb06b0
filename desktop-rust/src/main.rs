mod app;

use app::ScanApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Asset Counter",
        options,
        Box::new(|_cc| Box::new(ScanApp::default())),
    )
}
