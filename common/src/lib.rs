//! Asset Scan Common Library
//!
//! Types and session logic shared by the CLI and the desktop frontend.

pub mod capability;
pub mod error;
pub mod export;
pub mod record;
pub mod report;
pub mod session;

pub use capability::{CameraAccess, ReportSink};
pub use error::{ExportError, Result};
pub use record::{Category, HistoryRecord};
pub use report::{report_file_name, Report, REPORT_TITLE};
pub use session::{CameraPermission, ScanSession};
