//! Scan session state machine.
//!
//! All state lives in memory for one run of the application and is dropped
//! with the session. Nothing here touches I/O; the frontends own the camera,
//! the prompts and the export flow.

use crate::record::{Category, HistoryRecord};

/// Outcome of the camera permission request, queried once at startup and
/// never re-queried for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPermission {
    /// Request not yet resolved; the scan surface must not render.
    #[default]
    Pending,
    Granted,
    /// Scanning stays disabled for the whole session.
    Denied,
}

/// In-memory state for one scanning session.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    history: Vec<HistoryRecord>,
    selected_category: Category,
    scan_locked: bool,
    camera: CameraPermission,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera_permission(&self) -> CameraPermission {
        self.camera
    }

    pub fn set_camera_permission(&mut self, permission: CameraPermission) {
        self.camera = permission;
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    /// Selecting a category only affects records scanned afterwards.
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// True between a successful scan and an explicit [`reset_scan`].
    ///
    /// [`reset_scan`]: ScanSession::reset_scan
    pub fn is_locked(&self) -> bool {
        self.scan_locked
    }

    /// Handle one decode event from the scan surface.
    ///
    /// Appends a record labeled with the current category, locks the scanner
    /// and returns the new record for the acknowledgment message. While
    /// locked the event is ignored and `None` is returned; the surface is
    /// expected not to emit events in that state, this guard only backs up
    /// that contract.
    pub fn record_scan(&mut self, payload: &str) -> Option<&HistoryRecord> {
        if self.scan_locked {
            return None;
        }
        self.scan_locked = true;
        self.history
            .push(HistoryRecord::new(payload, self.selected_category));
        self.history.last()
    }

    /// Re-arm the scanner. Only ever called from an explicit user action,
    /// never from a timer; the lock is a double-count guard.
    pub fn reset_scan(&mut self) {
        self.scan_locked = false;
    }

    /// Scanned records in insertion order (= report order).
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }
}
