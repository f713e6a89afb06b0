//! Capability contracts implemented by each frontend.
//!
//! The camera, the share/save surface and the user prompts are platform
//! collaborators; the session core only sees these traits.

use std::path::Path;

use crate::session::CameraPermission;

/// Camera permission collaborator.
///
/// Asked exactly once at session start. Permission changes made outside the
/// application are not observed until the next session.
pub trait CameraAccess {
    /// Resolve the permission request. Implementations that cannot reach the
    /// user (closed prompt, broken dialog) report `Denied` rather than
    /// leaving the gate unresolved.
    fn request_permission(&mut self) -> CameraPermission;
}

/// Share/save collaborator for a rendered report file.
pub trait ReportSink {
    /// Whether the sink can be invoked right now. Checked before
    /// [`deliver`]; an unavailable sink is surfaced to the user instead of
    /// being called.
    ///
    /// [`deliver`]: ReportSink::deliver
    fn is_available(&self) -> bool;

    /// Hand the report location to the user (print it, open a save dialog,
    /// ...). A user cancellation is not an error.
    fn deliver(&mut self, report: &Path) -> std::io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCamera(CameraPermission);

    impl CameraAccess for FixedCamera {
        fn request_permission(&mut self) -> CameraPermission {
            self.0
        }
    }

    #[test]
    fn test_camera_access_object_safety() {
        let mut camera: Box<dyn CameraAccess> = Box::new(FixedCamera(CameraPermission::Denied));
        assert_eq!(camera.request_permission(), CameraPermission::Denied);
    }
}
