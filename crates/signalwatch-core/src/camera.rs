//! Camera capture collaborator.
//!
//! Acquisition may be denied or the device absent; either way the viewer
//! gets exactly one Error-severity log entry with a fixed message and the
//! video area silently shows nothing. Camera failure never touches the
//! global signal status — that belongs to the broadcast feed, not the
//! operator's webcam.

use tracing::{debug, warn};

use signalwatch_types::alert::AlertLog;
use signalwatch_types::severity::Severity;

/// Fixed text of the acquisition-failure log entry.
pub const CAMERA_FALLBACK_MESSAGE: &str = "Unable to access webcam. Check camera permissions.";

#[derive(Debug, Clone, thiserror::Error)]
pub enum CameraError {
    #[error("camera access denied")]
    AccessDenied,
    #[error("no camera device available")]
    Unavailable,
}

/// A live video stream handle. Frames here are synthetic; a real capture
/// backend would implement [`CameraSource`] over an actual device.
pub struct CameraStream {
    pub width: u32,
    pub height: u32,
    frame_index: u64,
}

impl CameraStream {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame_index: 0,
        }
    }

    /// Next synthetic frame: a moving horizontal luma gradient, enough to
    /// look alive in a demo surface.
    pub fn next_frame(&mut self) -> Frame {
        let index = self.frame_index;
        self.frame_index += 1;

        let mut luma = vec![0u8; (self.width * self.height) as usize];
        for (i, px) in luma.iter_mut().enumerate() {
            let x = i as u64 % self.width as u64;
            *px = ((x + index) % 256) as u8;
        }
        Frame { index, luma }
    }
}

/// One synthetic video frame, row-major 8-bit luma.
pub struct Frame {
    pub index: u64,
    pub luma: Vec<u8>,
}

/// Seam over webcam acquisition.
pub trait CameraSource {
    fn open(&self) -> Result<CameraStream, CameraError>;
}

/// A camera that always "works", producing the synthetic test pattern.
pub struct SimulatedCamera {
    pub width: u32,
    pub height: u32,
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

impl CameraSource for SimulatedCamera {
    fn open(&self) -> Result<CameraStream, CameraError> {
        Ok(CameraStream::new(self.width, self.height))
    }
}

/// A camera that always fails with a fixed error, for exercising the
/// acquisition-failure path.
pub struct DeniedCamera;

impl CameraSource for DeniedCamera {
    fn open(&self) -> Result<CameraStream, CameraError> {
        Err(CameraError::AccessDenied)
    }
}

/// Try to open the camera. On failure, append the fixed fallback entry to
/// the alert log and return `None` — the display shows an empty video area.
pub fn attach<C: CameraSource>(source: &C, log: &AlertLog) -> Option<CameraStream> {
    match source.open() {
        Ok(stream) => {
            debug!(
                width = stream.width,
                height = stream.height,
                "camera stream opened"
            );
            Some(stream)
        }
        Err(err) => {
            warn!(error = %err, "camera acquisition failed");
            log.append(Severity::Error, CAMERA_FALLBACK_MESSAGE);
            None
        }
    }
}
