use crate::foundation::error::BoothResult;

/// Which physical camera supplies the video feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacingMode {
    /// Front (selfie) camera.
    User,
    /// Back camera.
    Environment,
}

impl FacingMode {
    /// The other facing mode.
    pub fn flipped(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// One raw video frame: straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct CameraFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub rgba8: Vec<u8>,
}

/// A camera able to open video-only streams for a facing mode.
///
/// Opening may suspend on user permission or hardware attach and fail with a
/// [`BoothError::Capture`](crate::BoothError::Capture); callers absorb that
/// failure and leave the capture surface blank.
pub trait CameraDevice {
    /// Open a stream for the given facing mode.
    fn open(&mut self, facing: FacingMode) -> BoothResult<Box<dyn CameraStream>>;
}

/// A live video stream. The one scarce external resource: it must be stopped
/// before a replacement stream is acquired.
pub trait CameraStream {
    /// Grab the current frame.
    fn grab_frame(&mut self) -> BoothResult<CameraFrame>;

    /// Stop all tracks, releasing the device.
    fn stop(&mut self);
}
