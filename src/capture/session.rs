use anyhow::Context;
use tracing::{debug, warn};

use crate::capture::camera::{CameraDevice, CameraFrame, CameraStream, FacingMode};
use crate::compose::format::StripFormat;
use crate::foundation::{
    core::EncodedPhoto,
    error::{BoothError, BoothResult},
};
use crate::session::context::SessionContext;

/// Countdown length before each shot, in whole seconds.
pub const COUNTDOWN_SECONDS: u32 = 3;

const SNAPSHOT_JPEG_QUALITY: u8 = 92;

/// What one countdown tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Countdown still running; seconds remaining for the current shot.
    Counting(u32),
    /// A shot was captured; 1-based shot number.
    Captured(usize),
    /// The final shot was captured, the sequence is complete.
    Finished,
}

struct Countdown {
    time_left: u32,
    current_shot: usize,
}

/// Drives the camera capture flow: a countdown per shot, a fixed number of
/// shots, and mirror/rotation adjustments baked into each snapshot.
///
/// Camera acquisition failures are absorbed: the session keeps running with a
/// blank feed and snapshots fail until the user flips the camera to retry.
pub struct CaptureSession {
    device: Box<dyn CameraDevice>,
    stream: Option<Box<dyn CameraStream>>,
    facing: FacingMode,
    mirrored: bool,
    rotation_deg: u32,
    photo_count: usize,
    photos: Vec<EncodedPhoto>,
    countdown: Option<Countdown>,
}

impl CaptureSession {
    /// Start a session for `photo_count` shots, acquiring the front camera.
    pub fn new(mut device: Box<dyn CameraDevice>, photo_count: usize) -> BoothResult<Self> {
        if photo_count == 0 {
            return Err(BoothError::validation("photo_count must be >= 1"));
        }
        let facing = FacingMode::User;
        let stream = acquire(device.as_mut(), facing);
        Ok(Self {
            device,
            stream,
            facing,
            mirrored: false,
            rotation_deg: 0,
            photo_count,
            photos: Vec::with_capacity(photo_count),
            countdown: None,
        })
    }

    /// Whether a live feed is available.
    pub fn has_feed(&self) -> bool {
        self.stream.is_some()
    }

    /// Current facing mode.
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    /// Photos captured so far, in shot order.
    pub fn photos(&self) -> &[EncodedPhoto] {
        &self.photos
    }

    /// Whether every configured shot has been captured.
    pub fn is_complete(&self) -> bool {
        self.photos.len() == self.photo_count
    }

    /// Whether a countdown is running.
    pub fn is_capturing(&self) -> bool {
        self.countdown.is_some()
    }

    /// Begin the shot sequence, discarding previously captured photos.
    pub fn start_countdown(&mut self) {
        self.photos.clear();
        self.countdown = Some(Countdown {
            time_left: COUNTDOWN_SECONDS,
            current_shot: 1,
        });
    }

    /// Advance the countdown by one second; snapshots fire when it reaches
    /// zero. Returns `None` when no sequence is running.
    pub fn tick(&mut self) -> Option<CaptureEvent> {
        let countdown = self.countdown.as_mut()?;
        if countdown.time_left > 1 {
            countdown.time_left -= 1;
            return Some(CaptureEvent::Counting(countdown.time_left));
        }

        let shot = countdown.current_shot;
        match self.snapshot() {
            Ok(photo) => self.photos.push(photo),
            Err(err) => {
                warn!(%err, "snapshot failed, aborting capture sequence");
                self.countdown = None;
                return None;
            }
        }

        if shot < self.photo_count {
            self.countdown = Some(Countdown {
                time_left: COUNTDOWN_SECONDS,
                current_shot: shot + 1,
            });
            Some(CaptureEvent::Captured(shot))
        } else {
            self.countdown = None;
            Some(CaptureEvent::Finished)
        }
    }

    /// Switch between front and back camera.
    ///
    /// The current stream is stopped and released before the replacement is
    /// acquired; the device never holds two streams at once.
    pub fn flip_facing(&mut self) {
        self.release_stream();
        self.facing = self.facing.flipped();
        self.stream = acquire(self.device.as_mut(), self.facing);
    }

    /// Toggle horizontal mirroring of snapshots.
    pub fn toggle_mirror(&mut self) {
        self.mirrored = !self.mirrored;
    }

    /// Advance snapshot rotation by 90 degrees.
    pub fn rotate_step(&mut self) {
        self.rotation_deg = (self.rotation_deg + 90) % 360;
    }

    /// Grab a frame, bake in rotation/mirroring, and encode it as JPEG.
    pub fn snapshot(&mut self) -> BoothResult<EncodedPhoto> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| BoothError::capture("no camera stream available"))?;
        let frame = stream.grab_frame()?;
        encode_snapshot(frame, self.rotation_deg, self.mirrored)
    }

    /// Finish the session, producing the handoff context for the review
    /// stage. The camera stream is released.
    pub fn finish(mut self, timestamp_label: impl Into<String>) -> BoothResult<SessionContext> {
        if !self.is_complete() {
            return Err(BoothError::capture(format!(
                "capture incomplete: {} of {} shots",
                self.photos.len(),
                self.photo_count
            )));
        }
        self.release_stream();
        Ok(SessionContext {
            photos: std::mem::take(&mut self.photos),
            count: self.photo_count,
            timestamp: timestamp_label.into(),
            format: StripFormat::Portrait,
        })
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("camera stream released");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release_stream();
    }
}

fn acquire(device: &mut dyn CameraDevice, facing: FacingMode) -> Option<Box<dyn CameraStream>> {
    match device.open(facing) {
        Ok(stream) => Some(stream),
        Err(err) => {
            warn!(%err, ?facing, "camera unavailable, capture surface stays blank");
            None
        }
    }
}

fn encode_snapshot(frame: CameraFrame, rotation_deg: u32, mirrored: bool) -> BoothResult<EncodedPhoto> {
    let mut img = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba8)
        .ok_or_else(|| BoothError::capture("camera frame byte length mismatch"))?;
    img = match rotation_deg {
        90 => image::imageops::rotate90(&img),
        180 => image::imageops::rotate180(&img),
        270 => image::imageops::rotate270(&img),
        _ => img,
    };
    if mirrored {
        image::imageops::flip_horizontal_in_place(&mut img);
    }

    let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, SNAPSHOT_JPEG_QUALITY);
    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .context("encode snapshot jpeg")?;
    Ok(EncodedPhoto::new(out))
}

#[cfg(test)]
#[path = "../../tests/unit/capture/session.rs"]
mod tests;
