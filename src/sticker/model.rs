use crate::foundation::core::{Canvas, NormPoint, Point};

/// Drag positions are clamped to `[MARGIN, 1 - MARGIN]` on both axes so a
/// sticker can never be pushed fully out of view.
pub const POSITION_MARGIN: f64 = 0.1;

/// Minimum pinch scale.
pub const SCALE_MIN: f64 = 0.5;

/// Maximum pinch scale.
pub const SCALE_MAX: f64 = 2.0;

/// Rotation advance per discrete rotate action, in degrees.
pub const ROTATE_STEP_DEG: f64 = 45.0;

/// One placed sticker instance.
///
/// Position is in canvas-normalized coordinates; several instances may share
/// the same catalog `kind`, but `id` is unique per placement. The list order
/// of placed stickers is their z-order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sticker {
    /// Unique placement id.
    pub id: String,
    /// Catalog kind key. May name an entry missing from the catalog; such
    /// stickers are silently skipped at draw time.
    pub kind: String,
    /// Horizontal position as a fraction of canvas width.
    pub x: f64,
    /// Vertical position as a fraction of canvas height.
    pub y: f64,
    /// Uniform scale in `[SCALE_MIN, SCALE_MAX]`.
    pub scale: f64,
    /// Rotation in degrees, `[0, 360)`.
    pub rotation_deg: f64,
}

impl Sticker {
    /// Spawn a new placement at the canvas center with default scale and
    /// rotation.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x: 0.5,
            y: 0.5,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }

    /// Move to a normalized position, clamped to the visible margin band.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x.clamp(POSITION_MARGIN, 1.0 - POSITION_MARGIN);
        self.y = y.clamp(POSITION_MARGIN, 1.0 - POSITION_MARGIN);
    }

    /// Apply an incremental pinch factor, clamping the result.
    pub fn scale_by(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(SCALE_MIN, SCALE_MAX);
    }

    /// Advance rotation by one discrete step, wrapping modulo 360.
    pub fn rotate_step(&mut self) {
        self.rotation_deg = (self.rotation_deg + ROTATE_STEP_DEG) % 360.0;
    }

    /// Normalized position of this sticker.
    pub fn position(&self) -> NormPoint {
        NormPoint::new(self.x, self.y)
    }

    /// Pixel anchor of this sticker on the given canvas.
    pub fn pixel_position(&self, canvas: Canvas) -> Point {
        self.position().to_pixels(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sticker/model.rs"]
mod tests;
