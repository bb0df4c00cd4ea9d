use std::sync::Arc;

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Fixed pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// A position expressed as fractions of canvas width/height.
///
/// Normalized coordinates make sticker placements reusable across
/// differently-sized target canvases (preview vs. export).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormPoint {
    /// Horizontal fraction in `[0, 1]`.
    pub x: f64,
    /// Vertical fraction in `[0, 1]`.
    pub y: f64,
}

impl NormPoint {
    /// Build a normalized point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to pixel coordinates on `canvas`.
    pub fn to_pixels(self, canvas: Canvas) -> Point {
        Point::new(
            self.x * f64::from(canvas.width),
            self.y * f64::from(canvas.height),
        )
    }

    /// Recover the normalized point from pixel coordinates on `canvas`.
    ///
    /// Inverse of [`NormPoint::to_pixels`] for any canvas with nonzero
    /// dimensions.
    pub fn from_pixels(canvas: Canvas, p: Point) -> Self {
        Self {
            x: p.x / f64::from(canvas.width),
            y: p.y / f64::from(canvas.height),
        }
    }
}

/// An opaque, immutable encoded bitmap payload (a captured photo).
///
/// Payloads are produced by the capture stage and referenced, not copied, by
/// the compositor; cloning shares the underlying bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPhoto(Arc<Vec<u8>>);

impl EncodedPhoto {
    /// Wrap encoded image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the encoded payload in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
