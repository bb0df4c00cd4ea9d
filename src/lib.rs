//! Stripbooth is a photobooth strip composition and rendering engine.
//!
//! It takes an ordered list of captured photos, lays them out on a fixed-size
//! canvas (portrait 1080x1920 or landscape 1920x1080), decorates the result
//! with a frame color theme, a diagonal-stripe background, draggable stickers
//! and a branding footer, and serializes the composite to a JPEG payload.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: [`CaptureSession`] drives a countdown-per-shot camera flow
//!    over an abstract [`CameraDevice`] and produces [`EncodedPhoto`] payloads.
//! 2. **Handoff**: [`SessionContext`] carries photos + metadata between stages
//!    through a pluggable string-valued [`SessionStore`].
//! 3. **Review**: [`ReviewStage`] owns the color/format/sticker state, routes
//!    gestures through the [`StickerController`] state machine, and schedules
//!    regeneration.
//! 4. **Compose**: [`StripComposer`] resolves all photos to raster handles,
//!    runs the strip [`layout`](compute_strip_layout), draws frames, stickers
//!    and branding with `vello_cpu`, and encodes the final JPEG.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical inputs produce byte-identical
//!   composite output.
//! - **Local failure absorption**: camera and branding-font failures are
//!   logged and leave a blank feed / plain footer instead of failing the run.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod capture;
mod catalog;
mod compose;
mod foundation;
mod layout;
mod session;
mod stage;
mod sticker;

pub use assets::decode::{PreparedImage, decode_image, decode_photos};
pub use capture::camera::{CameraDevice, CameraFrame, CameraStream, FacingMode};
pub use capture::session::{COUNTDOWN_SECONDS, CaptureEvent, CaptureSession};
pub use catalog::colors::{FRAME_COLORS, FrameColor, find_color};
pub use catalog::stickers::{AVAILABLE_STICKERS, GlyphFn, StickerDef, find_sticker};
pub use compose::branding::{BrandStyle, BrandTextEngine};
pub use compose::format::{CompositeImage, StripFormat, download_file_name};
pub use compose::generator::{PADDING, SPACING, StripComposer, center_crop_rect};
pub use foundation::core::{Canvas, EncodedPhoto, NormPoint, Rgba8};
pub use foundation::error::{BoothError, BoothResult};
pub use layout::strip::{Axis, LayoutParams, StripLayout, compute_strip_layout};
pub use session::context::SessionContext;
pub use session::store::{
    KEY_FORMAT, KEY_PHOTO_COUNT, KEY_PHOTOS, KEY_TIMESTAMP, MemorySessionStore, SessionStore,
};
pub use stage::ReviewStage;
pub use sticker::controller::{GestureEffect, GestureEvent, StickerController};
pub use sticker::model::{POSITION_MARGIN, ROTATE_STEP_DEG, SCALE_MAX, SCALE_MIN, Sticker};
