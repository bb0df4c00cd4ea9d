use tracing::debug;

use crate::catalog::colors::{FRAME_COLORS, FrameColor};
use crate::compose::branding::BrandStyle;
use crate::compose::format::{CompositeImage, StripFormat, download_file_name};
use crate::compose::generator::StripComposer;
use crate::foundation::error::BoothResult;
use crate::session::context::SessionContext;
use crate::session::store::SessionStore;
use crate::sticker::controller::{GestureEffect, GestureEvent, StickerController};
use crate::sticker::model::Sticker;

struct Placed {
    sticker: Sticker,
    controller: StickerController,
}

/// The review/export stage: owns the photos, the selected theme, format and
/// sticker list, and regenerates the composite preview on demand.
///
/// Regeneration is explicit and serialized: every mutating operation marks
/// the preview dirty, and [`ReviewStage::regenerate`] runs at most one
/// compositor pass, so a stale result can never overwrite a newer one.
pub struct ReviewStage {
    session: SessionContext,
    color: FrameColor,
    stickers: Vec<Placed>,
    composer: StripComposer,
    next_sticker_id: u64,
    dirty: bool,
    preview: Option<CompositeImage>,
}

impl ReviewStage {
    /// Build the stage from a loaded session, with the default (first)
    /// catalog color. The initial preview is pending regeneration.
    pub fn from_session(session: SessionContext, brand: BrandStyle) -> Self {
        Self {
            session,
            color: FRAME_COLORS[0],
            stickers: Vec::new(),
            composer: StripComposer::new(brand),
            next_sticker_id: 0,
            dirty: true,
            preview: None,
        }
    }

    /// Currently selected frame color.
    pub fn color(&self) -> FrameColor {
        self.color
    }

    /// Currently selected format.
    pub fn format(&self) -> StripFormat {
        self.session.format
    }

    /// Placed stickers in z-order.
    pub fn stickers(&self) -> Vec<Sticker> {
        self.stickers.iter().map(|p| p.sticker.clone()).collect()
    }

    /// The most recently completed composite, if any.
    pub fn preview(&self) -> Option<&CompositeImage> {
        self.preview.as_ref()
    }

    /// Whether inputs changed since the last completed regeneration.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Select a frame color.
    pub fn set_color(&mut self, color: FrameColor) {
        if self.color != color {
            self.color = color;
            self.dirty = true;
        }
    }

    /// Select the output format.
    pub fn set_format(&mut self, format: StripFormat) {
        if self.session.format != format {
            self.session.format = format;
            self.dirty = true;
        }
    }

    /// Place a new sticker of the given catalog kind at the canvas center.
    /// Returns the unique placement id.
    pub fn add_sticker(&mut self, kind: &str) -> String {
        self.next_sticker_id += 1;
        let id = format!("sticker-{}", self.next_sticker_id);
        self.stickers.push(Placed {
            sticker: Sticker::new(id.clone(), kind),
            controller: StickerController::new(),
        });
        self.dirty = true;
        id
    }

    /// Route a gesture event to the placement's controller. Unknown ids are
    /// ignored.
    pub fn apply_gesture(&mut self, id: &str, event: GestureEvent) {
        let Some(idx) = self.stickers.iter().position(|p| p.sticker.id == id) else {
            return;
        };
        let placed = &mut self.stickers[idx];
        match placed.controller.apply(&mut placed.sticker, event) {
            GestureEffect::None => {}
            GestureEffect::Updated => self.dirty = true,
            GestureEffect::Removed => {
                self.stickers.remove(idx);
                self.dirty = true;
            }
        }
    }

    /// Remove a placement by id.
    pub fn remove_sticker(&mut self, id: &str) {
        let before = self.stickers.len();
        self.stickers.retain(|p| p.sticker.id != id);
        if self.stickers.len() != before {
            self.dirty = true;
        }
    }

    /// Remove every placed sticker.
    pub fn clear_stickers(&mut self) {
        if !self.stickers.is_empty() {
            self.stickers.clear();
            self.dirty = true;
        }
    }

    /// Run one compositor pass if any input changed since the last completed
    /// run. Returns whether a pass ran.
    pub fn regenerate(&mut self) -> BoothResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let stickers = self.stickers();
        let composite = self.composer.generate(
            self.session.format,
            &self.session.photos,
            self.session.count,
            &self.session.timestamp,
            self.color,
            &stickers,
        )?;
        debug!(format = composite.format.as_str(), "preview regenerated");
        self.preview = Some(composite);
        self.dirty = false;
        Ok(true)
    }

    /// Filename offered for the current format's download.
    pub fn download_file_name(&self) -> String {
        download_file_name(self.session.format, &self.session.timestamp)
    }

    /// Discard the session from `store` for an explicit restart.
    pub fn restart(self, store: &mut dyn SessionStore) {
        SessionContext::clear(store);
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
