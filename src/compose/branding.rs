use std::borrow::Cow;

use crate::foundation::{core::Rgba8, error::{BoothError, BoothResult}};

/// Default branding label drawn above the timestamp line.
pub(crate) const BRAND_LABEL: &str = "stripbooth";

/// Branding footer configuration.
///
/// Text rendering needs explicit font bytes; without them the compositor
/// draws the decorative dot only and logs a warning. This keeps generation
/// deterministic and host-font independent.
#[derive(Clone, Debug)]
pub struct BrandStyle {
    /// Label drawn above the timestamp line.
    pub label: String,
    /// Raw font file bytes (TTF/OTF) used for both footer lines.
    pub font_bytes: Option<Vec<u8>>,
}

impl Default for BrandStyle {
    fn default() -> Self {
        Self {
            label: BRAND_LABEL.to_string(),
            font_bytes: None,
        }
    }
}

impl BrandStyle {
    /// Default label with a concrete footer font.
    pub fn with_font_bytes(bytes: Vec<u8>) -> Self {
        Self {
            font_bytes: Some(bytes),
            ..Self::default()
        }
    }
}

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrandBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for BrandBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Shapes and lays out footer text with Parley from explicit font bytes.
pub struct BrandTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<BrandBrush>,
}

impl Default for BrandTextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandTextEngine {
    /// Construct a new engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single line using the provided font bytes.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: BrandBrush,
    ) -> BoothResult<parley::Layout<BrandBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BoothError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BoothError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BoothError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<BrandBrush> = builder.build(text);
        layout.break_all_lines(None);

        Ok(layout)
    }
}

/// Maximum advance width of a laid-out line, in pixels.
pub(crate) fn layout_width(layout: &parley::Layout<BrandBrush>) -> f64 {
    let mut w = 0.0f64;
    for line in layout.lines() {
        w = w.max(f64::from(line.metrics().advance));
    }
    w
}

#[cfg(test)]
#[path = "../../tests/unit/compose/branding.rs"]
mod tests;
