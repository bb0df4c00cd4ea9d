use kurbo::BezPath;

use crate::foundation::core::Rgba8;

/// Builds a sticker glyph outline at the given nominal size in pixels.
pub type GlyphFn = fn(f64) -> BezPath;

/// A static catalog entry: a named sticker definition, distinct from a
/// placed [`Sticker`](crate::Sticker) instance.
#[derive(Clone, Copy, Debug)]
pub struct StickerDef {
    /// Unique symbolic type key.
    pub kind: &'static str,
    /// Glyph fill color.
    pub color: Rgba8,
    /// Vector outline for the compositor. Entries without one are picker-only
    /// and are skipped at export time.
    pub glyph: Option<GlyphFn>,
}

/// The fixed sticker catalog.
///
/// Only `heart` and `star` carry export glyphs; the remaining kinds exist for
/// the UI picker and render nothing in the composite.
pub const AVAILABLE_STICKERS: &[StickerDef] = &[
    StickerDef {
        kind: "heart",
        color: Rgba8::rgb(0xff, 0x40, 0x81),
        glyph: Some(heart_glyph),
    },
    StickerDef {
        kind: "star",
        color: Rgba8::rgb(0xff, 0xd7, 0x00),
        glyph: Some(star_glyph),
    },
    StickerDef {
        kind: "smile",
        color: Rgba8::rgb(0xff, 0xb7, 0x4d),
        glyph: None,
    },
    StickerDef {
        kind: "music",
        color: Rgba8::rgb(0x9c, 0x27, 0xb0),
        glyph: None,
    },
    StickerDef {
        kind: "coffee",
        color: Rgba8::rgb(0x79, 0x55, 0x48),
        glyph: None,
    },
    StickerDef {
        kind: "sun",
        color: Rgba8::rgb(0xff, 0xc1, 0x07),
        glyph: None,
    },
    StickerDef {
        kind: "camera",
        color: Rgba8::rgb(0x21, 0x96, 0xf3),
        glyph: None,
    },
    StickerDef {
        kind: "sparkles",
        color: Rgba8::rgb(0xff, 0xeb, 0x3b),
        glyph: None,
    },
    StickerDef {
        kind: "cloud",
        color: Rgba8::rgb(0x90, 0xca, 0xf9),
        glyph: None,
    },
    StickerDef {
        kind: "flower",
        color: Rgba8::rgb(0xf0, 0x62, 0x92),
        glyph: None,
    },
    StickerDef {
        kind: "crown",
        color: Rgba8::rgb(0xff, 0xd7, 0x00),
        glyph: None,
    },
    StickerDef {
        kind: "diamond",
        color: Rgba8::rgb(0xb3, 0x9d, 0xdb),
        glyph: None,
    },
    StickerDef {
        kind: "gift",
        color: Rgba8::rgb(0xec, 0x40, 0x7a),
        glyph: None,
    },
    StickerDef {
        kind: "moon",
        color: Rgba8::rgb(0x5c, 0x6b, 0xc0),
        glyph: None,
    },
    StickerDef {
        kind: "cat",
        color: Rgba8::rgb(0x78, 0x90, 0x9c),
        glyph: None,
    },
    StickerDef {
        kind: "dog",
        color: Rgba8::rgb(0x8d, 0x6e, 0x63),
        glyph: None,
    },
    StickerDef {
        kind: "cake",
        color: Rgba8::rgb(0xe9, 0x1e, 0x63),
        glyph: None,
    },
    StickerDef {
        kind: "pizza",
        color: Rgba8::rgb(0xff, 0x57, 0x22),
        glyph: None,
    },
    StickerDef {
        kind: "rocket",
        color: Rgba8::rgb(0x3f, 0x51, 0xb5),
        glyph: None,
    },
    StickerDef {
        kind: "icecream",
        color: Rgba8::rgb(0xe9, 0x1e, 0x63),
        glyph: None,
    },
];

/// Look up a catalog entry by kind. Unknown kinds return `None` and are
/// skipped at draw time.
pub fn find_sticker(kind: &str) -> Option<&'static StickerDef> {
    AVAILABLE_STICKERS.iter().find(|s| s.kind == kind)
}

/// Quadratic-Bezier heart outline with its top-left lobe at the origin,
/// spanning `size` in both axes.
fn heart_glyph(size: f64) -> BezPath {
    let s = size;
    let mut p = BezPath::new();
    p.move_to((0.0, s / 4.0));
    p.quad_to((0.0, 0.0), (s / 4.0, 0.0));
    p.quad_to((s / 2.0, 0.0), (s / 2.0, s / 4.0));
    p.quad_to((s / 2.0, 0.0), (s * 3.0 / 4.0, 0.0));
    p.quad_to((s, 0.0), (s, s / 4.0));
    p.quad_to((s, s / 2.0), (s / 2.0, s));
    p.quad_to((0.0, s / 2.0), (0.0, s / 4.0));
    p.close_path();
    p
}

/// Five-point star centered at the origin with outer radius `size`.
fn star_glyph(size: f64) -> BezPath {
    star_path(size, 5)
}

fn star_path(size: f64, points: u32) -> BezPath {
    let mut p = BezPath::new();
    for i in 0..points * 2 {
        let radius = if i % 2 == 0 { size } else { size / 2.0 };
        let angle = f64::from(i) * std::f64::consts::PI / f64::from(points);
        let pt = (radius * angle.cos(), radius * angle.sin());
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/stickers.rs"]
mod tests;
