use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;

use anyhow::Context;
use kurbo::{Affine, BezPath, Circle, Rect, RoundedRect, Shape};
use tracing::{debug, warn};

use crate::assets::decode::{PreparedImage, decode_photos};
use crate::catalog::colors::FrameColor;
use crate::catalog::stickers::find_sticker;
use crate::compose::branding::{BrandBrush, BrandStyle, BrandTextEngine, layout_width};
use crate::compose::format::{CompositeImage, StripFormat};
use crate::foundation::{
    core::{Canvas, EncodedPhoto, Rgba8},
    error::{BoothError, BoothResult},
};
use crate::layout::strip::{LayoutParams, compute_strip_layout};
use crate::sticker::model::Sticker;

/// Outer padding of the strip, in pixels.
pub const PADDING: f64 = 60.0;

/// Gap between adjacent photo slots, in pixels.
pub const SPACING: f64 = 40.0;

const STRIPE_PITCH: f64 = 100.0;
const FRAME_INSET: f64 = 8.0;
const FRAME_RADIUS: f64 = 12.0;
const BORDER_INSET: f64 = 4.0;
const BORDER_RADIUS: f64 = 8.0;
const STICKER_GLYPH_SIZE: f64 = 20.0;
const STICKER_OUTLINE_WIDTH: f64 = 2.0;
const BRAND_TITLE_PX: f32 = 28.0;
const BRAND_TIMESTAMP_PX: f32 = 16.0;
const BRAND_DOT_RADIUS: f64 = 3.0;
const BRAND_DOT_RISE: f64 = 30.0;
const BRAND_TIMESTAMP_DROP: f64 = 30.0;
const SHADOW_OFFSET: f64 = 2.0;
const JPEG_QUALITY: u8 = 95;

/// Generates composite strip images.
///
/// Owns the Parley text contexts and the prepared branding font so repeated
/// regenerations reuse them. For fixed inputs (including the font bytes) the
/// output is byte-identical across runs.
pub struct StripComposer {
    text: BrandTextEngine,
    label: String,
    font_bytes: Option<Vec<u8>>,
    font_data: Option<vello_cpu::peniko::FontData>,
}

impl Default for StripComposer {
    fn default() -> Self {
        Self::new(BrandStyle::default())
    }
}

impl StripComposer {
    /// Composer with the given branding style.
    pub fn new(brand: BrandStyle) -> Self {
        let font_data = brand.font_bytes.as_ref().map(|bytes| {
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), 0)
        });
        Self {
            text: BrandTextEngine::new(),
            label: brand.label,
            font_bytes: brand.font_bytes,
            font_data,
        }
    }

    /// Compose `count` photos, the sticker overlay and the branding footer
    /// into a single encoded strip.
    ///
    /// Draw order is z-order: background, stripes, framed photos in array
    /// order, stickers in array order, branding. All photo decodes are joined
    /// before any drawing happens.
    #[tracing::instrument(skip_all, fields(
        format = format.as_str(),
        photos = photos.len(),
        stickers = stickers.len(),
    ))]
    pub fn generate(
        &mut self,
        format: StripFormat,
        photos: &[EncodedPhoto],
        count: usize,
        timestamp_label: &str,
        color: FrameColor,
        stickers: &[Sticker],
    ) -> BoothResult<CompositeImage> {
        if photos.len() != count {
            return Err(BoothError::validation(format!(
                "photo count mismatch: {} payloads for count {count}",
                photos.len()
            )));
        }

        let canvas = format.canvas();
        let (w16, h16) = surface_dimensions(canvas)?;
        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        let width = f64::from(canvas.width);
        let height = f64::from(canvas.height);

        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(color.primary));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, width, height));
        draw_diagonal_stripes(&mut ctx, width, height, color.secondary);

        let images = decode_photos(photos)?;
        debug!(decoded = images.len(), "photo sources resolved");

        let layout = compute_strip_layout(LayoutParams {
            count,
            canvas,
            padding: PADDING,
            spacing: SPACING,
            reserved: format.branding_reserve(),
            photo_aspect: format.photo_aspect(),
            primary: format.primary_axis(),
        })?;
        for (image, slot) in images.iter().zip(layout.photo_rects()) {
            draw_framed_photo(&mut ctx, image, slot, color, format.photo_aspect())?;
        }

        for sticker in stickers {
            draw_sticker(&mut ctx, sticker, canvas);
        }

        self.draw_branding(&mut ctx, canvas, timestamp_label);

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);

        let jpeg = encode_jpeg(&pixmap, canvas)?;
        Ok(CompositeImage {
            format,
            width: canvas.width,
            height: canvas.height,
            jpeg,
        })
    }

    fn draw_branding(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        canvas: Canvas,
        timestamp_label: &str,
    ) {
        let center_x = f64::from(canvas.width) / 2.0;
        let baseline_y = f64::from(canvas.height) - PADDING;

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(Rgba8::WHITE));
        let dot = Circle::new((center_x, baseline_y - BRAND_DOT_RISE), BRAND_DOT_RADIUS);
        ctx.fill_path(&bezpath_to_cpu(&dot.to_path(0.1)));

        let (Some(bytes), Some(font)) = (self.font_bytes.clone(), self.font_data.clone()) else {
            warn!("no branding font configured, skipping footer text");
            return;
        };
        let label = self.label.clone();

        let mut draw_line = |text: &str, size_px: f32, baseline: f64| {
            if text.is_empty() {
                return;
            }
            let layout = match self
                .text
                .layout_line(text, &bytes, size_px, BrandBrush::from(Rgba8::WHITE))
            {
                Ok(layout) => layout,
                Err(err) => {
                    warn!(%err, "branding text layout failed, skipping footer text");
                    return;
                }
            };
            let x0 = center_x - layout_width(&layout) / 2.0;
            // Drop shadow pass under the white text.
            draw_text_layout(
                ctx,
                &font,
                &layout,
                x0 + SHADOW_OFFSET,
                baseline + SHADOW_OFFSET,
                Rgba8::rgba(0, 0, 0, 64),
            );
            draw_text_layout(ctx, &font, &layout, x0, baseline, Rgba8::WHITE);
        };

        draw_line(&label, BRAND_TITLE_PX, baseline_y);
        draw_line(
            timestamp_label,
            BRAND_TIMESTAMP_PX,
            baseline_y + BRAND_TIMESTAMP_DROP,
        );
    }
}

/// Center-crop rectangle of a `src_width` x `src_height` source so the crop
/// matches `target_aspect` (width/height), trimming the longer dimension's
/// excess symmetrically. A source that already matches the target aspect is
/// returned uncropped.
pub fn center_crop_rect(src_width: u32, src_height: u32, target_aspect: f64) -> Rect {
    let w = f64::from(src_width);
    let h = f64::from(src_height);
    let src_aspect = w / h;

    if src_aspect > target_aspect {
        // Wider than target: trim the sides.
        let crop_w = h * target_aspect;
        let x0 = (w - crop_w) / 2.0;
        Rect::new(x0, 0.0, x0 + crop_w, h)
    } else if src_aspect < target_aspect {
        // Taller than target: trim top and bottom.
        let crop_h = w / target_aspect;
        let y0 = (h - crop_h) / 2.0;
        Rect::new(0.0, y0, w, y0 + crop_h)
    } else {
        Rect::new(0.0, 0.0, w, h)
    }
}

fn surface_dimensions(canvas: Canvas) -> BoothResult<(u16, u16)> {
    let w = canvas
        .width
        .try_into()
        .map_err(|_| BoothError::render("drawing surface width exceeds u16"))?;
    let h = canvas
        .height
        .try_into()
        .map_err(|_| BoothError::render("drawing surface height exceeds u16"))?;
    Ok((w, h))
}

fn draw_diagonal_stripes(
    ctx: &mut vello_cpu::RenderContext,
    width: f64,
    height: f64,
    color: Rgba8,
) {
    // 45-degree stripes tiled from -height to width+height so the full canvas
    // stays covered after the slant.
    let run = height * FRAC_PI_4.cos();
    let drop = height * FRAC_PI_4.sin();

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(color));
    let mut x = -height;
    while x < width + height {
        let mut stripe = BezPath::new();
        stripe.move_to((x, 0.0));
        stripe.line_to((x + run, drop));
        stripe.line_to((x + STRIPE_PITCH + run, drop));
        stripe.line_to((x + STRIPE_PITCH, 0.0));
        stripe.close_path();
        ctx.fill_path(&bezpath_to_cpu(&stripe));
        x += STRIPE_PITCH;
    }
}

fn draw_framed_photo(
    ctx: &mut vello_cpu::RenderContext,
    image: &PreparedImage,
    slot: Rect,
    color: FrameColor,
    photo_aspect: f64,
) -> BoothResult<()> {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    // Layered stack: colored frame, white border, then the photo itself.
    ctx.set_paint(color_to_cpu(color.primary));
    let frame = RoundedRect::from_rect(slot.inflate(FRAME_INSET, FRAME_INSET), FRAME_RADIUS);
    ctx.fill_path(&bezpath_to_cpu(&frame.to_path(0.1)));

    ctx.set_paint(color_to_cpu(Rgba8::WHITE));
    let border = RoundedRect::from_rect(slot.inflate(BORDER_INSET, BORDER_INSET), BORDER_RADIUS);
    ctx.fill_path(&bezpath_to_cpu(&border.to_path(0.1)));

    let crop = center_crop_rect(image.width, image.height, photo_aspect);
    let sx = slot.width() / crop.width();
    let sy = slot.height() / crop.height();
    // Map the crop rectangle in source space onto the slot; the image paint
    // is anchored at the local origin, so filling the crop rect under this
    // transform draws exactly the cropped region.
    let tr = Affine::translate((slot.x0, slot.y0))
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate((-crop.x0, -crop.y0));
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(image_paint(image)?);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        crop.x0, crop.y0, crop.x1, crop.y1,
    ));
    Ok(())
}

fn draw_sticker(ctx: &mut vello_cpu::RenderContext, sticker: &Sticker, canvas: Canvas) {
    let Some(def) = find_sticker(&sticker.kind) else {
        warn!(kind = %sticker.kind, "unknown sticker kind, skipping");
        return;
    };
    let Some(glyph) = def.glyph else {
        debug!(kind = %sticker.kind, "sticker kind has no export glyph, skipping");
        return;
    };

    let anchor = sticker.pixel_position(canvas);
    let tr = Affine::translate((anchor.x, anchor.y))
        * Affine::rotate(sticker.rotation_deg.to_radians())
        * Affine::scale(sticker.scale);
    ctx.set_transform(affine_to_cpu(tr));

    let path = glyph(STICKER_GLYPH_SIZE);
    ctx.set_paint(color_to_cpu(def.color));
    ctx.fill_path(&bezpath_to_cpu(&path));

    let outline = kurbo::stroke(
        path.elements().iter().copied(),
        &kurbo::Stroke::new(STICKER_OUTLINE_WIDTH),
        &kurbo::StrokeOpts::default(),
        0.1,
    );
    ctx.set_paint(color_to_cpu(Rgba8::WHITE));
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn draw_text_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<BrandBrush>,
    origin_x: f64,
    baseline_y: f64,
    color: Rgba8,
) {
    let Some(first_line) = layout.lines().next() else {
        return;
    };
    let ascent = f64::from(first_line.metrics().ascent);
    ctx.set_transform(affine_to_cpu(Affine::translate((
        origin_x,
        baseline_y - ascent,
    ))));
    ctx.set_paint(color_to_cpu(color));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn encode_jpeg(pixmap: &vello_cpu::Pixmap, canvas: Canvas) -> BoothResult<Vec<u8>> {
    let premul = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity((canvas.width as usize) * (canvas.height as usize) * 3);
    for px in premul.chunks_exact(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            rgb.extend_from_slice(&[0, 0, 0]);
        } else if a == 255 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            for c in &px[..3] {
                rgb.push(((u16::from(*c) * 255 + a / 2) / a).min(255) as u8);
            }
        }
    }

    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    encoder
        .encode(
            &rgb,
            canvas.width,
            canvas.height,
            image::ExtendedColorType::Rgb8,
        )
        .context("encode composite jpeg")?;
    Ok(out)
}

fn image_paint(image: &PreparedImage) -> BoothResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> BoothResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BoothError::render("photo width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BoothError::render("photo height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(BoothError::render("photo byte length mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/generator.rs"]
mod tests;
