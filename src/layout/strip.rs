use kurbo::Rect;

use crate::foundation::{
    core::Canvas,
    error::{BoothError, BoothResult},
};

/// The axis along which photos are stacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Photos run left to right (landscape strips).
    Horizontal,
    /// Photos run top to bottom (portrait strips).
    Vertical,
}

/// Inputs to one layout computation.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    /// Number of photo slots, `>= 1`.
    pub count: usize,
    /// Target canvas dimensions.
    pub canvas: Canvas,
    /// Outer padding on the primary axis, in pixels.
    pub padding: f64,
    /// Gap between adjacent photos on the primary axis, in pixels.
    pub spacing: f64,
    /// Extra primary-axis reserve (branding footer), in pixels.
    pub reserved: f64,
    /// Target width/height ratio of each photo slot.
    pub photo_aspect: f64,
    /// Stacking axis.
    pub primary: Axis,
}

/// Derived photo slot geometry for one render pass. Never mutated after
/// computation.
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    /// Slot width in pixels.
    pub photo_width: f64,
    /// Slot height in pixels.
    pub photo_height: f64,
    /// Top (vertical) or left (horizontal) coordinate of each slot along the
    /// primary axis, in array order.
    pub primary_positions: Vec<f64>,
    /// Centered offset on the cross axis.
    pub cross_offset: f64,
    /// Stacking axis the positions refer to.
    pub primary: Axis,
}

impl StripLayout {
    /// Pixel rectangle of each photo slot, in array order.
    pub fn photo_rects(&self) -> Vec<Rect> {
        self.primary_positions
            .iter()
            .map(|&pos| match self.primary {
                Axis::Vertical => Rect::new(
                    self.cross_offset,
                    pos,
                    self.cross_offset + self.photo_width,
                    pos + self.photo_height,
                ),
                Axis::Horizontal => Rect::new(
                    pos,
                    self.cross_offset,
                    pos + self.photo_width,
                    self.cross_offset + self.photo_height,
                ),
            })
            .collect()
    }
}

/// Compute per-photo size and positions so `count` photos fit the canvas
/// without overlap, preserving `photo_aspect` and uniform padding/spacing.
///
/// A single photo fills the available primary extent; multiple photos divide
/// it evenly. The cross-axis size is derived from the aspect ratio; if it
/// would overflow the canvas, the computation flips and derives the primary
/// size from the cross axis instead. Output is deterministic for identical
/// inputs.
pub fn compute_strip_layout(params: LayoutParams) -> BoothResult<StripLayout> {
    if params.count == 0 {
        return Err(BoothError::validation("layout requires at least one photo"));
    }
    if !(params.photo_aspect.is_finite() && params.photo_aspect > 0.0) {
        return Err(BoothError::validation(
            "photo_aspect must be finite and > 0",
        ));
    }

    let (primary_dim, cross_dim) = match params.primary {
        Axis::Vertical => (
            f64::from(params.canvas.height),
            f64::from(params.canvas.width),
        ),
        Axis::Horizontal => (
            f64::from(params.canvas.width),
            f64::from(params.canvas.height),
        ),
    };

    let total_spacing = params.spacing * (params.count as f64 - 1.0);
    let available = primary_dim - 2.0 * params.padding - params.reserved - total_spacing;
    let cross_available = cross_dim - 2.0 * params.padding;
    if available <= 0.0 || cross_available <= 0.0 {
        return Err(BoothError::validation(
            "canvas too small for requested padding/spacing",
        ));
    }

    let mut primary_size = available / params.count as f64;
    let mut cross_size = match params.primary {
        // Primary is height: width = height * aspect.
        Axis::Vertical => primary_size * params.photo_aspect,
        // Primary is width: height = width / aspect.
        Axis::Horizontal => primary_size / params.photo_aspect,
    };

    // Dimension-flip fallback: when the derived cross size overflows, derive
    // the primary size from the cross axis instead.
    if cross_size > cross_available {
        cross_size = cross_available;
        primary_size = match params.primary {
            Axis::Vertical => cross_size / params.photo_aspect,
            Axis::Horizontal => cross_size * params.photo_aspect,
        };
    }

    let primary_positions = (0..params.count)
        .map(|i| params.padding + i as f64 * (primary_size + params.spacing))
        .collect();
    let cross_offset = (cross_dim - cross_size) / 2.0;

    let (photo_width, photo_height) = match params.primary {
        Axis::Vertical => (cross_size, primary_size),
        Axis::Horizontal => (primary_size, cross_size),
    };

    Ok(StripLayout {
        photo_width,
        photo_height,
        primary_positions,
        cross_offset,
        primary: params.primary,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/strip.rs"]
mod tests;
