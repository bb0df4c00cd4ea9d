use crate::foundation::core::Canvas;
use crate::layout::strip::Axis;

/// Target shape of the composite strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripFormat {
    /// 1080x1920 story-style strip, photos stacked vertically.
    Portrait,
    /// 1920x1080 strip, photos side by side.
    Landscape,
}

impl StripFormat {
    /// Fixed canvas dimensions for this format.
    pub fn canvas(self) -> Canvas {
        match self {
            StripFormat::Portrait => Canvas {
                width: 1080,
                height: 1920,
            },
            StripFormat::Landscape => Canvas {
                width: 1920,
                height: 1080,
            },
        }
    }

    /// Target width/height ratio of each photo slot.
    pub fn photo_aspect(self) -> f64 {
        match self {
            StripFormat::Portrait => 9.0 / 16.0,
            StripFormat::Landscape => 16.0 / 9.0,
        }
    }

    /// Axis along which photos are stacked.
    pub fn primary_axis(self) -> Axis {
        match self {
            StripFormat::Portrait => Axis::Vertical,
            StripFormat::Landscape => Axis::Horizontal,
        }
    }

    /// Extra primary-axis pixels reserved for the branding footer.
    pub fn branding_reserve(self) -> f64 {
        match self {
            StripFormat::Portrait => 100.0,
            StripFormat::Landscape => 0.0,
        }
    }

    /// Stable lowercase tag used in filenames and the session store.
    pub fn as_str(self) -> &'static str {
        match self {
            StripFormat::Portrait => "portrait",
            StripFormat::Landscape => "landscape",
        }
    }

    /// Parse a stored format tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "portrait" => Some(StripFormat::Portrait),
            "landscape" => Some(StripFormat::Landscape),
            _ => None,
        }
    }
}

/// The encoded composite plus the format used to produce it.
///
/// Regenerated wholesale whenever any input changes; the previous output is
/// replaced, not versioned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeImage {
    /// Format the composite was generated for.
    pub format: StripFormat,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded JPEG payload.
    pub jpeg: Vec<u8>,
}

/// Download filename for a composite: format tag plus a disambiguator derived
/// from the capture timestamp.
pub fn download_file_name(format: StripFormat, timestamp_label: &str) -> String {
    let slug: String = timestamp_label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        format!("stripbooth_{}.jpg", format.as_str())
    } else {
        format!("stripbooth_{}_{slug}.jpg", format.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/format.rs"]
mod tests;
