use crate::foundation::core::Rgba8;

/// A fixed frame color theme: background fill plus stripe accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameColor {
    /// Unique display name, the selection key.
    pub name: &'static str,
    /// Background and photo-frame fill.
    pub primary: Rgba8,
    /// Diagonal stripe accent.
    pub secondary: Rgba8,
}

/// The fixed catalog of selectable frame color themes.
pub const FRAME_COLORS: &[FrameColor] = &[
    FrameColor {
        name: "Navy",
        primary: Rgba8::rgb(0x1a, 0x23, 0x7e),
        secondary: Rgba8::rgb(0x28, 0x35, 0x93),
    },
    FrameColor {
        name: "Pink",
        primary: Rgba8::rgb(0xff, 0xe4, 0xe9),
        secondary: Rgba8::rgb(0xff, 0xd1, 0xd9),
    },
    FrameColor {
        name: "Sunset",
        primary: Rgba8::rgb(0xff, 0x9a, 0x9e),
        secondary: Rgba8::rgb(0xfa, 0xd0, 0xc4),
    },
    FrameColor {
        name: "Mint",
        primary: Rgba8::rgb(0xa8, 0xed, 0xea),
        secondary: Rgba8::rgb(0xfe, 0xd6, 0xe3),
    },
    FrameColor {
        name: "Purple",
        primary: Rgba8::rgb(0xa1, 0x8c, 0xd1),
        secondary: Rgba8::rgb(0xfb, 0xc2, 0xeb),
    },
    FrameColor {
        name: "Ocean",
        primary: Rgba8::rgb(0x4f, 0xac, 0xfe),
        secondary: Rgba8::rgb(0x00, 0xf2, 0xfe),
    },
    FrameColor {
        name: "Forest",
        primary: Rgba8::rgb(0x43, 0xe9, 0x7b),
        secondary: Rgba8::rgb(0x38, 0xf9, 0xd7),
    },
    FrameColor {
        name: "Autumn",
        primary: Rgba8::rgb(0xfa, 0x70, 0x9a),
        secondary: Rgba8::rgb(0xfe, 0xe1, 0x40),
    },
    FrameColor {
        name: "Night",
        primary: Rgba8::rgb(0x30, 0xcf, 0xd0),
        secondary: Rgba8::rgb(0x33, 0x08, 0x67),
    },
    FrameColor {
        name: "Coral",
        primary: Rgba8::rgb(0xff, 0x81, 0x77),
        secondary: Rgba8::rgb(0xff, 0x86, 0x7a),
    },
];

/// Look up a frame color theme by name.
pub fn find_color(name: &str) -> Option<FrameColor> {
    FRAME_COLORS.iter().find(|c| c.name == name).copied()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/colors.rs"]
mod tests;
