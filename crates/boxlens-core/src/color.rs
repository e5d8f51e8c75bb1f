#![forbid(unsafe_code)]

//! Depth-keyed overlay colors.
//!
//! Every nesting level gets its own hue, `hue = (depth × step) mod 360`, so
//! elements at the same depth always share a color and the palette repeats
//! every `360 / step` levels (12 with the default step of 30).

/// An `hsla()` CSS color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, `0..360`.
    pub hue: u32,
    /// Saturation percentage.
    pub saturation: u8,
    /// Lightness percentage.
    pub lightness: u8,
    /// Alpha, `0.0..=1.0`.
    pub alpha: f32,
}

impl Hsla {
    /// Create a new color.
    pub const fn new(hue: u32, saturation: u8, lightness: u8, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Hue for a nesting depth.
#[inline]
pub fn depth_hue(depth: u32, step: u32) -> u32 {
    ((u64::from(depth) * u64::from(step)) % 360) as u32
}

/// Fill/border color pair generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPalette {
    /// Degrees of hue per nesting level.
    pub hue_step: u32,
    pub saturation: u8,
    pub lightness: u8,
    /// Alpha of the translucent fill.
    pub fill_alpha: f32,
    /// Alpha of the border.
    pub border_alpha: f32,
}

impl Default for DepthPalette {
    fn default() -> Self {
        Self {
            hue_step: 30,
            saturation: 90,
            lightness: 50,
            fill_alpha: 0.2,
            border_alpha: 0.8,
        }
    }
}

impl DepthPalette {
    /// Hue used for `depth`.
    #[inline]
    pub fn hue(&self, depth: u32) -> u32 {
        depth_hue(depth, self.hue_step)
    }

    /// Translucent fill for `depth`.
    pub fn fill(&self, depth: u32) -> Hsla {
        Hsla::new(
            self.hue(depth),
            self.saturation,
            self.lightness,
            self.fill_alpha,
        )
    }

    /// Border color for `depth`.
    pub fn border(&self, depth: u32) -> Hsla {
        Hsla::new(
            self.hue(depth),
            self.saturation,
            self.lightness,
            self.border_alpha,
        )
    }

    /// CSS `border` shorthand for `depth`.
    pub fn border_css(&self, depth: u32) -> String {
        format!("1px solid {}", self.border(depth))
    }
}
