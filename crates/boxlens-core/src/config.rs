#![forbid(unsafe_code)]

//! Inspector and panel configuration.

use crate::color::DepthPalette;
use crate::mode::VisualOptions;

/// Numeric knobs of the page inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    /// Smallest width/height (px) that hover mode highlights.
    pub hover_min_size: f64,
    /// Smallest width/height (px) that outline mode boxes. Stricter than
    /// hover since every qualifying element is drawn at once.
    pub outline_min_size: f64,
    /// Outline boxes get a label only when strictly wider than this.
    pub outline_label_min_width: f64,
    /// Outline boxes get a label only when strictly taller than this.
    pub outline_label_min_height: f64,
    /// Distance (px) of the hover label above the target's top edge.
    pub hover_label_offset: f64,
    /// Outline box z-index is `outline_z_base + depth`.
    pub outline_z_base: u32,
    /// z-index of the hover highlight.
    pub highlight_z_index: u32,
    /// z-index of the hover label.
    pub label_z_index: u32,
    /// Depth colors.
    pub palette: DepthPalette,
    /// Options in effect before the first message arrives.
    pub initial_options: VisualOptions,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            hover_min_size: 5.0,
            outline_min_size: 10.0,
            outline_label_min_width: 50.0,
            outline_label_min_height: 20.0,
            hover_label_offset: 25.0,
            outline_z_base: 9000,
            highlight_z_index: 9999,
            label_z_index: 10000,
            palette: DepthPalette::default(),
            initial_options: VisualOptions::DEFAULT,
        }
    }
}

impl InspectorConfig {
    /// Set the hover size threshold.
    #[must_use]
    pub fn with_hover_min_size(mut self, px: f64) -> Self {
        self.hover_min_size = px;
        self
    }

    /// Set the outline size threshold.
    #[must_use]
    pub fn with_outline_min_size(mut self, px: f64) -> Self {
        self.outline_min_size = px;
        self
    }

    /// Set the depth palette.
    #[must_use]
    pub fn with_palette(mut self, palette: DepthPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the options used before any message arrives.
    #[must_use]
    pub fn with_initial_options(mut self, options: VisualOptions) -> Self {
        self.initial_options = options;
        self
    }

    /// z-index of an outline box at `depth`.
    #[inline]
    pub fn outline_z_index(&self, depth: u32) -> u32 {
        self.outline_z_base.saturating_add(depth)
    }
}

/// Control panel defaults, mirroring the popup markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Initial control values.
    pub defaults: VisualOptions,
    /// Slider minimum.
    pub depth_min: u32,
    /// Slider maximum.
    pub depth_max: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            defaults: VisualOptions::DEFAULT,
            depth_min: 0,
            depth_max: 20,
        }
    }
}

impl PanelConfig {
    /// Set the initial control values.
    #[must_use]
    pub fn with_defaults(mut self, defaults: VisualOptions) -> Self {
        self.defaults = defaults;
        self
    }
}
