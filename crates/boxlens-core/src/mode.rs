#![forbid(unsafe_code)]

//! Inspector modes and visualization options.

use serde::{Deserialize, Serialize};

/// Visualization mode of a page inspector.
///
/// Exactly one mode is active per page. The page inspector owns it; the
/// control panel only mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No overlays, no listeners.
    #[default]
    Disabled,
    /// Highlight the element under the pointer.
    Hover,
    /// Outline every visible element at once.
    Outline,
}

impl Mode {
    /// All modes, in control-panel button order.
    pub const ALL: [Mode; 3] = [Mode::Hover, Mode::Outline, Mode::Disabled];

    /// Check if the mode draws anything.
    #[inline]
    pub fn is_active(self) -> bool {
        self != Self::Disabled
    }

    /// Stable wire/diagnostic name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Hover => "hover",
            Self::Outline => "outline",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "disabled" => Some(Self::Disabled),
            "hover" => Some(Self::Hover),
            "outline" => Some(Self::Outline),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied to every render of the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualOptions {
    /// Show tag/size labels.
    pub show_dimensions: bool,
    /// Fill and border overlays with depth colors.
    pub show_borders: bool,
    /// Deepest element outlined in outline mode.
    pub max_depth: u32,
}

impl VisualOptions {
    /// Defaults of a freshly loaded page or panel.
    pub const DEFAULT: Self = Self {
        show_dimensions: true,
        show_borders: true,
        max_depth: 10,
    };

    /// Set dimension labels on/off.
    #[must_use]
    pub const fn with_dimensions(mut self, on: bool) -> Self {
        self.show_dimensions = on;
        self
    }

    /// Set depth coloring on/off.
    #[must_use]
    pub const fn with_borders(mut self, on: bool) -> Self {
        self.show_borders = on;
        self
    }

    /// Set the outline depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
