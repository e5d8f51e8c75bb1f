#![forbid(unsafe_code)]

//! Dimension label text.

use crate::geometry::Rect;

/// Identity of a page element as shown in labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    /// Tag name as reported by the DOM (any case).
    pub tag_name: String,
    /// `id` attribute, empty if absent.
    pub id: String,
    /// Raw `class` attribute, empty if absent.
    pub class_name: String,
}

impl ElementInfo {
    /// Create info for a bare tag.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Set the `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the raw `class` attribute.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// CSS-selector-like name: `div#nav.a.b`.
    ///
    /// The tag is lower-cased; the id and class fragments appear only when
    /// non-empty, one `.` per whitespace-separated class.
    pub fn selector(&self) -> String {
        let mut out = self.tag_name.to_lowercase();
        if !self.id.is_empty() {
            out.push('#');
            out.push_str(&self.id);
        }
        for class in self.class_name.split_whitespace() {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

/// `120×40` from a rect's rounded size.
pub fn dimensions(rect: &Rect) -> String {
    let (w, h) = rect.rounded_size();
    format!("{w}×{h}")
}

/// Hover label: `div#nav.a.b 120×40`.
pub fn hover_label(info: &ElementInfo, rect: &Rect) -> String {
    format!("{} {}", info.selector(), dimensions(rect))
}

/// Outline label: `div 120×40` (tag only).
pub fn outline_label(info: &ElementInfo, rect: &Rect) -> String {
    format!("{} {}", info.tag_name.to_lowercase(), dimensions(rect))
}
