#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.

/// A point in CSS pixels. Used for scroll offsets and label anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (no scroll).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
}

/// An axis-aligned rectangle in CSS pixels.
///
/// A rect reported by the host is viewport-relative (like
/// `getBoundingClientRect`). Use [`Rect::to_page`] to anchor it to the
/// document so overlays keep tracking the element while scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Both sides are at least `min` pixels.
    ///
    /// NaN dimensions never qualify.
    #[inline]
    pub fn meets_min_size(&self, min: f64) -> bool {
        self.width >= min && self.height >= min
    }

    /// Both sides strictly exceed the given width and height.
    #[inline]
    pub fn exceeds(&self, width: f64, height: f64) -> bool {
        self.width > width && self.height > height
    }

    /// Translate by a scroll offset, turning a viewport rect into a page rect.
    #[inline]
    pub fn to_page(&self, scroll: Point) -> Rect {
        Rect::new(self.x + scroll.x, self.y + scroll.y, self.width, self.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height rounded to whole pixels, as shown in labels.
    #[inline]
    pub fn rounded_size(&self) -> (i64, i64) {
        (self.width.round() as i64, self.height.round() as i64)
    }
}

/// Format a pixel length the way inline styles expect it (`12px`, `12.5px`).
pub fn px(value: f64) -> String {
    format!("{value}px")
}
