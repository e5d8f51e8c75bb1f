#![forbid(unsafe_code)]

//! Hover highlighting: one reusable highlight box plus one label box.

use boxlens_core::geometry::px;
use boxlens_core::label::hover_label;
use boxlens_core::{Declarations, InspectorConfig, PageHost, Point, Rect, VisualOptions, depth};

/// Where and what to draw for one hovered element.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverFrame {
    /// Target rect in document coordinates.
    pub page_rect: Rect,
    /// Nesting depth of the target.
    pub depth: u32,
    /// Label text and anchor, when dimensions are shown.
    pub label: Option<LabelPlacement>,
}

/// A positioned label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub anchor: Point,
}

impl HoverFrame {
    /// Measure `target`. Returns `None` when it is too small to highlight.
    ///
    /// Self-exclusion is the caller's job; this only looks at the page.
    pub fn measure<H: PageHost + ?Sized>(
        host: &H,
        target: &H::Node,
        options: &VisualOptions,
        config: &InspectorConfig,
    ) -> Option<Self> {
        let rect = host.bounding_rect(target);
        if !rect.meets_min_size(config.hover_min_size) {
            return None;
        }
        let page_rect = rect.to_page(host.scroll_offset());
        let label = options.show_dimensions.then(|| LabelPlacement {
            text: hover_label(&host.element_info(target), &rect),
            anchor: Point::new(page_rect.x, page_rect.y - config.hover_label_offset),
        });
        Some(Self {
            page_rect,
            depth: depth(host, target),
            label,
        })
    }

    /// Inline style of the highlight box for this frame.
    pub fn highlight_style(&self, options: &VisualOptions, config: &InspectorConfig) -> Declarations {
        let r = self.page_rect;
        let style = Declarations::new()
            .set("top", px(r.y))
            .set("left", px(r.x))
            .set("width", px(r.width))
            .set("height", px(r.height));
        if options.show_borders {
            style
                .set("background-color", config.palette.fill(self.depth).to_string())
                .set("border", config.palette.border_css(self.depth))
                .set("box-sizing", "border-box")
        } else {
            cleared_highlight_style_into(style)
        }
    }

    /// Inline style of the label box for this frame.
    pub fn label_style(&self) -> Declarations {
        match &self.label {
            Some(label) => Declarations::new()
                .set("top", px(label.anchor.y))
                .set("left", px(label.anchor.x))
                .set("display", "block"),
            None => hidden_label_style(),
        }
    }
}

fn cleared_highlight_style_into(style: Declarations) -> Declarations {
    style
        .set("background-color", "transparent")
        .set("border", "none")
}

/// Highlight style after the pointer leaves.
pub fn cleared_highlight_style() -> Declarations {
    cleared_highlight_style_into(Declarations::new())
}

/// Label style while nothing is labelled.
pub fn hidden_label_style() -> Declarations {
    Declarations::new().set("display", "none")
}

/// The two nodes hover mode draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverOverlay<N> {
    pub highlight: N,
    pub label: N,
}

impl<N: Clone + PartialEq> HoverOverlay<N> {
    /// Create both nodes, style them and append them to the body.
    ///
    /// Returns `None` if the host could not create them; anything half-built
    /// is removed again.
    pub fn create<H>(host: &mut H, config: &InspectorConfig) -> Option<Self>
    where
        H: PageHost<Node = N> + ?Sized,
    {
        let highlight = host.create_element("div")?;
        let Some(label) = host.create_element("div") else {
            host.remove(&highlight);
            return None;
        };

        host.apply_style(&highlight, &base_highlight_style(config));
        host.apply_style(&label, &base_label_style(config));
        host.append_to_body(&highlight);
        host.append_to_body(&label);
        Some(Self { highlight, label })
    }

    /// Check if `node` is one of the overlay's own nodes.
    #[inline]
    pub fn owns(&self, node: &N) -> bool {
        *node == self.highlight || *node == self.label
    }

    /// Draw `frame`.
    pub fn show<H>(
        &self,
        host: &mut H,
        frame: &HoverFrame,
        options: &VisualOptions,
        config: &InspectorConfig,
    ) where
        H: PageHost<Node = N> + ?Sized,
    {
        host.apply_style(&self.highlight, &frame.highlight_style(options, config));
        if let Some(label) = &frame.label {
            host.set_text(&self.label, &label.text);
        }
        host.apply_style(&self.label, &frame.label_style());
    }

    /// Clear fill/border and hide the label, keeping both nodes.
    pub fn clear<H>(&self, host: &mut H)
    where
        H: PageHost<Node = N> + ?Sized,
    {
        host.apply_style(&self.highlight, &cleared_highlight_style());
        host.apply_style(&self.label, &hidden_label_style());
    }

    /// Detach both nodes. Returns how many were still attached.
    pub fn remove<H>(self, host: &mut H) -> usize
    where
        H: PageHost<Node = N> + ?Sized,
    {
        usize::from(host.remove(&self.highlight)) + usize::from(host.remove(&self.label))
    }
}

fn base_highlight_style(config: &InspectorConfig) -> Declarations {
    Declarations::new()
        .set("position", "absolute")
        .set("pointer-events", "none")
        .set("transition", "all 0.2s")
        .set("z-index", config.highlight_z_index.to_string())
}

fn base_label_style(config: &InspectorConfig) -> Declarations {
    Declarations::new()
        .set("position", "absolute")
        .set("background-color", "rgba(0, 0, 0, 0.75)")
        .set("color", "#fff")
        .set("padding", "4px 8px")
        .set("border-radius", "4px")
        .set("font-size", "12px")
        .set("pointer-events", "none")
        .set("z-index", config.label_z_index.to_string())
        .set("display", "none")
}
