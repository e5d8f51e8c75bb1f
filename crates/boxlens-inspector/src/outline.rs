#![forbid(unsafe_code)]

//! Outline mode: one depth-colored box per visible element.
//!
//! The scan is split in two: [`plan`] reads the page and decides which boxes
//! to draw, [`materialize`] creates them. Planning is a single synchronous
//! pass over a snapshot of the element list, so the boxes being added never
//! show up in the scan that creates them.

use boxlens_core::geometry::px;
use boxlens_core::label::outline_label;
use boxlens_core::{Declarations, InspectorConfig, PageHost, Rect, VisualOptions, depth};

/// One planned outline box.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineBox {
    /// Element rect in document coordinates.
    pub page_rect: Rect,
    /// Nesting depth of the element.
    pub depth: u32,
    /// `tag W×H`, when dimensions are shown and the box is big enough.
    pub label: Option<String>,
}

/// Decide which elements get a box.
///
/// Skips nodes for which `is_own` holds, elements whose width or height is
/// below the outline threshold, and elements deeper than `max_depth`.
pub fn plan<H, F>(
    host: &H,
    options: &VisualOptions,
    config: &InspectorConfig,
    is_own: F,
) -> Vec<OutlineBox>
where
    H: PageHost + ?Sized,
    F: Fn(&H::Node) -> bool,
{
    let scroll = host.scroll_offset();
    let mut boxes = Vec::new();

    for el in host.elements() {
        if is_own(&el) {
            continue;
        }
        let rect = host.bounding_rect(&el);
        if !rect.meets_min_size(config.outline_min_size) {
            continue;
        }
        let depth = depth(host, &el);
        if depth > options.max_depth {
            continue;
        }
        let label = (options.show_dimensions
            && rect.exceeds(config.outline_label_min_width, config.outline_label_min_height))
        .then(|| outline_label(&host.element_info(&el), &rect));

        boxes.push(OutlineBox {
            page_rect: rect.to_page(scroll),
            depth,
            label,
        });
    }
    boxes
}

impl OutlineBox {
    /// Inline style of the box.
    pub fn style(&self, options: &VisualOptions, config: &InspectorConfig) -> Declarations {
        let r = self.page_rect;
        let mut style = Declarations::new()
            .set("position", "absolute")
            .set("pointer-events", "none")
            .set("z-index", config.outline_z_index(self.depth).to_string())
            .set("box-sizing", "border-box")
            .set("top", px(r.y))
            .set("left", px(r.x))
            .set("width", px(r.width))
            .set("height", px(r.height));
        if options.show_borders {
            style.push("border", config.palette.border_css(self.depth));
        }
        if self.label.is_some() {
            style.push("font-size", "10px");
            style.push("color", "white");
            style.push("padding-left", "3px");
            style.push("padding-top", "3px");
        }
        style.push("background-color", config.palette.fill(self.depth).to_string());
        style
    }
}

/// Inline style of the small label inside a box.
pub fn label_style() -> Declarations {
    Declarations::new()
        .set("position", "absolute")
        .set("top", "0")
        .set("left", "0")
        .set("background-color", "rgba(0, 0, 0, 0.6)")
        .set("color", "white")
        .set("padding", "2px 4px")
        .set("font-size", "9px")
        .set("border-radius", "2px")
        .set("pointer-events", "none")
}

/// Create the nodes for `boxes`, appending each to the body in order.
///
/// Returns the created box nodes (labels are children of their box). Boxes
/// the host fails to create are skipped.
pub fn materialize<H>(
    host: &mut H,
    boxes: &[OutlineBox],
    options: &VisualOptions,
    config: &InspectorConfig,
) -> Vec<H::Node>
where
    H: PageHost + ?Sized,
{
    let mut nodes = Vec::with_capacity(boxes.len());
    for planned in boxes {
        let Some(node) = host.create_element("div") else {
            continue;
        };
        host.apply_style(&node, &planned.style(options, config));

        if let Some(text) = &planned.label {
            host.set_attribute(&node, "data-label", text);
            if let Some(label) = host.create_element("span") {
                host.apply_style(&label, &label_style());
                host.set_text(&label, text);
                host.append_child(&node, &label);
            }
        }

        host.append_to_body(&node);
        nodes.push(node);
    }
    nodes
}

/// Detach every node in `boxes`, emptying it. Returns how many were still
/// attached.
pub fn remove_all<H>(host: &mut H, boxes: &mut Vec<H::Node>) -> usize
where
    H: PageHost + ?Sized,
{
    boxes
        .drain(..)
        .filter(|node| host.remove(node))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlens_core::ElementInfo;
    use boxlens_harness::MemoryPage;
    use pretty_assertions::assert_eq;

    #[test]
    fn plan_filters_by_size() {
        let mut page = MemoryPage::new();
        let body = page.body();
        let small = page.add(body, "I", Rect::new(0.0, 0.0, 9.9, 100.0));
        let ok = page.add(body, "P", Rect::new(0.0, 0.0, 10.0, 10.0));
        let opts = VisualOptions::default();
        let config = InspectorConfig::default();

        let boxes = plan(&page, &opts, &config, |_| false);
        // html, body, and the 10×10 paragraph.
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[2].page_rect, page.layout(ok));
        assert!(boxes.iter().all(|b| b.page_rect != page.layout(small)));
    }

    #[test]
    fn plan_respects_max_depth_and_exclusion() {
        let mut page = MemoryPage::new();
        let body = page.body();
        let chain = page.add_chain(body, 3, Rect::from_size(100.0, 100.0));
        let opts = VisualOptions::default().with_max_depth(3);
        let config = InspectorConfig::default();

        let depths: Vec<u32> = plan(&page, &opts, &config, |_| false)
            .iter()
            .map(|b| b.depth)
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 3]);

        let root = page.root();
        let depths: Vec<u32> = plan(&page, &opts, &config, |n| *n == root || *n == chain[0])
            .iter()
            .map(|b| b.depth)
            .collect();
        assert_eq!(depths, vec![1, 3]);
    }

    #[test]
    fn labels_need_room_and_dimensions() {
        let mut page = MemoryPage::new();
        let body = page.body();
        page.add_element(
            body,
            ElementInfo::new("SECTION").with_id("main"),
            Rect::new(0.0, 0.0, 51.0, 21.0),
        );
        page.add(body, "SPAN", Rect::new(0.0, 0.0, 50.0, 40.0));
        let config = InspectorConfig::default();

        let boxes = plan(&page, &VisualOptions::default(), &config, |_| false);
        assert_eq!(boxes[2].label.as_deref(), Some("section 51×21"));
        assert_eq!(boxes[3].label, None);

        let boxes = plan(
            &page,
            &VisualOptions::default().with_dimensions(false),
            &config,
            |_| false,
        );
        assert!(boxes.iter().all(|b| b.label.is_none()));
    }

    #[test]
    fn box_style() {
        let config = InspectorConfig::default();
        let planned = OutlineBox {
            page_rect: Rect::new(5.0, 6.0, 70.0, 30.0),
            depth: 2,
            label: Some("div 70×30".into()),
        };
        let style = planned.style(&VisualOptions::default(), &config);
        assert_eq!(style.get("z-index"), Some("9002"));
        assert_eq!(style.get("border"), Some("1px solid hsla(60, 90%, 50%, 0.8)"));
        assert_eq!(style.get("background-color"), Some("hsla(60, 90%, 50%, 0.2)"));
        assert_eq!(style.get("font-size"), Some("10px"));

        let plain = OutlineBox {
            label: None,
            ..planned
        }
        .style(&VisualOptions::default().with_borders(false), &config);
        assert_eq!(plain.get("border"), None);
        assert_eq!(plain.get("font-size"), None);
        assert_eq!(plain.get("background-color"), Some("hsla(60, 90%, 50%, 0.2)"));
    }

    #[test]
    fn materialize_and_remove() {
        let mut page = MemoryPage::new();
        let config = InspectorConfig::default();
        let opts = VisualOptions::default();
        let boxes = vec![
            OutlineBox {
                page_rect: Rect::new(0.0, 0.0, 100.0, 100.0),
                depth: 1,
                label: Some("body 100×100".into()),
            },
            OutlineBox {
                page_rect: Rect::new(0.0, 0.0, 20.0, 20.0),
                depth: 2,
                label: None,
            },
        ];
        let mut nodes = materialize(&mut page, &boxes, &opts, &config);
        assert_eq!(nodes.len(), 2);
        assert_eq!(page.injected_top_level(), nodes);
        assert_eq!(page.attribute(nodes[0], "data-label"), Some("body 100×100"));
        let label = page.children(nodes[0])[0];
        assert_eq!(page.text(label), "body 100×100");
        assert!(page.children(nodes[1]).is_empty());

        assert_eq!(remove_all(&mut page, &mut nodes), 2);
        assert!(nodes.is_empty());
        assert!(page.injected_nodes().is_empty());
        assert_eq!(remove_all(&mut page, &mut nodes), 0);
    }
}
