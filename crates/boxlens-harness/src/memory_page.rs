#![forbid(unsafe_code)]

//! An in-memory element tree implementing [`PageHost`].
//!
//! Layout is fixed up front: every page element is given its document-space
//! rect when it is added. [`PageHost::bounding_rect`] reports it relative to
//! the current scroll offset, exactly like `getBoundingClientRect`, so an
//! inspector that anchors overlays correctly ends up with overlay styles that
//! match the layout rect no matter how the page is scrolled.

use std::collections::BTreeMap;

use boxlens_core::{Declarations, ElementInfo, PageHost, Point, Rect};

/// Handle to a node of a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    info: ElementInfo,
    layout: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    injected: bool,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl NodeData {
    fn new(info: ElementInfo, layout: Rect, injected: bool) -> Self {
        Self {
            info,
            layout,
            parent: None,
            children: Vec::new(),
            injected,
            style: BTreeMap::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
        }
    }
}

/// Default viewport size of a fresh page.
pub const VIEWPORT: Rect = Rect::from_size(1280.0, 800.0);

/// In-memory document with an `<html>` root and a `<body>`.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    scroll: Point,
    pointer_tracking: bool,
    pointer_toggles: usize,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Create a page with `<html>` and `<body>` covering the viewport.
    pub fn new() -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            scroll: Point::ORIGIN,
            pointer_tracking: false,
            pointer_toggles: 0,
        };
        page.nodes
            .push(NodeData::new(ElementInfo::new("HTML"), VIEWPORT, false));
        page.body = page.add(page.root, "BODY", VIEWPORT);
        page
    }

    /// The `<html>` element.
    #[inline]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The `<body>` element.
    #[inline]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Add a page element with a bare tag.
    pub fn add(&mut self, parent: NodeId, tag: &str, layout: Rect) -> NodeId {
        self.add_element(parent, ElementInfo::new(tag), layout)
    }

    /// Add a page element with full identity.
    pub fn add_element(&mut self, parent: NodeId, info: ElementInfo, layout: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(info, layout, false));
        self.link(parent, id);
        id
    }

    /// Add a chain of nested `<div>`s under `parent`, each with `layout`.
    /// Returns them outermost first.
    pub fn add_chain(&mut self, parent: NodeId, len: usize, layout: Rect) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(len);
        let mut current = parent;
        for _ in 0..len {
            current = self.add(current, "DIV", layout);
            out.push(current);
        }
        out
    }

    /// Scroll the document.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = Point::new(x, y);
    }

    /// Whether the document currently has pointer listeners attached.
    #[inline]
    pub const fn pointer_tracking(&self) -> bool {
        self.pointer_tracking
    }

    /// How many times pointer tracking actually changed state.
    #[inline]
    pub const fn pointer_toggles(&self) -> usize {
        self.pointer_toggles
    }

    /// Check if `node` is connected to the document.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Inspector-created nodes currently connected to the document, in
    /// document order.
    pub fn injected_nodes(&self) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|id| self.nodes[id.0].injected)
            .collect()
    }

    /// Connected inspector-created nodes directly under `<body>`.
    pub fn injected_top_level(&self) -> Vec<NodeId> {
        self.nodes[self.body.0]
            .children
            .iter()
            .copied()
            .filter(|id| self.nodes[id.0].injected)
            .collect()
    }

    /// Total nodes ever created by the inspector, connected or not.
    pub fn created_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.injected).count()
    }

    /// Inline style property of a node.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].style.get(property).map(String::as_str)
    }

    /// Attribute of a node.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    /// Text content of a node.
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// Tag name of a node, as stored.
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].info.tag_name
    }

    /// Children of a node.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Document-space layout rect of a page element.
    pub fn layout(&self, node: NodeId) -> Rect {
        self.nodes[node.0].layout
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.unlink(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn unlink(&mut self, child: NodeId) -> bool {
        let Some(parent) = self.nodes[child.0].parent.take() else {
            return false;
        };
        self.nodes[parent.0].children.retain(|&c| c != child);
        true
    }

    fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn style_px(&self, node: NodeId, property: &str) -> Option<f64> {
        self.style(node, property)?
            .strip_suffix("px")?
            .parse::<f64>()
            .ok()
    }

    /// Injected nodes are laid out by their inline `top/left/width/height`.
    fn injected_layout(&self, node: NodeId) -> Rect {
        Rect::new(
            self.style_px(node, "left").unwrap_or(0.0),
            self.style_px(node, "top").unwrap_or(0.0),
            self.style_px(node, "width").unwrap_or(0.0),
            self.style_px(node, "height").unwrap_or(0.0),
        )
    }
}

impl PageHost for MemoryPage {
    type Node = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        self.preorder()
    }

    fn parent_element(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let layout = if self.nodes[node.0].injected {
            self.injected_layout(*node)
        } else {
            self.nodes[node.0].layout
        };
        layout.to_page(Point::new(-self.scroll.x, -self.scroll.y))
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn element_info(&self, node: &NodeId) -> ElementInfo {
        self.nodes[node.0].info.clone()
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(
            ElementInfo::new(tag.to_uppercase()),
            Rect::default(),
            true,
        ));
        Some(id)
    }

    fn append_to_body(&mut self, node: &NodeId) -> bool {
        let body = self.body;
        self.append_child(&body, node)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> bool {
        if parent == child {
            return false;
        }
        self.link(*parent, *child);
        true
    }

    fn apply_style(&mut self, node: &NodeId, style: &Declarations) {
        let map = &mut self.nodes[node.0].style;
        for (property, value) in style.iter() {
            map.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.nodes[node.0].text = text.to_owned();
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn remove(&mut self, node: &NodeId) -> bool {
        self.unlink(*node)
    }

    fn set_pointer_tracking(&mut self, enabled: bool) {
        if self.pointer_tracking != enabled {
            self.pointer_tracking = enabled;
            self.pointer_toggles += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxlens_core::depth;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_page_has_root_and_body() {
        let page = MemoryPage::new();
        assert_eq!(page.elements(), vec![page.root(), page.body()]);
        assert_eq!(depth(&page, &page.root()), 0);
        assert_eq!(depth(&page, &page.body()), 1);
        assert!(page.injected_nodes().is_empty());
    }

    #[test]
    fn elements_are_in_document_order() {
        let mut page = MemoryPage::new();
        let body = page.body();
        let a = page.add(body, "DIV", Rect::from_size(10.0, 10.0));
        let a1 = page.add(a, "P", Rect::from_size(10.0, 10.0));
        let b = page.add(body, "DIV", Rect::from_size(10.0, 10.0));
        assert_eq!(page.elements(), vec![page.root(), body, a, a1, b]);
    }

    #[test]
    fn bounding_rect_is_viewport_relative() {
        let mut page = MemoryPage::new();
        let body = page.body();
        let el = page.add(body, "DIV", Rect::new(100.0, 500.0, 20.0, 20.0));
        page.scroll_to(10.0, 450.0);
        assert_eq!(page.bounding_rect(&el), Rect::new(90.0, 50.0, 20.0, 20.0));
        assert_eq!(page.scroll_offset(), Point::new(10.0, 450.0));
    }

    #[test]
    fn chain_depths() {
        let mut page = MemoryPage::new();
        let body = page.body();
        let chain = page.add_chain(body, 4, Rect::from_size(50.0, 50.0));
        let depths: Vec<u32> = chain.iter().map(|n| depth(&page, n)).collect();
        assert_eq!(depths, vec![2, 3, 4, 5]);
    }

    #[test]
    fn injected_nodes_track_connection() {
        let mut page = MemoryPage::new();
        let node = page.create_element("div").unwrap();
        assert!(page.injected_nodes().is_empty());
        assert!(page.append_to_body(&node));
        let child = page.create_element("span").unwrap();
        assert!(page.append_child(&node, &child));
        assert_eq!(page.injected_nodes(), vec![node, child]);
        assert_eq!(page.injected_top_level(), vec![node]);

        assert!(page.remove(&node));
        assert!(!page.remove(&node));
        assert!(page.injected_nodes().is_empty());
        assert!(!page.is_connected(child));
        assert_eq!(page.created_count(), 2);
    }

    #[test]
    fn styles_merge() {
        let mut page = MemoryPage::new();
        let node = page.create_element("div").unwrap();
        page.apply_style(&node, &Declarations::new().set("top", "1px").set("left", "2px"));
        page.apply_style(&node, &Declarations::new().set("top", "3px"));
        assert_eq!(page.style(node, "top"), Some("3px"));
        assert_eq!(page.style(node, "left"), Some("2px"));
    }

    #[test]
    fn pointer_tracking_counts_transitions() {
        let mut page = MemoryPage::new();
        page.set_pointer_tracking(true);
        page.set_pointer_tracking(true);
        page.set_pointer_tracking(false);
        assert!(!page.pointer_tracking());
        assert_eq!(page.pointer_toggles(), 2);
    }
}
