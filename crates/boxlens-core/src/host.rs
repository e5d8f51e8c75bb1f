#![forbid(unsafe_code)]

//! The page host contract.
//!
//! A [`PageHost`] is everything the inspector needs from the inspected page:
//! read access to the element tree and its geometry, and ownership of the
//! overlay nodes it injects. The web frontend implements it over `web-sys`;
//! tests implement it over an in-memory tree.
//!
//! Host operations never fail from the inspector's point of view. Creation
//! returns `Option`, removal reports whether the node was still attached, and
//! anything else degrades to a no-op that the host may log.
//!
//! [`PanelTransport`] is the matching contract on the control panel side.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::label::ElementInfo;
use crate::message::Command;
use crate::style::Declarations;

/// Access to one inspected page.
pub trait PageHost {
    /// Handle to an element, page-owned or inspector-owned.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Snapshot of every element in document order.
    fn elements(&self) -> Vec<Self::Node>;

    /// Parent element, `None` at the document root.
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Viewport-relative border box.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Current document scroll offset.
    fn scroll_offset(&self) -> Point;

    /// Tag, id and class of an element.
    fn element_info(&self, node: &Self::Node) -> ElementInfo;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;

    /// Append a node to the document body.
    fn append_to_body(&mut self, node: &Self::Node) -> bool;

    /// Append `child` under `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> bool;

    /// Apply inline style declarations in order.
    fn apply_style(&mut self, node: &Self::Node, style: &Declarations);

    /// Replace the text content of a node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Set an attribute.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Detach a node from its parent. Returns `false` if it had none.
    fn remove(&mut self, node: &Self::Node) -> bool;

    /// Attach (`true`) or detach (`false`) the capturing pointer listeners on
    /// the document. Must be idempotent.
    fn set_pointer_tracking(&mut self, enabled: bool);
}

/// Outbound channel of the control panel.
///
/// Delivery is fire-and-forget: implementations locate the focused tab and
/// post the command without the panel waiting on the result.
pub trait PanelTransport {
    /// Send `command` to the page inspector of the focused tab.
    fn send_to_active_tab(&mut self, command: Command);
}

/// Nesting depth: the number of ancestor elements of `node`.
///
/// The document root element has depth 0, `<body>` depth 1, and so on.
pub fn depth<H: PageHost + ?Sized>(host: &H, node: &H::Node) -> u32 {
    let mut depth = 0u32;
    let mut current = host.parent_element(node);
    while let Some(parent) = current {
        depth = depth.saturating_add(1);
        current = host.parent_element(&parent);
    }
    depth
}
