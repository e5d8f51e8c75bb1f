#![forbid(unsafe_code)]

//! [`PageHost`] over the live DOM.

use std::cell::RefCell;
use std::rc::Weak;

use boxlens_core::{Declarations, ElementInfo, PageHost, Point, Rect, warn};
use boxlens_inspector::Inspector;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::error::WebError;

pub(crate) type SharedInspector = RefCell<Inspector<DomHost>>;

const MOUSEOVER: &str = "mouseover";
const MOUSEOUT: &str = "mouseout";

/// Capturing document listeners feeding pointer events back to the inspector.
struct PointerListeners {
    over: Closure<dyn FnMut(MouseEvent)>,
    out: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerListeners {
    fn new(inspector: Weak<SharedInspector>) -> Self {
        let weak = inspector.clone();
        let over = Closure::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            with_inspector(&weak, |inspector| {
                inspector.pointer_enter(&target);
            });
        });
        let out = Closure::new(move |_event: MouseEvent| {
            with_inspector(&inspector, Inspector::pointer_leave);
        });
        Self { over, out }
    }
}

/// Run `f` on the inspector unless it is gone or already borrowed.
fn with_inspector(weak: &Weak<SharedInspector>, f: impl FnOnce(&mut Inspector<DomHost>)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    if let Ok(mut inspector) = shared.try_borrow_mut() {
        f(&mut inspector);
    };
}

/// The document of the current window, seen through [`PageHost`].
pub(crate) struct DomHost {
    window: Window,
    document: Document,
    listeners: PointerListeners,
    tracking: bool,
}

impl DomHost {
    /// Bind to `window`. Pointer events go to the inspector behind `inspector`.
    pub(crate) fn new(window: Window, document: Document, inspector: Weak<SharedInspector>) -> Self {
        Self {
            window,
            document,
            listeners: PointerListeners::new(inspector),
            tracking: false,
        }
    }

    fn toggle_listeners(&self, enabled: bool) -> Result<(), WebError> {
        for (kind, listener) in [(MOUSEOVER, &self.listeners.over), (MOUSEOUT, &self.listeners.out)] {
            let callback = listener.as_ref().unchecked_ref();
            if enabled {
                self.document
                    .add_event_listener_with_callback_and_bool(kind, callback, true)?;
            } else {
                self.document
                    .remove_event_listener_with_callback_and_bool(kind, callback, true)?;
            }
        }
        Ok(())
    }
}

impl PageHost for DomHost {
    type Node = Element;

    fn elements(&self) -> Vec<Element> {
        let all = self.document.get_elements_by_tag_name("*");
        (0..all.length()).filter_map(|i| all.item(i)).collect()
    }

    fn parent_element(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    fn scroll_offset(&self) -> Point {
        Point {
            x: self.window.scroll_x().unwrap_or(0.0),
            y: self.window.scroll_y().unwrap_or(0.0),
        }
    }

    fn element_info(&self, node: &Element) -> ElementInfo {
        // `className` is an object on SVG elements; the attribute is always text.
        let mut info = ElementInfo::new(node.tag_name()).with_id(node.id());
        if let Some(class) = node.get_attribute("class") {
            info = info.with_class(class);
        }
        info
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(element) => Some(element),
            Err(err) => {
                warn!(tag, error = %WebError::from(err), "create_element failed");
                None
            }
        }
    }

    fn append_to_body(&mut self, node: &Element) -> bool {
        let Some(body) = self.document.body() else {
            warn!("document has no body");
            return false;
        };
        body.append_child(node).is_ok()
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> bool {
        parent.append_child(child).is_ok()
    }

    fn apply_style(&mut self, node: &Element, style: &Declarations) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let css = element.style();
        for (property, value) in style.iter() {
            if let Err(err) = css.set_property(property, value) {
                warn!(property, error = %WebError::from(err), "set_property failed");
            }
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            warn!(name, error = %WebError::from(err), "set_attribute failed");
        }
    }

    fn remove(&mut self, node: &Element) -> bool {
        if node.parent_node().is_none() {
            return false;
        }
        node.remove();
        true
    }

    fn set_pointer_tracking(&mut self, enabled: bool) {
        if self.tracking == enabled {
            return;
        }
        match self.toggle_listeners(enabled) {
            Ok(()) => self.tracking = enabled,
            Err(err) => warn!(enabled, error = %err, "pointer listener toggle failed"),
        }
    }
}
