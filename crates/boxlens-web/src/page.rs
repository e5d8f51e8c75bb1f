#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use boxlens_core::{Mode, debug, warn};
use boxlens_inspector::Inspector;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom_host::{DomHost, SharedInspector};
use crate::error::WebError;
use crate::runtime;

/// Content-script entry point: one page inspector over the current document.
///
/// Constructing it attaches nothing to the page; the inspector starts
/// disabled. Call [`listen`](Self::listen) to receive panel messages through
/// `browser.runtime.onMessage`, or feed them directly with
/// [`handleMessage`](Self::handle_message).
#[wasm_bindgen]
pub struct PageInspectorWeb {
    inner: Rc<SharedInspector>,
    on_message: Option<Closure<dyn FnMut(JsValue)>>,
}

#[wasm_bindgen]
impl PageInspectorWeb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PageInspectorWeb, JsValue> {
        let window = web_sys::window().ok_or(WebError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(WebError::MissingGlobal("document"))?;
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(Inspector::new(DomHost::new(window, document, weak.clone())))
        });
        Ok(Self {
            inner,
            on_message: None,
        })
    }

    /// Register on `browser.runtime.onMessage`. Idempotent.
    pub fn listen(&mut self) -> Result<(), JsValue> {
        if self.on_message.is_some() {
            return Ok(());
        }
        let weak = Rc::downgrade(&self.inner);
        let listener = Closure::new(move |message: JsValue| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut inspector) = shared.try_borrow_mut() else {
                warn!("panel message dropped: inspector busy");
                return;
            };
            dispatch(&mut inspector, &message);
        });
        runtime::add_message_listener(listener.as_ref().unchecked_ref())?;
        self.on_message = Some(listener);
        debug!("listening for panel messages");
        Ok(())
    }

    /// Apply one panel message (a plain object). Returns `false` if it was
    /// rejected.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&self, message: JsValue) -> bool {
        match self.inner.try_borrow_mut() {
            Ok(mut inspector) => dispatch(&mut inspector, &message),
            Err(_) => false,
        }
    }

    /// Current mode name: `"disabled"`, `"hover"` or `"outline"`.
    pub fn mode(&self) -> String {
        self.inner
            .try_borrow()
            .map(|inspector| inspector.mode().as_str().to_owned())
            .unwrap_or_default()
    }

    /// Remove every overlay, detach the listeners and stop receiving messages.
    pub fn destroy(&mut self) {
        if let Some(listener) = self.on_message.take()
            && let Err(err) = runtime::remove_message_listener(listener.as_ref().unchecked_ref())
        {
            warn!(error = %err, "removing message listener failed");
        }
        if let Ok(mut inspector) = self.inner.try_borrow_mut() {
            inspector.set_mode(Mode::Disabled);
        }
    }
}

/// Stringify `message` and hand it to the inspector's decoder.
fn dispatch(inspector: &mut Inspector<DomHost>, message: &JsValue) -> bool {
    let json = match js_sys::JSON::stringify(message) {
        Ok(json) => String::from(json),
        Err(err) => {
            warn!(error = %WebError::from(err), "panel message is not serializable");
            return false;
        }
    };
    inspector.handle_json(&json).is_ok()
}
