#![forbid(unsafe_code)]

//! Thin access to the `browser` WebExtension global through `js_sys`.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::WebError;

/// Resolve `browser.<namespace>`, e.g. `browser.runtime`.
fn namespace(name: &'static str) -> Result<Object, WebError> {
    let browser = Reflect::get(&js_sys::global(), &JsValue::from_str("browser"))?;
    if browser.is_undefined() {
        return Err(WebError::MissingGlobal("browser"));
    }
    let value = Reflect::get(&browser, &JsValue::from_str(name))?;
    value
        .dyn_into::<Object>()
        .map_err(|_| WebError::MissingGlobal(name))
}

fn method(target: &Object, name: &'static str) -> Result<Function, WebError> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| WebError::MissingGlobal(name))
}

/// `browser.runtime.onMessage.addListener(listener)`.
pub(crate) fn add_message_listener(listener: &Function) -> Result<(), WebError> {
    let on_message = Reflect::get(&namespace("runtime")?, &JsValue::from_str("onMessage"))?
        .dyn_into::<Object>()
        .map_err(|_| WebError::MissingGlobal("onMessage"))?;
    method(&on_message, "addListener")?.call1(&on_message, listener)?;
    Ok(())
}

/// `browser.runtime.onMessage.removeListener(listener)`.
pub(crate) fn remove_message_listener(listener: &Function) -> Result<(), WebError> {
    let on_message = Reflect::get(&namespace("runtime")?, &JsValue::from_str("onMessage"))?
        .dyn_into::<Object>()
        .map_err(|_| WebError::MissingGlobal("onMessage"))?;
    method(&on_message, "removeListener")?.call1(&on_message, listener)?;
    Ok(())
}

/// Query the focused tab of the current window and post `message` to it.
///
/// Resolves once the tab accepted the message. A tab without the content
/// script rejects, which surfaces here as [`WebError::Dom`].
pub(crate) async fn send_to_active_tab(message: JsValue) -> Result<(), WebError> {
    let tabs = namespace("tabs")?;

    let query = Object::new();
    Reflect::set(&query, &JsValue::from_str("active"), &JsValue::TRUE)?;
    Reflect::set(&query, &JsValue::from_str("currentWindow"), &JsValue::TRUE)?;
    let found = method(&tabs, "query")?.call1(&tabs, &query)?;
    let found = JsFuture::from(Promise::from(found)).await?;

    let tab = Array::from(&found).get(0);
    if tab.is_undefined() {
        return Err(WebError::MissingElement("active tab".into()));
    }
    let tab_id = Reflect::get(&tab, &JsValue::from_str("id"))?;

    let sent = method(&tabs, "sendMessage")?.call2(&tabs, &tab_id, &message)?;
    JsFuture::from(Promise::from(sent)).await?;
    Ok(())
}
