#![forbid(unsafe_code)]

//! WASM frontend for BoxLens.
//!
//! Two `wasm-bindgen` entry points, one per extension context:
//! - [`PageInspectorWeb`] runs in the content script. It owns an
//!   [`Inspector`](boxlens_inspector::Inspector) over the live DOM and listens
//!   on `browser.runtime.onMessage`.
//! - [`ControlPanelWeb`] runs in the popup. It wires the popup controls to a
//!   [`ControlPanel`](boxlens_inspector::ControlPanel) whose transport posts
//!   to the focused tab.
//!
//! The extension assets (manifest, popup markup, loaders) live next to this
//! crate under `extension/`.

pub mod controls;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod dom_host;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod panel;
#[cfg(target_arch = "wasm32")]
mod runtime;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub use page::PageInspectorWeb;
#[cfg(target_arch = "wasm32")]
pub use panel::ControlPanelWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct PageInspectorWeb;

#[cfg(not(target_arch = "wasm32"))]
impl PageInspectorWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

/// Native stub of the popup entry point.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct ControlPanelWeb;

#[cfg(not(target_arch = "wasm32"))]
impl ControlPanelWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
