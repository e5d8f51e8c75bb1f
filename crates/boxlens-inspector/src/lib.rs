#![forbid(unsafe_code)]

//! Page inspector and control panel for BoxLens.
//!
//! The [`Inspector`] owns a page's visualization mode and every overlay node
//! it injects through a [`PageHost`](boxlens_core::PageHost):
//!
//! - **hover**: one highlight box and one label follow the pointer,
//! - **outline**: one depth-colored box per visible element,
//! - **disabled**: nothing.
//!
//! The [`ControlPanel`] mirrors the mode in the popup and sends
//! [`Command`](boxlens_core::Command)s through a
//! [`PanelTransport`](boxlens_core::PanelTransport).
//!
//! # Usage
//!
//! ```ignore
//! use boxlens_core::{Command, Mode, VisualOptions};
//! use boxlens_inspector::Inspector;
//!
//! let mut inspector = Inspector::new(host);
//! inspector.handle(Command::SetMode {
//!     mode: Mode::Outline,
//!     options: VisualOptions::default().with_max_depth(4),
//! });
//! ```

pub mod diagnostics;
pub mod hover;
pub mod inspector;
pub mod outline;
pub mod panel;

pub use diagnostics::{DiagnosticEntry, DiagnosticEventKind, DiagnosticLog, TelemetryHooks};
pub use hover::{HoverFrame, HoverOverlay};
pub use inspector::Inspector;
pub use outline::OutlineBox;
pub use panel::ControlPanel;
