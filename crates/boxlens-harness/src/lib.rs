#![forbid(unsafe_code)]

//! Browserless test doubles for BoxLens.
//!
//! - [`MemoryPage`]: an element tree with fixed layout that implements
//!   `PageHost`, so the page inspector can be driven and inspected natively.
//! - [`RecordingTransport`]: a `PanelTransport` that records what the control
//!   panel sends.
//!
//! # Quick Start
//!
//! ```ignore
//! use boxlens_harness::{MemoryPage, Rect};
//!
//! let mut page = MemoryPage::new();
//! let body = page.body();
//! let nav = page.add(body, "NAV", Rect::new(0.0, 0.0, 800.0, 60.0));
//! ```

pub mod memory_page;
pub mod transport;

pub use boxlens_core::{Point, Rect};
pub use memory_page::{MemoryPage, NodeId, VIEWPORT};
pub use transport::RecordingTransport;
