#![forbid(unsafe_code)]

//! Core: geometry, modes, wire messages, depth colors, and the page host
//! contract shared by every BoxLens frontend.

pub mod color;
pub mod config;
pub mod geometry;
pub mod host;
pub mod label;
pub mod logging;
pub mod message;
pub mod mode;
pub mod style;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

pub use color::{DepthPalette, Hsla};
pub use config::{InspectorConfig, PanelConfig};
pub use geometry::{Point, Rect};
pub use host::{PageHost, PanelTransport, depth};
pub use label::ElementInfo;
pub use message::{Command, MessageError};
pub use mode::{Mode, VisualOptions};
pub use style::Declarations;
