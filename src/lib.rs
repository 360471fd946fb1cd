//! humble-vis: ordered visualization container.
//!
//! A `Visualization` holds child renderers in display order, mounts them into
//! an element tree through the injected `Dom` capability, and keeps
//! first/last marker classes on the per-child wrappers in sync as children
//! are added, removed or reordered.

pub mod api;
pub mod core;
pub mod dom;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "web-backend")]
pub mod platform_web;

pub use api::{Visualization, VisualizationConfig};
pub use error::{VisError, VisResult};
