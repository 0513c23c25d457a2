//! Preview GTK4 - GTK4 backend for the preview-core font previewer
//!
//! This crate provides a complete GTK4 implementation of the preview-core
//! traits: pango-backed measurement and drawing, a cached offscreen
//! preview surface, catalog snapshotting from the pango font map, and the
//! main application window.

pub mod cairo_renderer;
pub mod catalog_source;
pub mod preview_area;
pub mod window;

pub use cairo_renderer::{render_offscreen, CairoPreviewPainter};
pub use catalog_source::pango_snapshot;
pub use preview_area::PreviewArea;
pub use window::PreviewWindow;

// Re-export preview-core types for convenience
pub use preview_core::*;
