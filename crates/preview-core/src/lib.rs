//! Preview Core - toolkit-agnostic font preview engine
//!
//! This crate provides the algorithmic core of a system font previewer,
//! independent of any specific UI backend: catalog enumeration with style
//! deduplication, greedy line wrapping, preview layout with annotation
//! label placement, and a keyed render cache. Backends supply font
//! catalogs and text measurement/drawing through the trait interfaces.

pub mod cache;
pub mod color;
pub mod config;
pub mod constants;
pub mod dummy_backend;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod session;
pub mod traits;
pub mod wrap;

// Re-export main types
pub use cache::PreviewCache;
pub use color::Color;
pub use config::{PreviewConfig, PreviewMode};
pub use error::{PreviewError, PreviewResult};
pub use font::{
    reduce_styles, spawn_enumeration, CatalogEvent, FileSystemSource, FontCatalog, FontSpec,
    FontVariant, FontWeight, SnapshotSource,
};
pub use layout::{layout_preview, Bounds, LabelPlacement, LaidOutLine, PreviewLayout};
pub use render::{draw_preview, plan_preview, PreviewBitmap, PreviewRequest};
pub use session::{LoadState, PreviewSession};
pub use wrap::wrap_text;

// Re-export traits
pub use traits::{CatalogSource, TextMeasurer, TextMetrics, TextPainter};
