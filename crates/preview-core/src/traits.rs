use crate::color::Color;
use crate::error::PreviewResult;
use crate::font::FontSpec;

/// Metrics for a string rendered in a particular font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole string
    pub advance: f64,
    /// Vertical distance between consecutive baselines
    pub line_spacing: f64,
    /// Distance from baseline to the top of the tallest glyphs
    pub ascent: f64,
}

/// Text measurement provided by a rendering backend
///
/// Implementations must be deterministic for identical arguments; the
/// wrapping and layout passes may measure the same string several times.
pub trait TextMeasurer {
    fn measure(&self, spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics>;
}

/// Text drawing on top of measurement
///
/// `y` is the baseline position, matching what the layout pass computes.
pub trait TextPainter: TextMeasurer {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, spec: &FontSpec, color: Color);
}

/// Read-only catalog of installed font families and their style names
///
/// The core never mutates a source; enumeration copies what it needs.
pub trait CatalogSource {
    fn list_families(&self) -> Vec<String>;
    fn list_styles(&self, family: &str) -> Vec<String>;
}
