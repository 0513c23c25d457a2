//! Dummy backend for exercising the preview pipeline without a toolkit
//!
//! Measurement is deterministic monospace arithmetic and drawing records
//! its calls, so wrap, layout, and cache behavior can be asserted without
//! a real font system.

use crate::color::Color;
use crate::error::{PreviewError, PreviewResult};
use crate::font::FontSpec;
use crate::traits::{CatalogSource, TextMeasurer, TextMetrics, TextPainter};

/// Fixed-advance measurer: every character is `char_advance` wide
/// regardless of font, mirroring an idealized monospace face.
#[derive(Debug, Clone, Copy)]
pub struct DummyMeasurer {
    pub char_advance: f64,
    pub line_spacing: f64,
    pub ascent: f64,
}

impl Default for DummyMeasurer {
    fn default() -> Self {
        DummyMeasurer {
            char_advance: 8.0,
            line_spacing: 16.0,
            ascent: 12.0,
        }
    }
}

impl TextMeasurer for DummyMeasurer {
    fn measure(&self, _spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics> {
        Ok(TextMetrics {
            advance: text.chars().count() as f64 * self.char_advance,
            line_spacing: self.line_spacing,
            ascent: self.ascent,
        })
    }
}

/// Measurer that always fails, for degraded-render paths
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    fn measure(&self, _spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics> {
        Err(PreviewError::MeasurementFailed {
            context: text.to_string(),
            message: "dummy measurer configured to fail".to_string(),
        })
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub x: f64,
    pub baseline_y: f64,
    pub text: String,
    pub spec: FontSpec,
    pub color: Color,
}

/// Painter that measures like [`DummyMeasurer`] and records draws
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub measurer: DummyMeasurer,
    pub ops: Vec<DrawOp>,
}

impl RecordingPainter {
    /// Clear recorded operations
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl TextMeasurer for RecordingPainter {
    fn measure(&self, spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics> {
        self.measurer.measure(spec, text)
    }
}

impl TextPainter for RecordingPainter {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, spec: &FontSpec, color: Color) {
        self.ops.push(DrawOp {
            x,
            baseline_y: y,
            text: text.to_string(),
            spec: spec.clone(),
            color,
        });
    }
}

/// Catalog source over canned (family, styles) pairs
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<(String, Vec<String>)>,
}

impl StaticSource {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(family, styles)| {
                    (
                        family.to_string(),
                        styles.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl CatalogSource for StaticSource {
    fn list_families(&self) -> Vec<String> {
        self.entries.iter().map(|(f, _)| f.clone()).collect()
    }

    fn list_styles(&self, family: &str) -> Vec<String> {
        self.entries
            .iter()
            .find(|(f, _)| f == family)
            .map(|(_, styles)| styles.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontWeight;

    #[test]
    fn dummy_measurer_is_monospace() {
        let measurer = DummyMeasurer::default();
        let spec = FontSpec::new("Any", "Regular", 24, FontWeight::Normal);
        let metrics = measurer.measure(&spec, "abcd").unwrap();
        assert_eq!(metrics.advance, 32.0);
        assert_eq!(metrics.line_spacing, 16.0);
        assert_eq!(metrics.ascent, 12.0);
    }

    #[test]
    fn recording_painter_captures_draws() {
        let mut painter = RecordingPainter::default();
        let spec = FontSpec::new("Any", "Regular", 24, FontWeight::Normal);
        painter.draw_text(10.0, 22.0, "hello", &spec, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(painter.ops.len(), 1);
        assert_eq!(painter.ops[0].text, "hello");
        painter.clear();
        assert!(painter.ops.is_empty());
    }

    #[test]
    fn static_source_lists_what_it_was_given() {
        let source = StaticSource::new(&[("Alpha", &["Regular", "Bold"]), ("Beta", &[])]);
        assert_eq!(source.list_families(), vec!["Alpha", "Beta"]);
        assert_eq!(source.list_styles("Alpha"), vec!["Regular", "Bold"]);
        assert!(source.list_styles("Beta").is_empty());
        assert!(source.list_styles("Missing").is_empty());
    }
}
