//! Preview render requests and the wrap-then-layout pipeline
//!
//! A [`PreviewRequest`] captures every input that affects a rendered
//! preview; field-wise equality is what the cache keys on. Rendering
//! itself happens on a backend surface - the core plans the layout and
//! issues trait-level draw calls, and failure is an explicit error value
//! rather than a swallowed exception.

use tracing::debug;

use crate::color::Color;
use crate::constants::SIDE_MARGIN;
use crate::error::PreviewResult;
use crate::font::{FontSpec, FontVariant, FontWeight};
use crate::layout::{layout_preview, Bounds, PreviewLayout};
use crate::traits::{TextMeasurer, TextPainter};
use crate::wrap::wrap_text;

/// Everything that affects one rendered preview
///
/// Constructed fresh on every user-driven change; equality across all
/// fields decides whether a cached bitmap can be reused.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    pub family: String,
    pub style_name: String,
    pub text: String,
    pub size_pt: i32,
    pub color: Color,
    pub weight: FontWeight,
    pub bounds: Bounds,
}

impl PreviewRequest {
    /// The draw descriptor for the main preview text
    pub fn spec(&self) -> FontSpec {
        FontSpec::new(&self.family, &self.style_name, self.size_pt, self.weight)
    }

    /// The annotation label: the variant's composite display name
    pub fn label_text(&self) -> String {
        FontVariant::new(&self.family, &self.style_name).display_name()
    }
}

/// Opaque ARGB pixel buffer produced by a backend render
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewBitmap {
    pub width: i32,
    pub height: i32,
    pub data: Vec<u8>,
}

impl PreviewBitmap {
    /// A fully transparent buffer, the degraded output when a render
    /// fails partway.
    pub fn blank(width: i32, height: i32) -> Self {
        let size = (width.max(0) as usize) * (height.max(0) as usize) * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }
}

/// Wrap and lay out a request's text without touching any surface.
///
/// Pure planning: wraps to the bounds minus side margins, then resolves
/// baselines and the annotation label. Any measurement error surfaces
/// here and the caller degrades to an empty render.
pub fn plan_preview(
    request: &PreviewRequest,
    measurer: &dyn TextMeasurer,
) -> PreviewResult<PreviewLayout> {
    let spec = request.spec();
    let available_width = f64::from(request.bounds.width) - 2.0 * SIDE_MARGIN;
    let lines = wrap_text(&request.text, measurer, &spec, available_width)?;
    debug!(
        "planned preview for {}: {} wrapped lines",
        request.label_text(),
        lines.len()
    );
    layout_preview(&lines, measurer, &spec, request.bounds, &request.label_text())
}

/// Issue the draw calls for a planned layout.
///
/// Lines start at the left side margin; the label carries its own
/// position and smaller font from the layout pass. Both use the
/// request's color.
pub fn draw_preview(
    layout: &PreviewLayout,
    request: &PreviewRequest,
    painter: &mut dyn TextPainter,
) {
    let spec = request.spec();
    for line in &layout.lines {
        painter.draw_text(SIDE_MARGIN, line.baseline_y, &line.text, &spec, request.color);
    }
    if let Some(label) = &layout.label {
        painter.draw_text(label.x, label.baseline_y, &label.text, &label.spec, request.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::{DummyMeasurer, FailingMeasurer, RecordingPainter};

    fn request() -> PreviewRequest {
        PreviewRequest {
            family: "Test Sans".to_string(),
            style_name: "Regular".to_string(),
            text: "hello world".to_string(),
            size_pt: 24,
            color: Color::rgb(0.0, 0.0, 0.0),
            weight: FontWeight::Normal,
            bounds: Bounds::new(400, 100),
        }
    }

    #[test]
    fn label_text_is_the_composite_display_name() {
        assert_eq!(request().label_text(), "Test Sans - Regular");
    }

    #[test]
    fn plan_and_draw_issue_one_call_per_line_plus_label() {
        let mut painter = RecordingPainter::default();
        let req = request();
        let layout = plan_preview(&req, &painter).unwrap();
        assert_eq!(layout.lines.len(), 1);
        assert!(layout.label.is_some());

        draw_preview(&layout, &req, &mut painter);
        assert_eq!(painter.ops.len(), 2);
        assert_eq!(painter.ops[0].text, "hello world");
        assert_eq!(painter.ops[0].x, SIDE_MARGIN);
        assert_eq!(painter.ops[1].text, "Test Sans - Regular");
        assert_eq!(painter.ops[1].spec.size_pt, 20);
    }

    #[test]
    fn measurement_failure_is_an_explicit_error() {
        let measurer = FailingMeasurer;
        assert!(plan_preview(&request(), &measurer).is_err());
    }

    #[test]
    fn blank_bitmap_is_transparent_and_sized() {
        let bitmap = PreviewBitmap::blank(4, 2);
        assert_eq!(bitmap.data.len(), 4 * 2 * 4);
        assert!(bitmap.data.iter().all(|&b| b == 0));
    }
}
