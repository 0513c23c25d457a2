//! Preview layout: baseline placement and annotation label positioning
//!
//! Turns wrapped lines into absolute draw positions inside a bounded
//! surface. Lines that would cross the bottom edge are dropped rather
//! than clipped; the annotation label is placed beside the first line,
//! shortened with an ellipsis when only a sliver of room remains and
//! omitted entirely when there is none.

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{COMPACT_THRESHOLD_INSET, LABEL_ELLIPSIS, LABEL_GAP, LABEL_SIZE_DELTA,
                      MIN_LABEL_SIZE, MIN_LABEL_WIDTH, SIDE_MARGIN, TOP_MARGIN};
use crate::error::PreviewResult;
use crate::font::FontSpec;
use crate::traits::TextMeasurer;

/// Pixel bounds of a preview surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One display line with its resolved draw position
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    pub text: String,
    pub baseline_y: f64,
    pub advance_width: f64,
}

/// Resolved position for the annotation label beside the first line
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub x: f64,
    pub baseline_y: f64,
    pub spec: FontSpec,
}

/// Output of one layout pass; produced fresh every time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewLayout {
    pub lines: Vec<LaidOutLine>,
    pub label: Option<LabelPlacement>,
}

/// The annotation label's font: a few points smaller, same family,
/// style, and weight as the main text.
pub fn label_spec(spec: &FontSpec) -> FontSpec {
    spec.with_size_pt((spec.size_pt - LABEL_SIZE_DELTA).max(MIN_LABEL_SIZE))
}

/// Lay out wrapped lines and the annotation label inside `bounds`.
///
/// The first baseline sits `TOP_MARGIN` below the top edge unless the
/// text is too tall for a comfortable margin, in which case it anchors
/// at the ascent and accepts bottom clipping by omission. Measurement
/// failures propagate as errors; the caller degrades to an empty render.
pub fn layout_preview(
    lines: &[String],
    measurer: &dyn TextMeasurer,
    spec: &FontSpec,
    bounds: Bounds,
    label_text: &str,
) -> PreviewResult<PreviewLayout> {
    let height = f64::from(bounds.height);
    let metrics = measurer.measure(spec, "M")?;
    let line_spacing = metrics.line_spacing;
    let ascent = metrics.ascent;

    let total_height = line_spacing * lines.len() as f64;
    let mut y = if total_height > height - COMPACT_THRESHOLD_INSET {
        ascent
    } else {
        TOP_MARGIN + ascent
    };

    let mut laid_out = Vec::new();
    for line in lines {
        if y - ascent + line_spacing > height {
            break;
        }
        let advance_width = measurer.measure(spec, line)?.advance;
        laid_out.push(LaidOutLine {
            text: line.clone(),
            baseline_y: y,
            advance_width,
        });
        y += line_spacing;
    }

    let label = match laid_out.first() {
        Some(first) if !label_text.is_empty() => {
            place_label(label_text, measurer, spec, bounds, first, ascent)?
        }
        _ => None,
    };

    Ok(PreviewLayout {
        lines: laid_out,
        label,
    })
}

/// Position the annotation label beside the first line.
///
/// Preferred placement is right-aligned at the surface edge. On
/// collision the label falls back to a fixed gap after the line end,
/// squeezed into whatever width remains there; below `MIN_LABEL_WIDTH`
/// of remaining space no label is placed at all.
fn place_label(
    label_text: &str,
    measurer: &dyn TextMeasurer,
    spec: &FontSpec,
    bounds: Bounds,
    first: &LaidOutLine,
    main_ascent: f64,
) -> PreviewResult<Option<LabelPlacement>> {
    let small_spec = label_spec(spec);
    let small = measurer.measure(&small_spec, label_text)?;

    // Vertically align the label's ascent with the main line's.
    let baseline_y = first.baseline_y - (main_ascent - small.ascent);

    let label_x = f64::from(bounds.width) - small.advance - SIDE_MARGIN;
    let line_end_x = SIDE_MARGIN + first.advance_width;

    if label_x > line_end_x + LABEL_GAP {
        return Ok(Some(LabelPlacement {
            text: label_text.to_string(),
            x: label_x,
            baseline_y,
            spec: small_spec,
        }));
    }

    let available_width = (label_x - line_end_x - LABEL_GAP).max(0.0);
    if available_width <= MIN_LABEL_WIDTH {
        return Ok(None);
    }

    let text = shorten_to_fit(label_text, measurer, &small_spec, available_width)?;
    Ok(Some(LabelPlacement {
        text,
        x: line_end_x + LABEL_GAP,
        baseline_y,
        spec: small_spec,
    }))
}

/// Shorten `label_text` one grapheme at a time, ellipsis appended, until
/// it fits `available_width`. Returns the original text unchanged when it
/// already fits; never shortens below three graphemes.
fn shorten_to_fit(
    label_text: &str,
    measurer: &dyn TextMeasurer,
    spec: &FontSpec,
    available_width: f64,
) -> PreviewResult<String> {
    let mut shortened = label_text.to_string();
    loop {
        let candidate = format!("{shortened}{LABEL_ELLIPSIS}");
        if measurer.measure(spec, &candidate)?.advance <= available_width {
            break;
        }
        let graphemes: Vec<&str> = shortened.graphemes(true).collect();
        if graphemes.len() <= 3 {
            break;
        }
        shortened = graphemes[..graphemes.len() - 1].concat();
    }

    if shortened.len() < label_text.len() {
        Ok(format!("{shortened}{LABEL_ELLIPSIS}"))
    } else {
        Ok(label_text.to_string())
    }
}
