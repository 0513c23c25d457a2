//! Style-name reduction
//!
//! Font families routinely expose a dozen or more style names (condensed,
//! optical sizes, numbered weights). The catalog keeps at most four per
//! family: one winner each for the regular, bold-italic, bold, and italic
//! buckets, plus unclassified overflow while room remains.

use crate::constants::MAX_STYLES_PER_FAMILY;

/// Reduce a family's raw style names to a bounded canonical subset.
///
/// Each name is classified case-insensitively into exactly one bucket,
/// scanned in the family's natural enumeration order:
/// 1. regular: contains "regular", or is exactly "normal"/"book" while the
///    regular bucket is still open
/// 2. bold italic: contains both "bold" and "italic"
/// 3. bold / 4. italic: contains exactly one of the two
/// 5. overflow: everything else, accepted only while fewer than four names
///    have been accepted so far
///
/// The first match wins each named bucket; later contenders for a filled
/// bucket are dropped. The result lists bucket winners in priority order
/// (regular, bold italic, bold, italic) followed by overflow in scan
/// order, truncated to four entries. An empty or fully-dropped input
/// yields an empty result; callers supply a conventional "Regular"
/// fallback when that matters.
pub fn reduce_styles<S: AsRef<str>>(style_names: &[S]) -> Vec<String> {
    let mut regular: Option<String> = None;
    let mut bold_italic: Option<String> = None;
    let mut bold: Option<String> = None;
    let mut italic: Option<String> = None;
    let mut overflow: Vec<String> = Vec::new();

    fn claim(slot: &mut Option<String>, style: &str, accepted: &mut usize) {
        if slot.is_none() {
            *slot = Some(style.to_string());
            *accepted += 1;
        }
    }

    let mut accepted = 0usize;

    for style in style_names {
        let style = style.as_ref();
        let lower = style.to_lowercase();

        if lower.contains("regular")
            || (regular.is_none() && (lower == "normal" || lower == "book"))
        {
            claim(&mut regular, style, &mut accepted);
        } else if lower.contains("bold") && lower.contains("italic") {
            claim(&mut bold_italic, style, &mut accepted);
        } else if lower.contains("bold") {
            claim(&mut bold, style, &mut accepted);
        } else if lower.contains("italic") {
            claim(&mut italic, style, &mut accepted);
        } else if accepted < MAX_STYLES_PER_FAMILY {
            overflow.push(style.to_string());
            accepted += 1;
        }
    }

    let mut kept: Vec<String> = [regular, bold_italic, bold, italic]
        .into_iter()
        .flatten()
        .collect();
    kept.extend(overflow);
    kept.truncate(MAX_STYLES_PER_FAMILY);
    kept
}
