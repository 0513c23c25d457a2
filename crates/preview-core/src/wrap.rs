//! Greedy word wrapping against measured advances
//!
//! Pure and deterministic: the same text, font, and width always produce
//! the same lines, and inputs are never mutated. Measurement goes through
//! the [`TextMeasurer`] trait so the pass is backend- and thread-agnostic.

use crate::error::PreviewResult;
use crate::font::FontSpec;
use crate::traits::TextMeasurer;

/// Wrap `text` into display lines no wider than `available_width`.
///
/// Fast path: when the whole text already fits, explicit newlines are the
/// only splits and segments are returned verbatim. Otherwise tokens are
/// packed greedily, with explicit newlines acting as hard breaks that
/// flush the current line and emit an empty marker line. A single token
/// wider than the bounds is emitted verbatim on its own line - accepted
/// overflow, never character-split, never dropped.
pub fn wrap_text(
    text: &str,
    measurer: &dyn TextMeasurer,
    spec: &FontSpec,
    available_width: f64,
) -> PreviewResult<Vec<String>> {
    if measurer.measure(spec, text)?.advance <= available_width {
        return Ok(text.split('\n').map(str::to_string).collect());
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            // Hard break: flush whatever accumulated and keep the blank
            // line the break produces.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(String::new());
        }

        for token in segment.split_whitespace() {
            let tentative = if current.is_empty() {
                token.to_string()
            } else {
                format!("{current} {token}")
            };

            if measurer.measure(spec, &tentative)?.advance > available_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                if measurer.measure(spec, token)?.advance > available_width {
                    lines.push(token.to_string());
                } else {
                    current = token.to_string();
                }
            } else {
                current = tentative;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::DummyMeasurer;
    use crate::font::FontWeight;

    fn spec() -> FontSpec {
        FontSpec::new("Test Sans", "Regular", 24, FontWeight::Normal)
    }

    // DummyMeasurer advances 8px per char, so width 80 fits ten chars.

    #[test]
    fn fitting_text_splits_only_on_newlines() {
        let measurer = DummyMeasurer::default();
        let lines = wrap_text("ab cd\nef", &measurer, &spec(), 100.0).unwrap();
        assert_eq!(lines, vec!["ab cd", "ef"]);
    }

    #[test]
    fn fitting_single_line_passes_through() {
        let measurer = DummyMeasurer::default();
        let lines = wrap_text("short", &measurer, &spec(), 100.0).unwrap();
        assert_eq!(lines, vec!["short"]);
    }

    #[test]
    fn greedy_wrap_packs_tokens() {
        let measurer = DummyMeasurer::default();
        let lines = wrap_text("aa bb cc dd ee", &measurer, &spec(), 64.0).unwrap();
        // "aa bb" and "aa bb cc" measure 40 and 64; adding " dd" overflows.
        assert_eq!(lines, vec!["aa bb cc", "dd ee"]);
    }

    #[test]
    fn wrapped_lines_never_exceed_width() {
        let measurer = DummyMeasurer::default();
        let width = 50.0;
        let lines =
            wrap_text("a very long sentence that exceeds the box", &measurer, &spec(), width)
                .unwrap();
        for line in &lines {
            let advance = measurer.measure(&spec(), line).unwrap().advance;
            let is_single_token = !line.contains(' ');
            assert!(
                advance <= width || is_single_token,
                "line {line:?} exceeds width without being a lone token"
            );
        }
    }

    #[test]
    fn overlong_token_is_isolated_not_split() {
        let measurer = DummyMeasurer::default();
        let lines = wrap_text("hi incomprehensibilities yo", &measurer, &spec(), 64.0).unwrap();
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn hard_breaks_emit_empty_marker_lines() {
        let measurer = DummyMeasurer::default();
        // Too wide for the fast path, so breaks run through the greedy pass.
        let lines = wrap_text("aaaa bbbb\ncccc dddd", &measurer, &spec(), 40.0).unwrap();
        assert_eq!(lines, vec!["aaaa", "bbbb", "", "cccc", "dddd"]);
    }

    #[test]
    fn no_token_is_ever_dropped() {
        let measurer = DummyMeasurer::default();
        let text = "one two three four five six seven";
        let lines = wrap_text(text, &measurer, &spec(), 48.0).unwrap();
        let rejoined: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let measurer = DummyMeasurer::default();
        let a = wrap_text("repeat me a few times over", &measurer, &spec(), 56.0).unwrap();
        let b = wrap_text("repeat me a few times over", &measurer, &spec(), 56.0).unwrap();
        assert_eq!(a, b);
    }
}
