// tests/preview_pipeline_tests.rs
//! Integration tests for realistic preview scenarios

use preview_core::{
    plan_preview, reduce_styles, spawn_enumeration, wrap_text, Bounds, CatalogEvent, Color,
    FontSpec, FontVariant, FontWeight, PreviewCache, PreviewConfig, PreviewMode, PreviewRequest,
    PreviewResult, PreviewSession, TextMeasurer, TextMetrics,
};

/// Mock measurer for integration testing: proportional to character
/// count and point size, so label fonts really measure narrower.
struct ScaledMeasurer;

impl TextMeasurer for ScaledMeasurer {
    fn measure(&self, spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics> {
        let em = f64::from(spec.size_pt);
        Ok(TextMetrics {
            advance: text.chars().count() as f64 * em * 0.5,
            line_spacing: em * 1.2,
            ascent: em * 0.8,
        })
    }
}

fn request(text: &str, bounds: Bounds) -> PreviewRequest {
    PreviewRequest {
        family: "Quincy".to_string(),
        style_name: "Regular".to_string(),
        text: text.to_string(),
        size_pt: 24,
        color: Color::rgb(0.1, 0.1, 0.1),
        weight: FontWeight::Normal,
        bounds,
    }
}

#[test]
fn catalog_to_preview_round_trip() {
    // Styles stream through enumeration, dedup to four, and end up
    // renderable through a session-built request.
    let (tx, rx) = async_channel::unbounded();
    let source = preview_core::SnapshotSource::new(vec![(
        "Quincy".to_string(),
        vec![
            "Regular".to_string(),
            "Bold".to_string(),
            "Italic".to_string(),
            "Bold Italic".to_string(),
            "Black".to_string(),
        ],
    )]);
    spawn_enumeration(source, tx);

    let mut session = PreviewSession::new(PreviewConfig::default());
    while let Ok(event) = rx.recv_blocking() {
        let done = matches!(event, CatalogEvent::Completed(_));
        session.apply_event(event);
        if done {
            break;
        }
    }

    assert_eq!(
        session.filtered_names(),
        vec![
            "Quincy - Regular",
            "Quincy - Bold Italic",
            "Quincy - Bold",
            "Quincy - Italic",
        ]
    );

    let variant = session.current_variant().expect("first row").clone();
    let req = session.build_request(&variant, Bounds::new(600, 120));
    let layout = plan_preview(&req, &ScaledMeasurer).expect("layout");
    assert!(!layout.lines.is_empty());
}

#[test]
fn dedup_is_bounded_for_arbitrary_inputs() {
    let inputs: Vec<Vec<&str>> = vec![
        vec![],
        vec!["Regular"],
        vec!["Heavy", "Light", "Thin", "Condensed", "Wide", "Narrow"],
        vec!["Bold", "Bold", "Bold", "Bold", "Bold"],
        vec!["Regular", "Bold", "Italic", "Bold Italic", "Black", "Oblique"],
    ];
    for styles in inputs {
        let reduced = reduce_styles(&styles);
        assert!(reduced.len() <= 4, "unbounded output for {styles:?}");
    }
}

#[test]
fn wrap_fast_path_preserves_newline_segments() {
    let spec = FontSpec::new("Quincy", "Regular", 12, FontWeight::Normal);
    let text = "alpha\nbeta gamma\n\ndelta";
    // 12pt halves to 6px per char: 23 chars = 138 <= 200.
    let lines = wrap_text(text, &ScaledMeasurer, &spec, 200.0).unwrap();
    assert_eq!(lines, vec!["alpha", "beta gamma", "", "delta"]);
}

#[test]
fn wrapped_preview_drops_lines_past_the_bottom_edge() {
    // 40 words at 24pt against a narrow surface wrap to many lines; the
    // layout keeps only what fits vertically and drops the rest.
    let words = vec!["word"; 40].join(" ");
    let req = request(&words, Bounds::new(200, 90));
    let layout = plan_preview(&req, &ScaledMeasurer).unwrap();
    assert!(!layout.lines.is_empty());
    let spacing = 24.0 * 1.2;
    let ascent = 24.0 * 0.8;
    for line in &layout.lines {
        assert!(line.baseline_y - ascent + spacing <= 90.0 + 1e-9);
    }
    // More lines were wrapped than laid out.
    let spec = req.spec();
    let wrapped = wrap_text(&words, &ScaledMeasurer, &spec, 180.0).unwrap();
    assert!(wrapped.len() > layout.lines.len());
}

#[test]
fn annotation_label_is_omitted_when_the_line_crowds_it() {
    // A line long enough to reach the label region suppresses the label.
    let req = request("mmmmmmmmmmmmmmmmmmmmmmmm", Bounds::new(320, 120));
    let layout = plan_preview(&req, &ScaledMeasurer).unwrap();
    assert!(layout.label.is_none());

    // A short line leaves room and the full name is right-aligned.
    let req = request("hi", Bounds::new(620, 120));
    let layout = plan_preview(&req, &ScaledMeasurer).unwrap();
    let label = layout.label.expect("label placed");
    assert_eq!(label.text, "Quincy - Regular");
    let label_advance = 16.0 * 10.0; // 16 chars at 20pt * 0.5
    assert_eq!(label.x, 620.0 - label_advance - 10.0);
}

#[test]
fn cache_reuses_identical_requests_across_repaints() {
    let mut cache = PreviewCache::new();
    let mut renders = 0;
    let req = request("cached text", Bounds::new(400, 100));

    for _ in 0..3 {
        let bitmap = cache
            .get_or_render(&req, |r| {
                renders += 1;
                let layout = plan_preview(r, &ScaledMeasurer)?;
                assert!(!layout.lines.is_empty());
                Ok(preview_core::PreviewBitmap::blank(
                    r.bounds.width,
                    r.bounds.height,
                ))
            })
            .expect("render");
        assert_eq!(bitmap.width, 400);
    }
    assert_eq!(renders, 1);

    // A size change is a different key and renders again.
    let mut larger = req.clone();
    larger.size_pt = 36;
    cache
        .get_or_render(&larger, |r| {
            renders += 1;
            Ok(preview_core::PreviewBitmap::blank(
                r.bounds.width,
                r.bounds.height,
            ))
        })
        .expect("render");
    assert_eq!(renders, 2);
}

#[test]
fn mode_switches_change_what_gets_previewed() {
    let mut session = PreviewSession::new(PreviewConfig::default());
    let variants: Vec<FontVariant> = (0..30)
        .map(|i| FontVariant::new(&format!("Family{i:02}"), "Regular"))
        .collect();
    session.apply_event(CatalogEvent::Completed(variants));

    session.select_row(15);
    assert_eq!(session.visible_variants().len(), 1);

    session.set_preview_mode(PreviewMode::Multi);
    assert_eq!(session.visible_variants().len(), 11);

    session.set_preview_mode(PreviewMode::Selected);
    let rows: Vec<usize> = (0..30).collect();
    session.set_selected_rows(&rows);
    assert_eq!(session.visible_variants().len(), 20);
}

#[test]
fn debounce_generations_coalesce_bursts() {
    let mut session = PreviewSession::new(PreviewConfig::default());
    // A slider drag: many changes, each arming a timer with its own
    // generation. Only the last timer finds its generation current.
    let generations: Vec<u64> = (0..10)
        .map(|size| {
            session.set_font_size(20 + size);
            session.note_change()
        })
        .collect();
    let fired: Vec<u64> = generations
        .iter()
        .copied()
        .filter(|&generation| session.is_current(generation))
        .collect();
    assert_eq!(fired, vec![*generations.last().unwrap()]);
}
