//! Cairo/pango renderer implementations for the GTK4 backend

use cairo::{Context, Format, ImageSurface};
use preview_core::{
    draw_preview, plan_preview, Color, FontSpec, FontWeight, PreviewBitmap, PreviewError,
    PreviewRequest, PreviewResult, TextMeasurer, TextMetrics, TextPainter,
};
use tracing::warn;

/// Map the preview weight scale onto pango's
fn pango_weight(weight: FontWeight) -> pango::Weight {
    match weight {
        FontWeight::Thin => pango::Weight::Thin,
        FontWeight::ExtraLight => pango::Weight::Ultralight,
        FontWeight::Light => pango::Weight::Light,
        FontWeight::Book => pango::Weight::Book,
        FontWeight::Normal => pango::Weight::Normal,
        FontWeight::Medium => pango::Weight::Medium,
        FontWeight::SemiBold => pango::Weight::Semibold,
        FontWeight::Bold => pango::Weight::Bold,
        FontWeight::Black => pango::Weight::Heavy,
    }
}

/// Build a pango description for a draw spec.
///
/// The style name goes through pango's description parser so names like
/// "Bold Italic" or "Condensed" select the right face. A non-Normal
/// slider weight overrides whatever the style name implied; at Normal
/// the style name wins.
fn font_description(spec: &FontSpec) -> pango::FontDescription {
    let mut desc = if spec.style_name.is_empty() {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&spec.family);
        desc
    } else {
        pango::FontDescription::from_string(&format!("{} {}", spec.family, spec.style_name))
    };

    desc.set_size(spec.size_pt * pango::SCALE);
    if spec.weight != FontWeight::Normal {
        desc.set_weight(pango_weight(spec.weight));
    }
    desc
}

/// Text measurement and drawing over a cairo context via pango
pub struct CairoPreviewPainter {
    cr: Context,
    pango: pango::Context,
}

impl CairoPreviewPainter {
    pub fn new(cr: &Context) -> Self {
        let pango = pangocairo::functions::create_context(cr);
        CairoPreviewPainter {
            cr: cr.clone(),
            pango,
        }
    }

    fn layout_for(&self, spec: &FontSpec, text: &str) -> pango::Layout {
        let layout = pango::Layout::new(&self.pango);
        layout.set_font_description(Some(&font_description(spec)));
        layout.set_text(text);
        layout
    }
}

impl TextMeasurer for CairoPreviewPainter {
    fn measure(&self, spec: &FontSpec, text: &str) -> PreviewResult<TextMetrics> {
        let layout = self.layout_for(spec, text);
        let (width, _) = layout.pixel_size();

        let metrics = self
            .pango
            .metrics(Some(&font_description(spec)), None);
        let scale = f64::from(pango::SCALE);

        Ok(TextMetrics {
            advance: f64::from(width),
            line_spacing: f64::from(metrics.ascent() + metrics.descent()) / scale,
            ascent: f64::from(metrics.ascent()) / scale,
        })
    }
}

impl TextPainter for CairoPreviewPainter {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, spec: &FontSpec, color: Color) {
        let layout = self.layout_for(spec, text);
        // Pango draws from the layout's top-left corner; y is a baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
        self.cr.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.cr, &layout);
    }
}

/// Render a request into an offscreen pixel buffer.
///
/// This is the render function preview caches invoke on a miss. Failure
/// is an explicit error; callers log it and show nothing for the frame.
pub fn render_offscreen(request: &PreviewRequest) -> PreviewResult<PreviewBitmap> {
    let width = request.bounds.width.max(1);
    let height = request.bounds.height.max(1);

    let mut surface = ImageSurface::create(Format::ARgb32, width, height).map_err(|e| {
        PreviewError::SurfaceError {
            message: e.to_string(),
        }
    })?;

    {
        let cr = Context::new(&surface).map_err(|e| PreviewError::SurfaceError {
            message: e.to_string(),
        })?;
        let mut painter = CairoPreviewPainter::new(&cr);
        let layout = plan_preview(request, &painter)?;
        draw_preview(&layout, request, &mut painter);
    }

    surface.flush();
    let data = surface
        .data()
        .map_err(|e| PreviewError::SurfaceError {
            message: e.to_string(),
        })?
        .to_vec();

    Ok(PreviewBitmap {
        width,
        height,
        data,
    })
}

/// Paint a cached bitmap back onto a widget's cairo context
pub fn paint_bitmap(cr: &Context, bitmap: &PreviewBitmap) {
    let surface = ImageSurface::create_for_data(
        bitmap.data.clone(),
        Format::ARgb32,
        bitmap.width,
        bitmap.height,
        bitmap.width * 4,
    );

    match surface {
        Ok(surface) => {
            if cr.set_source_surface(&surface, 0.0, 0.0).is_ok() {
                let _ = cr.paint();
            }
        }
        Err(e) => warn!("could not wrap cached bitmap for painting: {}", e),
    }
}
