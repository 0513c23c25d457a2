//! Preview surface widget
//!
//! One `PreviewArea` wraps a `DrawingArea` and owns one render cache.
//! The draw function builds the request for the current surface size,
//! pulls the bitmap out of the cache (rendering offscreen on a miss),
//! and paints it. Resize invalidates the cache explicitly; every other
//! invalidation falls out of request equality.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::DrawingArea;
use preview_core::{Bounds, PreviewCache, PreviewRequest};
use tracing::warn;

use crate::cairo_renderer::{paint_bitmap, render_offscreen};

const MIN_PREVIEW_HEIGHT: i32 = 60;

pub struct PreviewArea {
    area: DrawingArea,
    request: Rc<RefCell<Option<PreviewRequest>>>,
}

impl Default for PreviewArea {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewArea {
    pub fn new() -> Self {
        let area = DrawingArea::new();
        area.set_hexpand(true);
        area.set_content_height(MIN_PREVIEW_HEIGHT);
        area.add_css_class("preview-surface");

        let cache = Rc::new(RefCell::new(PreviewCache::new()));
        let request: Rc<RefCell<Option<PreviewRequest>>> = Rc::new(RefCell::new(None));

        let draw_cache = Rc::clone(&cache);
        let draw_request = Rc::clone(&request);
        area.set_draw_func(move |_, cr, width, height| {
            let Some(base) = draw_request.borrow().clone() else {
                return;
            };
            let request = PreviewRequest {
                bounds: Bounds::new(width, height),
                ..base
            };

            match draw_cache.borrow_mut().get_or_render(&request, render_offscreen) {
                Ok(bitmap) => paint_bitmap(cr, bitmap),
                // Degrade to a blank frame; the next change retries.
                Err(e) => warn!("preview render failed for {}: {}", request.label_text(), e),
            }
        });

        let resize_cache = Rc::clone(&cache);
        area.connect_resize(move |_, _, _| {
            resize_cache.borrow_mut().invalidate();
        });

        PreviewArea { area, request }
    }

    /// Point this surface at a new request; bounds are filled in per
    /// draw from the actual widget size.
    pub fn set_request(&self, request: PreviewRequest) {
        *self.request.borrow_mut() = Some(request);
        self.area.queue_draw();
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }
}
