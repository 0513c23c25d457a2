//! Single-entry render cache
//!
//! Each preview surface owns one cache slot: the last rendered bitmap
//! keyed by the request that produced it. Any differing request replaces
//! the entry (no LRU, no history), and explicit invalidation clears it,
//! so a repaint with unchanged inputs costs nothing.

use crate::error::PreviewResult;
use crate::render::{PreviewBitmap, PreviewRequest};

#[derive(Debug, Default)]
pub struct PreviewCache {
    entry: Option<(PreviewRequest, PreviewBitmap)>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached bitmap for `request`, rendering it first if the
    /// stored key differs or nothing is cached.
    ///
    /// A failed render leaves the cache untouched so the next call can
    /// try again.
    pub fn get_or_render<F>(
        &mut self,
        request: &PreviewRequest,
        render: F,
    ) -> PreviewResult<&PreviewBitmap>
    where
        F: FnOnce(&PreviewRequest) -> PreviewResult<PreviewBitmap>,
    {
        let hit = matches!(&self.entry, Some((stored, _)) if stored == request);
        if !hit {
            let bitmap = render(request)?;
            self.entry = Some((request.clone(), bitmap));
        }
        Ok(&self.entry.as_ref().expect("entry populated above").1)
    }

    /// Drop the entry unconditionally (surface resize, disposal)
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::PreviewError;
    use crate::font::FontWeight;
    use crate::layout::Bounds;

    fn request() -> PreviewRequest {
        PreviewRequest {
            family: "Test Sans".to_string(),
            style_name: "Regular".to_string(),
            text: "sample".to_string(),
            size_pt: 24,
            color: Color::rgb(0.0, 0.0, 0.0),
            weight: FontWeight::Normal,
            bounds: Bounds::new(400, 100),
        }
    }

    fn counting_render(counter: &mut usize) -> impl FnOnce(&PreviewRequest) -> PreviewResult<PreviewBitmap> + '_ {
        move |req| {
            *counter += 1;
            Ok(PreviewBitmap::blank(req.bounds.width, req.bounds.height))
        }
    }

    #[test]
    fn equal_keys_render_exactly_once() {
        let mut cache = PreviewCache::new();
        let mut renders = 0;
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        assert_eq!(renders, 1);
    }

    #[test]
    fn any_single_field_change_forces_a_rerender() {
        let base = request();
        let mut variations = vec![base.clone(); 7];
        variations[0].family = "Other".to_string();
        variations[1].style_name = "Bold".to_string();
        variations[2].text = "different".to_string();
        variations[3].size_pt = 36;
        variations[4].color = Color::rgb(1.0, 0.0, 0.0);
        variations[5].weight = FontWeight::Bold;
        variations[6].bounds = Bounds::new(300, 100);

        for changed in variations {
            let mut cache = PreviewCache::new();
            let mut renders = 0;
            cache.get_or_render(&base, counting_render(&mut renders)).unwrap();
            cache.get_or_render(&changed, counting_render(&mut renders)).unwrap();
            assert_eq!(renders, 2, "change did not invalidate: {changed:?}");
        }
    }

    #[test]
    fn invalidate_clears_the_entry() {
        let mut cache = PreviewCache::new();
        let mut renders = 0;
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        cache.invalidate();
        assert!(cache.is_empty());
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        assert_eq!(renders, 2);
    }

    #[test]
    fn replacement_keeps_at_most_one_entry() {
        let mut cache = PreviewCache::new();
        let mut renders = 0;
        let other = PreviewRequest {
            text: "else".to_string(),
            ..request()
        };
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        cache.get_or_render(&other, counting_render(&mut renders)).unwrap();
        // Flipping back misses again: the first entry was replaced.
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        assert_eq!(renders, 3);
    }

    #[test]
    fn failed_render_is_not_cached() {
        let mut cache = PreviewCache::new();
        let result = cache.get_or_render(&request(), |_| {
            Err(PreviewError::RenderFailed {
                message: "surface gone".to_string(),
            })
        });
        assert!(result.is_err());
        assert!(cache.is_empty());

        let mut renders = 0;
        cache.get_or_render(&request(), counting_render(&mut renders)).unwrap();
        assert_eq!(renders, 1);
    }
}
