//! Catalog snapshot from the pango font map
//!
//! Pango font objects live on the GTK main thread, so the catalog is
//! snapshotted into plain (family, styles) strings up front and the
//! enumeration thread works from the copy. Family and face names come
//! back exactly as pango reports them ("Bold Italic", "Condensed", ...).

use pango::prelude::*;
use preview_core::SnapshotSource;
use tracing::debug;

/// Snapshot every family and face name the default font map knows about.
///
/// Call from the main thread; the returned source is `Send` and feeds
/// [`preview_core::spawn_enumeration`].
pub fn pango_snapshot() -> SnapshotSource {
    let font_map = pangocairo::FontMap::default();
    let families = font_map.list_families();

    let entries: Vec<(String, Vec<String>)> = families
        .iter()
        .map(|family| {
            let styles = family
                .list_faces()
                .iter()
                .map(|face| face.face_name().to_string())
                .collect();
            (family.name().to_string(), styles)
        })
        .collect();

    debug!("pango font map snapshot: {} families", entries.len());
    SnapshotSource::new(entries)
}
