//! Font catalog and background enumeration
//!
//! Enumeration can walk thousands of (family, style) pairs, so it runs on
//! a background thread and streams results over a channel: a progress
//! notification after each family, one event per accepted variant, and a
//! terminal completion event carrying the full ordered list. The consumer
//! owns the [`FontCatalog`] value and is the only side that mutates it;
//! the producer never touches shared state.

use std::thread;

use tracing::{debug, info, warn};

use crate::font::dedup::reduce_styles;
use crate::font::FontVariant;
use crate::traits::CatalogSource;

/// Notification from the enumeration thread
///
/// Consumers must tolerate `Variant` events arriving before `Completed`;
/// the completion payload is the authoritative ordered list.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// One more family has been processed
    Progress { completed: usize, total: usize },
    /// A variant was accepted into the catalog
    Variant(FontVariant),
    /// Enumeration finished; the full ordered list
    Completed(Vec<FontVariant>),
}

/// Owned, ordered collection of enumerated font variants
///
/// Replaces ambient mutable lists: the application root owns one catalog
/// and passes it by reference into filtering and preview code.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    variants: Vec<FontVariant>,
}

impl FontCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_variants(variants: Vec<FontVariant>) -> Self {
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn variants(&self) -> &[FontVariant] {
        &self.variants
    }

    pub fn get(&self, index: usize) -> Option<&FontVariant> {
        self.variants.get(index)
    }

    /// Append an incrementally discovered variant
    pub fn push(&mut self, variant: FontVariant) {
        self.variants.push(variant);
    }

    /// Replace the contents with the authoritative completed list
    pub fn replace(&mut self, variants: Vec<FontVariant>) {
        self.variants = variants;
    }

    /// Position of a variant in enumeration order
    pub fn position_of(&self, variant: &FontVariant) -> Option<usize> {
        self.variants.iter().position(|v| v == variant)
    }

    /// Indices of variants whose display name contains `query`
    /// (case-insensitive); an empty query matches everything.
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        let query = query.to_lowercase();
        self.variants
            .iter()
            .enumerate()
            .filter(|(_, v)| v.display_name().to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Pre-listed (family, styles) pairs usable as a catalog source.
///
/// GUI font maps are main-thread objects; snapshotting them into plain
/// strings lets the enumeration thread run without touching the toolkit.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    entries: Vec<(String, Vec<String>)>,
}

impl SnapshotSource {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for SnapshotSource {
    fn list_families(&self) -> Vec<String> {
        self.entries.iter().map(|(family, _)| family.clone()).collect()
    }

    fn list_styles(&self, family: &str) -> Vec<String> {
        self.entries
            .iter()
            .find(|(f, _)| f == family)
            .map(|(_, styles)| styles.clone())
            .unwrap_or_default()
    }
}

/// Reduce one family's styles and pair each survivor with the family.
///
/// A family whose styles all dedup away still gets a conventional
/// "Regular" entry so it stays reachable from the list.
pub fn variants_for_family(family: &str, styles: &[String]) -> Vec<FontVariant> {
    let mut kept = reduce_styles(styles);
    if kept.is_empty() {
        kept.push("Regular".to_string());
    }
    kept.into_iter()
        .map(|style| FontVariant::new(family, &style))
        .collect()
}

/// Start the background enumeration thread.
///
/// Sends [`CatalogEvent`]s over `tx` until the source is exhausted, then a
/// final `Completed`. A closed channel ends the thread early; that is the
/// only cancellation mechanism and it is not an error.
pub fn spawn_enumeration<S>(source: S, tx: async_channel::Sender<CatalogEvent>)
where
    S: CatalogSource + Send + 'static,
{
    thread::spawn(move || {
        debug!("catalog enumeration thread starting");

        let families = source.list_families();
        let total = families.len();
        let mut collected: Vec<FontVariant> = Vec::new();

        for (completed, family) in families.iter().enumerate() {
            let styles = source.list_styles(family);
            for variant in variants_for_family(family, &styles) {
                if tx.send_blocking(CatalogEvent::Variant(variant.clone())).is_err() {
                    warn!("catalog consumer went away; stopping enumeration");
                    return;
                }
                collected.push(variant);
            }

            let progress = CatalogEvent::Progress {
                completed: completed + 1,
                total,
            };
            if tx.send_blocking(progress).is_err() {
                warn!("catalog consumer went away; stopping enumeration");
                return;
            }
        }

        info!(
            "catalog enumeration finished: {} variants from {} families",
            collected.len(),
            total
        );
        let _ = tx.send_blocking(CatalogEvent::Completed(collected));
    });
}
