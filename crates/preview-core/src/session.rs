//! Interactive session state
//!
//! [`PreviewSession`] owns everything the window would otherwise keep in
//! ad-hoc mutable fields: the catalog being filled by enumeration, the
//! search filter, the row selection, the preview configuration, and the
//! debounce generation. The UI layer holds one session, forwards events
//! into it, and asks it what to show; it never reaches around it into
//! shared state.

use tracing::debug;

use crate::config::{PreviewConfig, PreviewMode};
use crate::constants::{NEIGHBORS_AFTER, NEIGHBORS_BEFORE, SELECTED_PREVIEW_LIMIT};
use crate::font::{CatalogEvent, FontCatalog, FontVariant};
use crate::layout::Bounds;
use crate::render::PreviewRequest;

/// Enumeration progress for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Percent of families processed so far
    Loading(u8),
    /// Final variant count
    Loaded(usize),
}

pub struct PreviewSession {
    catalog: FontCatalog,
    config: PreviewConfig,
    filter: String,
    /// Catalog indices matching the filter, in enumeration order
    filtered: Vec<usize>,
    /// Multi-selected variants, kept as identities so they survive
    /// refiltering
    selected: Vec<FontVariant>,
    /// Current row in the filtered list
    current: usize,
    load_state: LoadState,
    /// Bumped on every change; pending debounce timers compare against it
    generation: u64,
}

impl PreviewSession {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            catalog: FontCatalog::new(),
            config,
            filter: String::new(),
            filtered: Vec::new(),
            selected: Vec::new(),
            current: 0,
            load_state: LoadState::Loaded(0),
            generation: 0,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Ingest one enumeration event. Incremental variants are appended
    /// and filtered immediately so the list fills while loading runs;
    /// completion replaces the catalog with the authoritative list.
    pub fn apply_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Progress { completed, total } => {
                let percent = if total == 0 {
                    100
                } else {
                    (completed * 100 / total) as u8
                };
                self.load_state = LoadState::Loading(percent);
            }
            CatalogEvent::Variant(variant) => {
                if self.matches_filter(&variant) {
                    self.filtered.push(self.catalog.len());
                }
                self.catalog.push(variant);
            }
            CatalogEvent::Completed(variants) => {
                debug!("catalog completed with {} variants", variants.len());
                self.load_state = LoadState::Loaded(variants.len());
                self.catalog.replace(variants);
                self.refilter();
            }
        }
    }

    fn matches_filter(&self, variant: &FontVariant) -> bool {
        variant
            .display_name()
            .to_lowercase()
            .contains(&self.filter.to_lowercase())
    }

    fn refilter(&mut self) {
        self.filtered = self.catalog.filter_indices(&self.filter);
        self.current = 0;
    }

    /// Update the search filter and reset the current row
    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
        self.refilter();
    }

    /// Display names for the filtered list, in list order
    pub fn filtered_names(&self) -> Vec<String> {
        self.filtered
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .map(FontVariant::display_name)
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Make `row` the current row. Out-of-range rows are ignored rather
    /// than raised.
    pub fn select_row(&mut self, row: usize) {
        if row < self.filtered.len() {
            self.current = row;
        }
    }

    /// Replace the multi-selection with the variants at `rows`,
    /// silently skipping anything out of range.
    pub fn set_selected_rows(&mut self, rows: &[usize]) {
        self.selected = rows
            .iter()
            .filter_map(|&row| self.filtered.get(row))
            .filter_map(|&i| self.catalog.get(i))
            .cloned()
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn current_variant(&self) -> Option<&FontVariant> {
        self.filtered
            .get(self.current)
            .and_then(|&i| self.catalog.get(i))
    }

    /// The variants to preview under the active mode: the current row,
    /// a neighbor window around it, or the first slice of the
    /// multi-selection.
    pub fn visible_variants(&self) -> Vec<FontVariant> {
        match self.config.preview_mode {
            PreviewMode::Single => self.current_variant().cloned().into_iter().collect(),
            PreviewMode::Multi => {
                let Some(current) = self.current_variant() else {
                    return Vec::new();
                };
                let center = self.catalog.position_of(current).unwrap_or(0);
                let start = center.saturating_sub(NEIGHBORS_BEFORE);
                let end = (center + NEIGHBORS_AFTER).min(self.catalog.len());
                self.catalog.variants()[start..end].to_vec()
            }
            PreviewMode::Selected => self
                .selected
                .iter()
                .take(SELECTED_PREVIEW_LIMIT)
                .cloned()
                .collect(),
        }
    }

    /// The request a preview surface should render for `variant`
    pub fn build_request(&self, variant: &FontVariant, bounds: Bounds) -> PreviewRequest {
        PreviewRequest {
            family: variant.family.clone(),
            style_name: variant.style_name.clone(),
            text: self.config.preview_text.clone(),
            size_pt: self.config.font_size,
            color: self.config.text_color,
            weight: self.config.weight(),
            bounds,
        }
    }

    // Configuration mutations. Each one is a candidate for a debounced
    // refresh; callers pair them with note_change().

    pub fn set_font_size(&mut self, size: i32) {
        self.config.font_size = size.clamp(
            crate::constants::MIN_FONT_SIZE,
            crate::constants::MAX_FONT_SIZE,
        );
    }

    pub fn set_text_color(&mut self, color: crate::color::Color) {
        self.config.text_color = color;
    }

    pub fn set_weight_value(&mut self, value: u8) {
        self.config.weight_value = value.min(crate::constants::WEIGHT_SLIDER_MAX);
    }

    pub fn set_preview_text(&mut self, text: &str) {
        self.config.preview_text = text.to_string();
    }

    pub fn set_preview_mode(&mut self, mode: PreviewMode) {
        self.config.preview_mode = mode;
    }

    /// Record a change burst member and return its generation. A pending
    /// refresh fires only if no newer change arrived, which is what makes
    /// a restarted debounce timer cancel its predecessors.
    pub fn note_change(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether `generation` is still the newest recorded change
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
