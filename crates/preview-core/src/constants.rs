// src/constants.rs
use crate::color::Color;

// Preview text defaults
pub const DEFAULT_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog 0123456789";
pub const DEFAULT_FONT_SIZE: i32 = 24;
pub const MIN_FONT_SIZE: i32 = 8;
pub const MAX_FONT_SIZE: i32 = 72;

// Weight slider (0..=99 continuous control mapped onto 9 discrete buckets)
pub const WEIGHT_SLIDER_MAX: u8 = 99;
pub const WEIGHT_SLIDER_DEFAULT: u8 = 50;

// Catalog limits
pub const MAX_STYLES_PER_FAMILY: usize = 4;
/// Carrier size recorded on variants at enumeration time
pub const ENUMERATION_SIZE_PT: i32 = 12;
pub const SELECTED_PREVIEW_LIMIT: usize = 20;
pub const NEIGHBORS_BEFORE: usize = 5;
pub const NEIGHBORS_AFTER: usize = 6;

// Layout geometry (pixels)
pub const SIDE_MARGIN: f64 = 10.0;
pub const TOP_MARGIN: f64 = 10.0;
pub const COMPACT_THRESHOLD_INSET: f64 = 20.0;
pub const LABEL_GAP: f64 = 20.0;
pub const MIN_LABEL_WIDTH: f64 = 30.0;
pub const LABEL_ELLIPSIS: &str = "...";

// Annotation label font (points)
pub const LABEL_SIZE_DELTA: i32 = 4;
pub const MIN_LABEL_SIZE: i32 = 8;

// Timing constants
pub const DEBOUNCE_DELAY_MS: u64 = 150;

// Color constants
pub const DEFAULT_TEXT_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
