// src/config.rs
use crate::color::Color;
use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_PREVIEW_TEXT, DEFAULT_TEXT_COLOR,
                      DEBOUNCE_DELAY_MS, MAX_FONT_SIZE, MIN_FONT_SIZE,
                      WEIGHT_SLIDER_DEFAULT, WEIGHT_SLIDER_MAX};
use crate::font::FontWeight;

/// How many previews are shown at once
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewMode {
    /// One preview for the current row
    Single,
    /// A window of neighboring variants around the current one
    Multi,
    /// One preview per multi-selected row
    Selected,
}

#[derive(Clone, Debug)]
pub struct PreviewConfig {
    pub font_size: i32,
    pub text_color: Color,
    /// Raw 0..=99 slider position; see [`FontWeight::from_slider`]
    pub weight_value: u8,
    pub preview_mode: PreviewMode,
    pub preview_text: String,
    pub debounce_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,
            weight_value: WEIGHT_SLIDER_DEFAULT,
            preview_mode: PreviewMode::Single,
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            debounce_ms: DEBOUNCE_DELAY_MS,
        }
    }
}

impl PreviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: i32) -> Self {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_weight_value(mut self, value: u8) -> Self {
        self.weight_value = value.min(WEIGHT_SLIDER_MAX);
        self
    }

    pub fn with_preview_mode(mut self, mode: PreviewMode) -> Self {
        self.preview_mode = mode;
        self
    }

    pub fn with_preview_text(mut self, text: &str) -> Self {
        self.preview_text = text.to_string();
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// The discrete weight bucket the slider currently selects
    pub fn weight(&self) -> FontWeight {
        FontWeight::from_slider(self.weight_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_ui_state() {
        let config = PreviewConfig::default();
        assert_eq!(config.font_size, 24);
        assert_eq!(config.weight_value, 50);
        assert_eq!(config.weight(), FontWeight::Normal);
        assert_eq!(config.preview_mode, PreviewMode::Single);
        assert_eq!(config.debounce_ms, 150);
    }

    #[test]
    fn font_size_is_clamped_to_slider_range() {
        assert_eq!(PreviewConfig::new().with_font_size(4).font_size, 8);
        assert_eq!(PreviewConfig::new().with_font_size(500).font_size, 72);
        assert_eq!(PreviewConfig::new().with_font_size(36).font_size, 36);
    }

    #[test]
    fn weight_value_is_clamped() {
        assert_eq!(PreviewConfig::new().with_weight_value(200).weight_value, 99);
    }
}
