//! The visual theme consumed by the rich-text renderer.

use crate::color::Color;
use crate::font::Typeface;
use crate::header::HeaderConfig;
use serde::{Deserialize, Serialize};

/// Complete theme for rendered rich text.
///
/// Owns its [`HeaderConfig`] by value; two themes never share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextTheme {
    #[serde(default = "crate::defaults::base_typeface")]
    pub base_font: Typeface,
    #[serde(default = "crate::defaults::text_color")]
    pub text_color: Color,
    #[serde(default)]
    pub header_config: HeaderConfig,
}

impl RichTextTheme {
    pub fn new(base_font: Typeface, text_color: Color, header_config: HeaderConfig) -> Self {
        Self {
            base_font,
            text_color,
            header_config,
        }
    }

    /// Platform default font, black text, default header config.
    pub fn default_theme() -> Self {
        Self::default()
    }

    pub fn with_base_font(mut self, base_font: Typeface) -> Self {
        self.base_font = base_font;
        self
    }

    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn with_header_config(mut self, header_config: HeaderConfig) -> Self {
        self.header_config = header_config;
        self
    }

    pub fn header_font_size(&self, base_size: f32) -> f32 {
        self.header_config.font_size_for(base_size)
    }

    /// The base font with the header weight applied.
    pub fn header_typeface(&self) -> Typeface {
        self.base_font
            .clone()
            .with_weight(self.header_config.font_weight())
    }
}

impl Default for RichTextTheme {
    fn default() -> Self {
        Self {
            base_font: crate::defaults::base_typeface(),
            text_color: crate::defaults::text_color(),
            header_config: HeaderConfig::default_config(),
        }
    }
}
