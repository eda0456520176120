//! Header typography relative to body text.

use crate::error::ConfigError;
use crate::font::FontWeight;
use serde::{Deserialize, Serialize};

/// How header text is scaled and weighted relative to body text.
///
/// A plain value: construction never validates, so whatever `scale` goes in
/// comes back out. Use [`HeaderConfig::validate`] where input is untrusted.
///
/// Equality compares `scale` bitwise, so every NaN equals every other NaN and
/// `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Multiplier applied to the base font size.
    #[serde(default = "crate::defaults::header_scale")]
    pub scale: f32,
    /// Whether header text renders bold.
    #[serde(default = "crate::defaults::header_bold")]
    pub is_bold: bool,
}

impl HeaderConfig {
    pub const fn new(scale: f32, is_bold: bool) -> Self {
        Self { scale, is_bold }
    }

    /// The canonical default: `{scale: 2.0, is_bold: true}`.
    ///
    /// Returns a fresh value on each call.
    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bold(mut self, is_bold: bool) -> Self {
        self.is_bold = is_bold;
        self
    }

    /// Header size for a given body size.
    pub fn font_size_for(&self, base_size: f32) -> f32 {
        base_size * self.scale
    }

    pub fn font_weight(&self) -> FontWeight {
        if self.is_bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        }
    }

    /// Reject scales that cannot produce a visible header.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "header scale must be a finite number greater than 0, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

fn scale_bits(scale: f32) -> u32 {
    if scale.is_nan() {
        f32::NAN.to_bits()
    } else {
        scale.to_bits()
    }
}

impl PartialEq for HeaderConfig {
    fn eq(&self, other: &Self) -> bool {
        scale_bits(self.scale) == scale_bits(other.scale) && self.is_bold == other.is_bold
    }
}

impl Eq for HeaderConfig {}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scale: crate::defaults::header_scale(),
            is_bold: crate::defaults::header_bold(),
        }
    }
}
