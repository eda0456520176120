//! Font handle types.
//!
//! A [`Typeface`] is an opaque handle from the theme's point of view: it is
//! stored and forwarded to the renderer, which resolves it against the
//! platform font subsystem.

use serde::{Deserialize, Serialize};

// ============================================================================
// Weight / Style
// ============================================================================

/// Font weight as far as the theme cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Parse a host weight string.
    ///
    /// Accepts the keywords `normal` and `bold` as well as CSS numeric weights;
    /// `600` and above count as bold. Unknown strings map to `Normal`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("bold") {
            return FontWeight::Bold;
        }
        match value.parse::<u16>() {
            Ok(numeric) if numeric >= 600 => FontWeight::Bold,
            _ => FontWeight::Normal,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FontWeight::Normal => "Normal",
            FontWeight::Bold => "Bold",
        }
    }

    pub fn is_bold(self) -> bool {
        self == FontWeight::Bold
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

// ============================================================================
// Typeface
// ============================================================================

/// Reference to a platform font.
///
/// `family: None` means the platform's default family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Typeface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

impl Typeface {
    /// The platform default font: default family, normal weight, upright.
    pub fn platform_default() -> Self {
        Self {
            family: None,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    pub fn family(name: impl Into<String>) -> Self {
        Self {
            family: Some(name.into()),
            ..Self::platform_default()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_platform_default(&self) -> bool {
        *self == Self::platform_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_parse() {
        assert_eq!(FontWeight::parse("bold"), FontWeight::Bold);
        assert_eq!(FontWeight::parse("BOLD"), FontWeight::Bold);
        assert_eq!(FontWeight::parse("700"), FontWeight::Bold);
        assert_eq!(FontWeight::parse("600"), FontWeight::Bold);
        assert_eq!(FontWeight::parse("500"), FontWeight::Normal);
        assert_eq!(FontWeight::parse("normal"), FontWeight::Normal);
        assert_eq!(FontWeight::parse("heavy-ish"), FontWeight::Normal);
    }

    #[test]
    fn test_platform_default() {
        let face = Typeface::default();
        assert!(face.is_platform_default());
        assert!(face.family.is_none());
        assert!(!Typeface::family("Inter").is_platform_default());
    }

    #[test]
    fn test_builder() {
        let face = Typeface::family("Inter")
            .with_weight(FontWeight::Bold)
            .with_style(FontStyle::Italic);
        assert_eq!(face.family.as_deref(), Some("Inter"));
        assert!(face.weight.is_bold());
        assert_eq!(face.style, FontStyle::Italic);
    }
}
