//! Typed theme options, populated once at the host boundary.
//!
//! Covers:
//! - Reading options from an untyped host prop map (`from_props`)
//! - Parsing options from JSON or YAML text, or from a theme file (`load`)
//! - Resolving options into an immutable [`RichTextTheme`] (`resolve`,
//!   `resolve_strict`)
//!
//! Keys use the host's camelCase spelling in every format:
//!
//! ```yaml
//! fontFamily: Inter
//! fontWeight: "400"
//! color: "#FF222222"
//! header:
//!   scale: 1.75
//!   bold: true
//! ```

use crate::color::Color;
use crate::error::ConfigError;
use crate::font::{FontWeight, Typeface};
use crate::header::HeaderConfig;
use crate::props::{Props, PropsExt};
use crate::theme::RichTextTheme;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Header section of [`ThemeOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderOptions {
    #[serde(default = "crate::defaults::header_scale")]
    pub scale: f32,
    #[serde(default = "crate::defaults::header_bold")]
    pub bold: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            scale: crate::defaults::header_scale(),
            bold: crate::defaults::header_bold(),
        }
    }
}

/// Theme options as supplied by the host. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header: HeaderOptions,
}

/// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ThemeOptions {
    /// Read options from a host prop map, tolerating a missing map, missing
    /// keys and mistyped values.
    pub fn from_props(props: Option<&Props>) -> Self {
        let non_empty = |value: String| (!value.is_empty()).then_some(value);
        let header = props.get_map_or_none("header");

        Self {
            font_family: non_empty(props.get_string_or_default("fontFamily", "")),
            font_weight: non_empty(props.get_string_or_default("fontWeight", "")),
            color: props.get_color_or_none("color"),
            header: HeaderOptions {
                scale: header.get_float_or_default("scale", crate::defaults::header_scale()),
                bold: header.get_bool_or_default("bold", crate::defaults::header_bold()),
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        log::info!("Loading theme options from {:?}", path);

        match extension.as_str() {
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => {
                log::error!("Unsupported theme file extension for {:?}", path);
                Err(ConfigError::UnsupportedFormat(path.display().to_string()))
            }
        }
    }

    fn typeface(&self) -> Typeface {
        let face = match &self.font_family {
            Some(family) => Typeface::family(family.clone()),
            None => crate::defaults::base_typeface(),
        };
        let weight = self
            .font_weight
            .as_deref()
            .map(FontWeight::parse)
            .unwrap_or_else(crate::defaults::font_weight);
        face.with_weight(weight)
    }

    fn header_config(&self) -> HeaderConfig {
        HeaderConfig::new(self.header.scale, self.header.bold)
    }

    /// Build the theme. An unusable header scale is replaced by the default
    /// one and logged.
    pub fn resolve(&self) -> RichTextTheme {
        let mut header = self.header_config();
        if let Err(e) = header.validate() {
            log::warn!("{e}; falling back to default header scale");
            header = header.with_scale(crate::defaults::header_scale());
        }
        self.build(header)
    }

    /// Build the theme, rejecting an unusable header scale.
    pub fn resolve_strict(&self) -> Result<RichTextTheme, ConfigError> {
        let header = self.header_config();
        header.validate()?;
        Ok(self.build(header))
    }

    fn build(&self, header: HeaderConfig) -> RichTextTheme {
        let text_color = self.color.unwrap_or_else(crate::defaults::text_color);
        RichTextTheme::new(self.typeface(), text_color, header)
    }
}

/// Font style is not part of the options and is dropped.
impl From<&RichTextTheme> for ThemeOptions {
    fn from(theme: &RichTextTheme) -> Self {
        Self {
            font_family: theme.base_font.family.clone(),
            font_weight: theme
                .base_font
                .weight
                .is_bold()
                .then(|| "bold".to_string()),
            color: Some(theme.text_color),
            header: HeaderOptions {
                scale: theme.header_config.scale,
                bold: theme.header_config.is_bold,
            },
        }
    }
}
