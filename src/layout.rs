//! Layout direction detection.

use serde::{Deserialize, Serialize};

/// Languages written right-to-left, by primary subtag.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "ckb", "dv", "fa", "he", "iw", "ps", "sd", "ug", "ur", "yi",
];

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Direction implied by a BCP 47 style locale tag (`ar-EG`, `he_IL`, `en`).
    pub fn from_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&language.as_str()) {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }
}

/// Snapshot of the platform resource configuration relevant to layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceConfiguration {
    pub layout_direction: LayoutDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ResourceConfiguration {
    pub fn new(layout_direction: LayoutDirection) -> Self {
        Self {
            layout_direction,
            locale: None,
        }
    }

    /// Configuration whose direction follows `locale`.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            layout_direction: LayoutDirection::from_locale(&locale),
            locale: Some(locale),
        }
    }
}

/// Source of platform resource configuration.
pub trait Resources {
    fn configuration(&self) -> ResourceConfiguration;

    fn is_layout_rtl(&self) -> bool {
        self.configuration().layout_direction.is_rtl()
    }
}

impl Resources for ResourceConfiguration {
    fn configuration(&self) -> ResourceConfiguration {
        self.clone()
    }

    fn is_layout_rtl(&self) -> bool {
        self.layout_direction.is_rtl()
    }
}
