//! Typed error variants for the richtext-config crate.
//!
//! Constructing a [`HeaderConfig`](crate::HeaderConfig) or
//! [`RichTextTheme`](crate::RichTextTheme) never fails. Errors only come from
//! the boundary: reading theme files, parsing host payloads, and decoding
//! color strings.
//!
//! # Example
//!
//! ```rust,no_run
//! use richtext_config::{ConfigError, ThemeOptions};
//!
//! match ThemeOptions::load("theme.yaml") {
//!     Ok(options) => println!("{:?}", options.resolve()),
//!     Err(ConfigError::Io(io)) => eprintln!("I/O error: {io}"),
//!     Err(ConfigError::Yaml(p)) => eprintln!("YAML parse error: {p}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or validating theme configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading a theme file.
    #[error("I/O error reading theme config: {0}")]
    Io(#[from] std::io::Error),

    /// The payload contained invalid JSON.
    #[error("JSON parse error in theme config: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme file contained invalid YAML.
    #[error("YAML parse error in theme config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Theme config validation error: {0}")]
    Validation(String),

    /// A color string could not be decoded.
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// The theme file extension is not one of the supported formats.
    #[error("Unsupported theme file format: {0}")]
    UnsupportedFormat(String),
}
