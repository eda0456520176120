//! Theme and configuration model for the richtext markdown view.
//!
//! This crate holds the immutable values a renderer reads when styling rich
//! text, plus the boundary code that builds them from host input:
//!
//! - [`HeaderConfig`] and [`RichTextTheme`] value types
//! - [`Color`] and [`Typeface`] handles stored verbatim for the renderer
//! - Defensive readers over untyped host prop maps
//! - [`ThemeOptions`] for JSON/YAML theme files and prop payloads

pub mod color;
pub mod defaults;
pub mod error;
pub mod font;
pub mod header;
pub mod options;
pub mod props;
pub mod theme;

// Re-export main types for convenience
pub use color::Color;
pub use error::ConfigError;
pub use font::{FontStyle, FontWeight, Typeface};
pub use header::HeaderConfig;
pub use options::{HeaderOptions, ThemeOptions};
pub use props::{
    Props, PropsExt, get_bool_or_default, get_color_or_none, get_float_or_default,
    get_map_or_none, get_string_or_default,
};
pub use theme::RichTextTheme;
