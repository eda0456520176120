//! Default value functions for theme configuration.
//!
//! Each sub-module groups related `default_*` free functions used both as
//! `#[serde(default = "crate::defaults::...")]` attributes on the options
//! structs and by the `Default` impls of the value types, so a default lives
//! in exactly one place.

mod colors;
mod font;
mod header;

// ── Font ───────────────────────────────────────────────────────────────────
pub use font::{base_typeface, font_weight};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::text_color;

// ── Header ─────────────────────────────────────────────────────────────────
pub use header::{header_bold, header_scale};
