//! Default values for the base font.

use crate::font::{FontWeight, Typeface};

pub fn base_typeface() -> Typeface {
    Typeface::platform_default()
}

pub fn font_weight() -> FontWeight {
    FontWeight::Normal
}
