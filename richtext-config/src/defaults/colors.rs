//! Default values for theme colors.

use crate::color::Color;

pub fn text_color() -> Color {
    Color::BLACK
}
