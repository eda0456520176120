//! Default values for header styling.

pub fn header_scale() -> f32 {
    2.0 // Headers render at twice the body size
}

pub fn header_bold() -> bool {
    true
}
