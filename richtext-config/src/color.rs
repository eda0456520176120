//! Packed ARGB color values.
//!
//! Colors arrive from the host already packed as `0xAARRGGBB` integers and are
//! stored verbatim. Theme files may also spell them as hex strings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Normalized `[r, g, b, a]` in 0.0..=1.0 for renderers that want floats.
    pub fn to_f32_rgba(self) -> [f32; 4] {
        [
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        ]
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB` (alpha first, matching the packed
    /// layout). The leading `#` is optional.
    pub fn parse_hex(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ConfigError::InvalidColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                // Each nibble expands to a full byte: 0xF -> 0xFF.
                let r = ((value >> 8) & 0xF) as u8 * 0x11;
                let g = ((value >> 4) & 0xF) as u8 * 0x11;
                let b = (value & 0xF) as u8 * 0x11;
                Ok(Self::from_rgb(r, g, b))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self(0xFF00_0000 | value))
            }
            8 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self(value))
            }
            _ => Err(invalid()),
        }
    }

    /// Convert a host integer into a packed color.
    ///
    /// Hosts that use signed 32-bit ints hand over opaque colors as negative
    /// numbers, so the full `i32..=u32` range is accepted.
    pub fn from_packed_int(value: i64) -> Result<Self, ConfigError> {
        if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
            return Err(ConfigError::InvalidColor(value.to_string()));
        }
        if value < 0 {
            Ok(Self(value as i32 as u32))
        } else {
            Ok(Self(value as u32))
        }
    }

    /// `#AARRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        crate::defaults::text_color()
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

/// Wire forms accepted for a color: a packed integer or a hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(i64),
    Hex(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = ConfigError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Packed(value) => Color::from_packed_int(value),
            ColorRepr::Hex(text) => Color::parse_hex(&text),
        }
    }
}
