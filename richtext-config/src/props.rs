//! Defensive reads from untyped host property maps.
//!
//! Host frameworks hand style props over as a loosely-typed key/value map
//! that may itself be absent. These accessors never fail: a missing map, a
//! missing key, a JSON `null`, or a value of the wrong type all yield the
//! caller's default. Use them only at the boundary, to fill a typed options
//! struct such as [`ThemeOptions`](crate::ThemeOptions).

use crate::color::Color;
use serde_json::{Map, Value};

/// An untyped property map as delivered by the host.
pub type Props = Map<String, Value>;

/// Look up a present, non-null value.
fn lookup<'a>(map: Option<&'a Props>, key: &str) -> Option<&'a Value> {
    match map?.get(key)? {
        Value::Null => None,
        value => Some(value),
    }
}

fn mismatch(key: &str, expected: &str, value: &Value) {
    log::debug!("prop '{key}' expected {expected}, got {value}; using default");
}

pub fn get_bool_or_default(map: Option<&Props>, key: &str, default: bool) -> bool {
    match lookup(map, key) {
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            mismatch(key, "bool", other);
            default
        }
        None => default,
    }
}

/// Numbers arrive as `f64` and are narrowed to `f32`.
pub fn get_float_or_default(map: Option<&Props>, key: &str, default: f32) -> f32 {
    match lookup(map, key) {
        Some(value) => match value.as_f64() {
            Some(number) => number as f32,
            None => {
                mismatch(key, "number", value);
                default
            }
        },
        None => default,
    }
}

pub fn get_string_or_default(map: Option<&Props>, key: &str, default: &str) -> String {
    match lookup(map, key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            mismatch(key, "string", other);
            default.to_string()
        }
        None => default.to_string(),
    }
}

pub fn get_map_or_none<'a>(map: Option<&'a Props>, key: &str) -> Option<&'a Props> {
    match lookup(map, key)? {
        Value::Object(nested) => Some(nested),
        other => {
            mismatch(key, "map", other);
            None
        }
    }
}

/// A color given either as a packed integer or a hex string.
pub fn get_color_or_none(map: Option<&Props>, key: &str) -> Option<Color> {
    let value = lookup(map, key)?;
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| crate::ConfigError::InvalidColor(n.to_string()))
            .and_then(Color::from_packed_int),
        Value::String(s) => Color::parse_hex(s),
        other => {
            mismatch(key, "color", other);
            return None;
        }
    };
    match parsed {
        Ok(color) => Some(color),
        Err(e) => {
            log::debug!("prop '{key}': {e}; ignoring");
            None
        }
    }
}

/// Method-call form of the accessors, for `Option<&Props>`.
pub trait PropsExt<'a> {
    fn get_bool_or_default(self, key: &str, default: bool) -> bool;
    fn get_float_or_default(self, key: &str, default: f32) -> f32;
    fn get_string_or_default(self, key: &str, default: &str) -> String;
    fn get_map_or_none(self, key: &str) -> Option<&'a Props>;
    fn get_color_or_none(self, key: &str) -> Option<Color>;
}

impl<'a> PropsExt<'a> for Option<&'a Props> {
    fn get_bool_or_default(self, key: &str, default: bool) -> bool {
        get_bool_or_default(self, key, default)
    }

    fn get_float_or_default(self, key: &str, default: f32) -> f32 {
        get_float_or_default(self, key, default)
    }

    fn get_string_or_default(self, key: &str, default: &str) -> String {
        get_string_or_default(self, key, default)
    }

    fn get_map_or_none(self, key: &str) -> Option<&'a Props> {
        get_map_or_none(self, key)
    }

    fn get_color_or_none(self, key: &str) -> Option<Color> {
        get_color_or_none(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => panic!("test props must be an object"),
        }
    }

    #[test]
    fn test_present_key_read() {
        let map = props(json!({"scale": 3.5, "bold": false, "family": "Inter"}));
        assert_eq!(get_float_or_default(Some(&map), "scale", 2.0), 3.5);
        assert!(!get_bool_or_default(Some(&map), "bold", true));
        assert_eq!(get_string_or_default(Some(&map), "family", ""), "Inter");
    }

    #[test]
    fn test_absent_key_returns_default() {
        let map = props(json!({"scale": 3.5}));
        assert!(get_bool_or_default(Some(&map), "bold", true));
        assert_eq!(get_string_or_default(Some(&map), "family", "serif"), "serif");
        assert!(get_map_or_none(Some(&map), "header").is_none());
    }

    #[test]
    fn test_absent_map_returns_default() {
        assert!(get_bool_or_default(None, "bold", true));
        assert_eq!(get_float_or_default(None, "scale", 2.0), 2.0);
        assert_eq!(get_string_or_default(None, "family", "x"), "x");
        assert!(get_map_or_none(None, "header").is_none());
        assert!(get_color_or_none(None, "color").is_none());
    }

    #[test]
    fn test_null_and_mismatched_types_fall_back() {
        let map = props(json!({"bold": null, "scale": "big", "family": 12, "header": [1]}));
        assert!(get_bool_or_default(Some(&map), "bold", true));
        assert_eq!(get_float_or_default(Some(&map), "scale", 2.0), 2.0);
        assert_eq!(get_string_or_default(Some(&map), "family", "d"), "d");
        assert!(get_map_or_none(Some(&map), "header").is_none());
    }

    #[test]
    fn test_integer_reads_as_float() {
        let map = props(json!({"scale": 3}));
        assert_eq!(get_float_or_default(Some(&map), "scale", 2.0), 3.0);
    }

    #[test]
    fn test_nested_map() {
        let map = props(json!({"header": {"scale": 1.5}}));
        let header = get_map_or_none(Some(&map), "header");
        assert_eq!(get_float_or_default(header, "scale", 2.0), 1.5);
    }

    #[test]
    fn test_colors() {
        let map = props(json!({"a": -16777216, "b": "#FFFFFF", "c": "oops", "d": 1.5}));
        assert_eq!(get_color_or_none(Some(&map), "a"), Some(Color::BLACK));
        assert_eq!(get_color_or_none(Some(&map), "b"), Some(Color::WHITE));
        assert_eq!(get_color_or_none(Some(&map), "c"), None);
        assert_eq!(get_color_or_none(Some(&map), "d"), None);
    }

    #[test]
    fn test_ext_trait() {
        let map = props(json!({"scale": 3.5}));
        let maybe = Some(&map);
        assert_eq!(maybe.get_float_or_default("scale", 2.0), 3.5);
        assert!(maybe.get_bool_or_default("bold", true));
        let none: Option<&Props> = None;
        assert!(none.get_bool_or_default("bold", true));
    }
}
