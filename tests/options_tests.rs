mod common;

use common::{props, write_theme_file};
use richtext::config::{
    ConfigError, HeaderConfig, RichTextTheme, ThemeOptions, get_bool_or_default,
    get_float_or_default, get_map_or_none,
};
use richtext::{Color, Typeface};
use serde_json::json;

#[test]
fn test_config_map_accessor_scenario() {
    let map = props(json!({"scale": 3.5}));
    assert_eq!(get_float_or_default(Some(&map), "scale", 2.0), 3.5);
    assert!(get_bool_or_default(Some(&map), "bold", true));
    assert!(get_bool_or_default(None, "bold", true));
    assert!(get_map_or_none(Some(&map), "header").is_none());
}

#[test]
fn test_props_to_theme() {
    let map = props(json!({
        "fontFamily": "Inter",
        "color": -1,
        "header": {"scale": 1.5, "bold": false}
    }));
    let theme = ThemeOptions::from_props(Some(&map)).resolve();
    assert_eq!(theme.base_font, Typeface::family("Inter"));
    assert_eq!(theme.text_color, Color::WHITE);
    assert_eq!(theme.header_config, HeaderConfig::new(1.5, false));
}

#[test]
fn test_mistyped_props_fall_back_to_defaults() {
    let map = props(json!({
        "fontFamily": 7,
        "color": true,
        "header": {"scale": "huge", "bold": "yes"}
    }));
    assert_eq!(
        ThemeOptions::from_props(Some(&map)).resolve(),
        RichTextTheme::default()
    );
}

#[test]
fn test_load_yaml_file() {
    let (_dir, path) = write_theme_file(
        "theme.yaml",
        r##"
fontFamily: Georgia
fontWeight: bold
color: "#FF102030"
header:
  scale: 1.75
"##,
    );
    let theme = ThemeOptions::load(&path).unwrap().resolve();
    assert_eq!(theme.base_font.family.as_deref(), Some("Georgia"));
    assert!(theme.base_font.weight.is_bold());
    assert_eq!(theme.text_color, Color::from_rgb(0x10, 0x20, 0x30));
    assert_eq!(theme.header_config, HeaderConfig::new(1.75, true));
}

#[test]
fn test_load_yml_extension() {
    let (_dir, path) = write_theme_file("theme.YML", "header:\n  bold: false\n");
    let theme = ThemeOptions::load(&path).unwrap().resolve();
    assert!(!theme.header_config.is_bold);
}

#[test]
fn test_load_json_file() {
    let (_dir, path) = write_theme_file("theme.json", r#"{"color": 4278190335}"#);
    let theme = ThemeOptions::load(&path).unwrap().resolve();
    assert_eq!(theme.text_color, Color::from_rgb(0, 0, 255));
}

#[test]
fn test_load_unsupported_extension() {
    let (_dir, path) = write_theme_file("theme.toml", "color = 1");
    assert!(matches!(
        ThemeOptions::load(&path),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(matches!(
        ThemeOptions::load(dir.path().join("absent.json")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_invalid_yaml() {
    let (_dir, path) = write_theme_file("theme.yaml", "header: [unclosed");
    assert!(matches!(
        ThemeOptions::load(&path),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_strict_resolution_rejects_negative_scale() {
    let (_dir, path) = write_theme_file("theme.json", r#"{"header": {"scale": -2.0}}"#);
    let options = ThemeOptions::load(&path).unwrap();
    assert!(options.resolve_strict().is_err());
    assert_eq!(options.resolve().header_config.scale, 2.0);
}

#[test]
fn test_options_serialize_camel_case() {
    let options = ThemeOptions::from(&RichTextTheme::default().with_base_font(Typeface::family("Inter")));
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json["fontFamily"], "Inter");
    assert_eq!(json["header"]["bold"], true);
    assert!(json.get("fontWeight").is_none());
}
