use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn rejects_short_hex() {
    assert!(serde_json::from_value::<ColorDef>(json!("#fff")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn parses_hsla_object() {
    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!(c.g.abs() < 1e-9);
    assert!(c.b.abs() < 1e-9);
}

#[test]
fn const_hex_matches_parsed_hex() {
    let parsed = parse_hex("#00e5ff").unwrap();
    assert_eq!(ColorDef::hex(0x00e5ff).to_rgba8(), parsed.to_rgba8());
    assert_eq!(ColorDef::hex(0x00e5ff).to_rgba8(), [0x00, 0xe5, 0xff, 0xff]);
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = ColorDef::hex(0xffffff).with_alpha8(128);
    assert_eq!(c.to_rgba8_premul(), [128, 128, 128, 128]);
    assert_eq!(c.to_rgba8(), [255, 255, 255, 128]);
}
