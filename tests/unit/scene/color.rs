use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: HexColor = "#DAA520".parse().unwrap();
    assert_eq!(c.0, Rgba8::rgb(0xDA, 0xA5, 0x20));

    let c: HexColor = "#0000ff80".parse().unwrap();
    assert_eq!(c.0, Rgba8::rgba(0, 0, 255, 0x80));

    let c: HexColor = "#fa0".parse().unwrap();
    assert_eq!(c.0, Rgba8::rgb(0xFF, 0xAA, 0x00));
}

#[test]
fn parses_keywords() {
    let c: HexColor = "White".parse().unwrap();
    assert_eq!(c.0, Rgba8::WHITE);
    let c: HexColor = "transparent".parse().unwrap();
    assert_eq!(c.0.a, 0);
}

#[test]
fn malformed_color_is_a_validation_error() {
    let err = "#12345".parse::<HexColor>().unwrap_err();
    assert!(err.is_validation());
    assert!("chartreuse-ish".parse::<HexColor>().is_err());
    assert!("#gg0000".parse::<HexColor>().is_err());
}

#[test]
fn scheme_round_trips_through_json() {
    let scheme: ColorScheme =
        serde_json::from_value(json!({"primary": "#DAA520", "secondary": "#2C3E50"})).unwrap();
    assert_eq!(scheme, ColorScheme::DEFAULT);
    let v = serde_json::to_value(scheme).unwrap();
    assert_eq!(v, json!({"primary": "#DAA520", "secondary": "#2C3E50"}));
}

#[test]
fn scheme_rejects_bad_json_color() {
    let res: Result<ColorScheme, _> =
        serde_json::from_value(json!({"primary": "nope", "secondary": "#000000"}));
    assert!(res.is_err());
}
