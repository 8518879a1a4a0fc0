use super::*;
use crate::foundation::core::Rgba8;
use serde_json::json;

#[test]
fn resolves_colors_and_logo() {
    let preset: ClubPreset = serde_json::from_value(json!({
        "id": 3,
        "club_name": "Leander",
        "primary_color": "#ff69b4",
        "secondary_color": "#000000",
        "logo_filename": "leander.png",
        "is_default": true
    }))
    .unwrap();
    let (colors, icon) = preset.resolve().unwrap();
    assert_eq!(colors.primary(), Rgba8::rgb(0xff, 0x69, 0xb4));
    assert_eq!(colors.secondary(), Rgba8::BLACK);
    assert_eq!(icon, Some(ClubIconData::preset("leander.png")));
}

#[test]
fn camel_case_aliases_and_missing_logo() {
    let preset: ClubPreset = serde_json::from_value(json!({
        "clubName": "Club",
        "primaryColor": "navy",
        "secondaryColor": "#fff",
        "logoFilename": "  "
    }))
    .unwrap();
    assert_eq!(preset.club_icon(), None);
    assert!(!preset.is_default);
}

#[test]
fn malformed_color_fails_validation() {
    let preset = ClubPreset {
        id: None,
        club_name: "Club".into(),
        primary_color: "#12".into(),
        secondary_color: "#000".into(),
        logo_filename: None,
        is_default: false,
    };
    assert!(preset.resolve().unwrap_err().is_validation());
}
