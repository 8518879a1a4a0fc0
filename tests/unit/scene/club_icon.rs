use super::*;
use serde_json::json;

#[test]
fn parses_preset_and_upload() {
    let icon: ClubIconData =
        serde_json::from_value(json!({"type": "preset", "filename": "rowing_club.svg"})).unwrap();
    assert_eq!(icon, ClubIconData::preset("rowing_club.svg"));

    let icon: ClubIconData =
        serde_json::from_value(json!({"type": "upload", "filePath": "/tmp/logo.png"})).unwrap();
    assert_eq!(icon, ClubIconData::upload("/tmp/logo.png"));
}

#[test]
fn upload_with_base64_is_inline() {
    let icon: ClubIconData =
        serde_json::from_value(json!({"type": "upload", "base64": "data:image/png;base64,AAAA"}))
            .unwrap();
    assert!(matches!(icon, ClubIconData::Inline { .. }));
    assert_eq!(icon.describe(), "inline:26 bytes");
}

#[test]
fn file_path_wins_over_base64() {
    let icon: ClubIconData = serde_json::from_value(
        json!({"type": "upload", "filePath": "a.png", "base64": "AAAA"}),
    )
    .unwrap();
    assert_eq!(icon, ClubIconData::upload("a.png"));
}

#[test]
fn incomplete_references_are_rejected() {
    assert!(serde_json::from_value::<ClubIconData>(json!({"type": "preset"})).is_err());
    assert!(serde_json::from_value::<ClubIconData>(json!({"type": "upload"})).is_err());
    assert!(serde_json::from_value::<ClubIconData>(json!({"type": "remote"})).is_err());
}

#[test]
fn serializes_back_to_wire_shape() {
    let v = serde_json::to_value(ClubIconData::preset("x.png")).unwrap();
    assert_eq!(v, json!({"type": "preset", "filename": "x.png"}));
    let v = serde_json::to_value(ClubIconData::inline("AAAA")).unwrap();
    assert_eq!(v, json!({"type": "upload", "base64": "AAAA"}));
}
