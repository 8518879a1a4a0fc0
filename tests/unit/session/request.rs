use super::*;
use crate::scene::template::{BackgroundKind, LogoPlacement};
use serde_json::json;

fn crew_json() -> serde_json::Value {
    json!({
        "name": "W2",
        "clubName": "Tideway RC",
        "raceName": "Spring Head",
        "boatType": {"value": "4x", "seats": 4},
        "crewNames": ["A", "B", "C", "D"]
    })
}

#[test]
fn template_defaults_to_template1() {
    let req = PosterRequest::from_value(json!({"crew": crew_json()})).unwrap();
    assert_eq!(req.template, TemplateChoice::Preset(TemplateId::Template1));
    assert_eq!(req.resolved_template().unwrap(), TemplateId::Template1.config());
    assert!(req.colors.is_none());
    assert!(req.club_icon.is_none());
}

#[test]
fn parses_template_id_colors_and_icon() {
    let req = PosterRequest::from_value(json!({
        "crew": crew_json(),
        "template": "template2",
        "colors": {"primary": "#112233", "secondary": "white"},
        "clubIcon": {"type": "preset", "filename": "crossed-oars.svg"}
    }))
    .unwrap();
    let cfg = req.resolved_template().unwrap();
    assert_eq!(cfg.background, BackgroundKind::Diagonal);
    assert_eq!(cfg.colors, ColorScheme::parse("#112233", "#ffffff").unwrap());
    assert_eq!(req.club_icon, Some(ClubIconData::preset("crossed-oars.svg")));
}

#[test]
fn accepts_explicit_template_object() {
    let req = PosterRequest::from_value(json!({
        "crew": crew_json(),
        "template": {
            "background": "radial-burst",
            "nameDisplay": "labeled",
            "boatStyle": "offset",
            "textLayout": "minimal",
            "logo": "none",
            "dimensions": {"width": 600, "height": 800}
        }
    }))
    .unwrap();
    let cfg = req.resolved_template().unwrap();
    assert_eq!(cfg.logo, LogoPlacement::None);
    assert_eq!(cfg.dimensions.width, 600);
    assert_eq!(cfg.colors, ColorScheme::DEFAULT);
}

#[test]
fn unknown_template_is_config_error() {
    let err = PosterRequest::from_value(json!({"crew": crew_json(), "template": "template9"}))
        .unwrap_err();
    assert!(err.is_config(), "{err}");

    let err = PosterRequest::from_value(json!({"crew": crew_json(), "template": 3})).unwrap_err();
    assert!(err.is_config(), "{err}");
}

#[test]
fn zero_sized_custom_template_fails_on_resolve() {
    let mut cfg = TemplateId::Template3.config();
    cfg.dimensions.width = 0;
    let crew = Crew::from_value(crew_json()).unwrap();
    let err = PosterRequest::new(crew, cfg).resolved_template().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn crew_problems_are_validation_errors() {
    let err = PosterRequest::from_value(json!({"template": "template1"})).unwrap_err();
    assert!(err.is_validation());

    let mut crew = crew_json();
    crew["crewNames"] = json!("A, B");
    let err = PosterRequest::from_value(json!({"crew": crew})).unwrap_err();
    assert!(err.is_validation());

    let err = PosterRequest::from_json_str("[1, 2]").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn malformed_colors_and_icon_are_validation_errors() {
    let err = PosterRequest::from_value(json!({
        "crew": crew_json(),
        "colors": {"primary": "#zzzzzz", "secondary": "#000"}
    }))
    .unwrap_err();
    assert!(err.is_validation(), "{err}");

    let err = PosterRequest::from_value(json!({
        "crew": crew_json(),
        "clubIcon": {"type": "preset"}
    }))
    .unwrap_err();
    assert!(err.is_validation(), "{err}");
}

#[test]
fn builder_applies_color_override() {
    let crew = Crew::from_value(crew_json()).unwrap();
    let colors = ColorScheme::parse("black", "white").unwrap();
    let req = PosterRequest::new(crew, TemplateId::Template2).with_colors(colors);
    assert_eq!(req.resolved_template().unwrap().colors, colors);
}
