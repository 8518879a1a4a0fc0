use super::*;

#[test]
fn defaults_point_at_bundled_assets() {
    let cfg = GeneratorConfig::default();
    assert!(cfg.assets_root.ends_with("assets"));
    assert_eq!(cfg.boats_path(), cfg.assets_root.join("boats"));
    assert_eq!(cfg.logos_path(), cfg.assets_root.join("club-logos"));
    assert!(cfg.regular_font_path().is_file());
    assert!(cfg.bold_font_path().is_file());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = GeneratorConfig::from_reader(r#"{"assets_root": "/srv/poster", "fonts": {"bold": "/opt/b.ttf"}}"#.as_bytes())
        .unwrap();
    assert_eq!(cfg.boats_path(), PathBuf::from("/srv/poster/boats"));
    assert_eq!(cfg.bold_font_path(), PathBuf::from("/opt/b.ttf"));
    assert_eq!(cfg.regular_font_path(), PathBuf::from("/srv/poster/fonts/DejaVuSans.ttf"));
}

#[test]
fn unknown_keys_and_missing_files_are_config_errors() {
    let err = GeneratorConfig::from_reader(r#"{"asset_root": "x"}"#.as_bytes()).unwrap_err();
    assert!(err.is_config());
    let err = GeneratorConfig::from_path("/nonexistent/crewcanvas.json").unwrap_err();
    assert!(err.is_config());
}
