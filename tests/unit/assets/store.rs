use super::*;

fn store() -> AssetStore {
    AssetStore::load(&GeneratorConfig::default()).unwrap()
}

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.svg").unwrap(), "a/b.svg");
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../secret.png").is_err());
    assert!(normalize_rel_path("x/../../y.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn boat_table_and_fallback() {
    assert_eq!(boat_asset_name("8+"), "eight");
    assert_eq!(boat_asset_name("4+"), "four");
    assert_eq!(boat_asset_name("4-"), "four");
    assert_eq!(boat_asset_name("4x"), "quad");
    assert_eq!(boat_asset_name("2x"), "double");
    assert_eq!(boat_asset_name("2-"), "pair");
    assert_eq!(boat_asset_name("1x"), "single");
    assert_eq!(boat_asset_name("3x"), DEFAULT_BOAT);
    assert_eq!(boat_asset_name(""), DEFAULT_BOAT);
}

#[test]
fn bundled_boats_load() {
    let s = store();
    for code in ["8+", "4+", "4-", "4x", "2x", "2-", "1x", "7+"] {
        assert!(matches!(s.boat(code).unwrap(), PreparedGraphic::Svg(_)), "{code}");
    }
}

#[test]
fn missing_default_boat_is_fatal() {
    let dir = std::env::temp_dir().join(format!("crewcanvas-noboats-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg = GeneratorConfig {
        boats_dir: dir.clone(),
        ..GeneratorConfig::default()
    };
    let err = AssetStore::load(&cfg).unwrap_err();
    assert!(matches!(err, CanvasError::Asset(_)));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn other_boats_fall_back_to_default() {
    let dir = std::env::temp_dir().join(format!("crewcanvas-onlyeight-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let eight = GeneratorConfig::default().boats_path().join("eight.svg");
    std::fs::copy(eight, dir.join("eight.svg")).unwrap();
    let cfg = GeneratorConfig {
        boats_dir: dir.clone(),
        ..GeneratorConfig::default()
    };
    let s = AssetStore::load(&cfg).unwrap();
    assert!(s.boat("1x").is_ok());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn logo_resolution() {
    let s = store();
    assert!(s.load_logo(&ClubIconData::preset("crossed-oars.svg")).is_ok());
    assert!(s.load_logo(&ClubIconData::preset("missing.png")).is_err());
    assert!(s.load_logo(&ClubIconData::preset("../boats/eight.svg")).is_err());
    assert!(s.load_logo(&ClubIconData::upload("/nonexistent/logo.png")).is_err());
    assert!(s.load_logo(&ClubIconData::inline("not base64!")).is_err());

    let upload = GeneratorConfig::default().logos_path().join("crossed-oars.svg");
    assert!(s.load_logo(&ClubIconData::upload(upload)).is_ok());
}

#[test]
fn text_engine_shapes_both_faces() {
    let s = store();
    let mut engine = TextLayoutEngine::new(s.fonts()).unwrap();
    let brush = TextBrushRgba8 { r: 0, g: 0, b: 0, a: 255 };
    let regular = engine.layout_line("Stroke", FontFace::Regular, 24.0, brush).unwrap();
    let bold = engine.layout_line("Stroke", FontFace::Bold, 24.0, brush).unwrap();
    let (rw, bw) = (advance_width(&regular), advance_width(&bold));
    assert!(rw > 0.0);
    assert!(bw > rw, "bold {bw} should be wider than regular {rw}");

    let bare = engine.layout_line("B", FontFace::Bold, 16.0, brush).unwrap();
    let spaced = engine.layout_line("B ", FontFace::Bold, 16.0, brush).unwrap();
    assert!(advance_width(&spaced) > advance_width(&bare));

    assert!(engine.layout_line("x", FontFace::Bold, 0.0, brush).is_err());
}
