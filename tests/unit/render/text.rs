use super::*;
use crate::assets::store::AssetStore;
use crate::config::GeneratorConfig;
use crate::foundation::core::Canvas;
use crate::scene::crew::{BoatClass, BoatType};
use crate::scene::template::{TemplateConfig, TemplateId, TextLayoutKind};

fn crew(coach: Option<&str>) -> Crew {
    let c = Crew::new("M1", "Club", "Henley", BoatType::from_class(BoatClass::Eight), ["A"]);
    match coach {
        Some(name) => c.with_coach(name),
        None => c,
    }
}

/// Number of inked pixels in the rows `y0..y1`.
fn ink(cfg: &TemplateConfig, crew: &Crew, y0: u32, y1: u32) -> usize {
    let store = AssetStore::load(&GeneratorConfig::default()).unwrap();
    let canvas = Canvas { width: 1080, height: 900 };
    let mut s = Surface::new(canvas, store.fonts()).unwrap();
    let pos = TextPositioning::compute(cfg);
    paint_text(&mut s, crew, cfg.background, &pos).unwrap();
    let f = s.finish();
    let row = f.width as usize * 4;
    f.data[y0 as usize * row..y1 as usize * row]
        .chunks_exact(4)
        .filter(|p| p[3] > 0)
        .count()
}

#[test]
fn coach_line_only_when_present() {
    let cfg = TemplateId::Template1.config();
    assert!(ink(&cfg, &crew(Some("Jo")), 780, 810) > 0);
    assert_eq!(ink(&cfg, &crew(None), 780, 810), 0);
    assert_eq!(ink(&cfg, &crew(Some("   ")), 780, 810), 0);
}

#[test]
fn minimal_layout_skips_subtitle() {
    let mut cfg = TemplateId::Template1.config();
    // Subtitle baseline at 180; the race name (baseline 120) stays above row 140.
    assert!(ink(&cfg, &crew(None), 150, 190) > 0);
    cfg.text_layout = TextLayoutKind::Minimal;
    assert_eq!(ink(&cfg, &crew(None), 150, 190), 0);
    assert!(ink(&cfg, &crew(None), 70, 125) > 0);
}

#[test]
fn diagonal_header_sits_higher() {
    let cfg = TemplateId::Template2.config();
    assert!(ink(&cfg, &crew(None), 30, 85) > 0);
    assert_eq!(ink(&cfg, &crew(None), 145, 200), 0);
}
