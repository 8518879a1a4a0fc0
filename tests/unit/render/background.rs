use super::*;
use crate::assets::store::AssetStore;
use crate::config::GeneratorConfig;
use crate::foundation::core::Canvas;
use crate::render::surface::FrameRGBA;

fn render(kind: BackgroundKind, canvas: Canvas) -> FrameRGBA {
    let store = AssetStore::load(&GeneratorConfig::default()).unwrap();
    let mut s = Surface::new(canvas, store.fonts()).unwrap();
    paint_background(&mut s, kind, &ColorScheme::DEFAULT);
    s.finish()
}

fn pixel(f: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * f.width + x) * 4) as usize;
    [f.data[i], f.data[i + 1], f.data[i + 2], f.data[i + 3]]
}

fn close(a: [u8; 4], b: Rgba8, tol: i16) -> bool {
    let b = [b.r, b.g, b.b, b.a];
    a.iter().zip(b).all(|(x, y)| (*x as i16 - y as i16).abs() <= tol)
}

#[test]
fn every_background_is_fully_opaque() {
    let canvas = Canvas { width: 270, height: 340 };
    for kind in BackgroundKind::ALL.iter().copied() {
        let f = render(kind, canvas);
        assert!(f.data.chunks_exact(4).all(|p| p[3] == 255), "{kind}");
    }
}

#[test]
fn diagonal_bands() {
    let f = render(BackgroundKind::Diagonal, Canvas::PORTRAIT);
    let c = ColorScheme::DEFAULT;
    // Header banner, middle field, footer banner.
    assert!(close(pixel(&f, 540, 60), c.secondary(), 1));
    assert!(close(pixel(&f, 540, 675), c.primary(), 1));
    assert!(close(pixel(&f, 540, 1320), c.secondary(), 1));
    // White separator on the top cut: at x=0 the line sits at y=200.
    assert!(close(pixel(&f, 2, 200), Rgba8::WHITE, 1));
}

#[test]
fn radial_burst_is_secondary_tinted_at_center() {
    let f = render(BackgroundKind::RadialBurst, Canvas::PORTRAIT);
    let center = pixel(&f, 540, 675);
    let s = ColorScheme::DEFAULT.secondary();
    // Center is dominated by the secondary color (dark blue): blue above red.
    assert!(center[2] > center[0]);
    assert!(close(center, s, 40));
}

#[test]
fn geometric_has_hexagons() {
    let f = render(BackgroundKind::Geometric, Canvas::PORTRAIT);
    // Row 0 hexagons sit at y=-80; row 1 (offset by 60) at y≈23.9, x = -80 + 60 + 120k.
    let on_hex = pixel(&f, 100, 24);
    let off_hex = pixel(&f, 40, 24);
    assert_ne!(on_hex, off_hex);
    // Hexagons are gold-ish: red channel above blue.
    assert!(on_hex[0] > on_hex[2]);
    assert!(off_hex[2] > off_hex[0]);
}
