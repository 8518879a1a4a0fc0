use super::*;
use crate::assets::decode::parse_svg;

#[test]
fn raster_size_rounds_up() {
    assert_eq!(svg_raster_size(180.0, 270.0).unwrap(), (180, 270));
    assert_eq!(svg_raster_size(10.2, 0.5).unwrap(), (11, 1));
    assert!(svg_raster_size(0.0, 10.0).is_err());
    assert!(svg_raster_size(f64::NAN, 10.0).is_err());
    assert!(svg_raster_size(10_000.0, 10.0).is_err());
}

#[test]
fn rasterizes_stretched_to_target() {
    let tree = parse_svg(
        br##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2">
            <rect x="0" y="0" width="1" height="2" fill="#ff0000"/>
        </svg>"##,
    )
    .unwrap();
    let px = rasterize_svg_to_premul_rgba8(&tree, 8, 4).unwrap();
    assert_eq!(px.len(), 8 * 4 * 4);
    // Left half red, right half transparent.
    let at = |x: usize, y: usize| &px[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
    assert_eq!(at(1, 1), &[255, 0, 0, 255]);
    assert_eq!(at(6, 2), &[0, 0, 0, 0]);
}
