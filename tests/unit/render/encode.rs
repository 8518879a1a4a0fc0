use super::*;

#[test]
fn png_round_trips_straight_alpha() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 32, 0, 128],
        premultiplied: true,
    };
    let png = encode_png(&frame).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.as_raw().as_slice(), &[255, 0, 0, 255, 128, 64, 0, 128]);
}

#[test]
fn length_mismatch_is_a_render_error() {
    let frame = FrameRGBA {
        width: 3,
        height: 3,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(matches!(encode_png(&frame), Err(CanvasError::Render(_))));
}
