use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CanvasError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CanvasError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(CanvasError::asset("x").to_string().contains("asset error:"));
    assert!(CanvasError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CanvasError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_validation());
}

#[test]
fn validation_is_classified() {
    assert!(CanvasError::validation("bad crew").is_validation());
    assert!(!CanvasError::config("bad template").is_validation());
}
