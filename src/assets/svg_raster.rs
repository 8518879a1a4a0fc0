use crate::foundation::error::{CanvasError, CanvasResult};

/// Largest raster produced for a single SVG.
const MAX_DIM: u32 = 8192;

/// Pixel size to rasterize an SVG at so it fills a `width`×`height` target without upscaling.
pub fn svg_raster_size(width: f64, height: f64) -> CanvasResult<(u32, u32)> {
    fn to_px(v: f64) -> CanvasResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(CanvasError::render("svg target has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let (w, h) = (to_px(width)?, to_px(height)?);
    if w > MAX_DIM || h > MAX_DIM {
        return Err(CanvasError::render(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// Render `tree` stretched to exactly `width`×`height`, returning premultiplied RGBA8.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> CanvasResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CanvasError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
