use std::sync::Arc;

use anyhow::Context;
use base64::Engine as _;

use crate::{
    assets::store::{PreparedGraphic, PreparedImage},
    foundation::error::{CanvasError, CanvasResult},
};

pub fn decode_image(bytes: &[u8]) -> CanvasResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

pub fn parse_svg(bytes: &[u8]) -> CanvasResult<Arc<usvg::Tree>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(Arc::new(tree))
}

/// Decode either an SVG document or a raster image, sniffing the content.
pub fn decode_graphic(bytes: &[u8]) -> CanvasResult<PreparedGraphic> {
    if looks_like_svg(bytes) {
        parse_svg(bytes).map(PreparedGraphic::Svg)
    } else {
        decode_image(bytes).map(PreparedGraphic::Raster)
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let t = text.trim_start_matches('\u{feff}').trim_start();
    t.starts_with("<svg") || (t.starts_with("<?xml") && text.contains("<svg"))
}

/// Decode inline image data: either a `data:<mime>;base64,<payload>` URL or bare base64.
pub fn decode_inline(data: &str) -> CanvasResult<Vec<u8>> {
    let payload = match data.trim().strip_prefix("data:") {
        Some(rest) => {
            let (meta, payload) = rest
                .split_once(',')
                .ok_or_else(|| CanvasError::validation("data URL is missing ','"))?;
            if !meta.ends_with(";base64") {
                return Err(CanvasError::validation("only base64 data URLs are supported"));
            }
            payload
        }
        None => data.trim(),
    };
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .context("decode base64 image data")?;
    Ok(bytes)
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Inverse of [`premultiply_rgba8_in_place`], used before PNG encoding.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
