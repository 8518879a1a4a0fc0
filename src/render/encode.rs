use std::io::Cursor;

use anyhow::Context;

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    foundation::error::{CanvasError, CanvasResult},
    render::surface::FrameRGBA,
};

/// Encode a frame as PNG (8-bit RGBA, straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> CanvasResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(CanvasError::render(format!(
            "frame byte length {} does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| CanvasError::render("frame buffer does not fit its dimensions"))?;

    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
