use crate::foundation::error::{CanvasError, CanvasResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest accepted edge length. Keeps a single surface allocation bounded.
    pub const MAX_DIM: u32 = 8192;

    /// Instagram portrait format used by every predefined template.
    pub const PORTRAIT: Canvas = Canvas {
        width: 1080,
        height: 1350,
    };

    /// Create validated canvas dimensions.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject empty or oversized canvases.
    pub fn validate(self) -> CanvasResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CanvasError::config("canvas width and height must be > 0"));
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(CanvasError::config(format!(
                "canvas {}x{} exceeds {max}x{max}",
                self.width,
                self.height,
                max = Self::MAX_DIM
            )));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Geometric center of the canvas.
    pub fn center(self) -> Point {
        Point::new(self.width_f64() / 2.0, self.height_f64() / 2.0)
    }

    /// Full-canvas rectangle.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    pub const TRANSPARENT: Rgba8 = Rgba8::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same color with alpha scaled by `opacity` (clamped to `0..=1`).
    pub fn fade(self, opacity: f32) -> Self {
        let a = (f32::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
