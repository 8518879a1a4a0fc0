use std::sync::Arc;

use crate::{
    assets::{
        store::{FontFace, Fonts, PreparedGraphic, PreparedImage, TextBrushRgba8, TextLayoutEngine},
        svg_raster::{rasterize_svg_to_premul_rgba8, svg_raster_size},
    },
    foundation::{
        core::{Affine, BezPath, Canvas, Point, Rect, Rgba8},
        error::{CanvasError, CanvasResult},
    },
    layout::positions::TextAlign,
};

/// Rendered frame. `data` is row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

/// How a line of text is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TextStyle {
    pub(crate) face: FontFace,
    pub(crate) size: f32,
    pub(crate) fill: Rgba8,
    /// Outline drawn under the fill: `(line width, color)`.
    pub(crate) outline: Option<(f64, Rgba8)>,
}

impl TextStyle {
    pub(crate) fn new(face: FontFace, size: f32, fill: Rgba8) -> Self {
        Self {
            face,
            size,
            fill,
            outline: None,
        }
    }

    pub(crate) fn with_outline(mut self, width: f64, color: Rgba8) -> Self {
        self.outline = Some((width, color));
        self
    }
}

/// Drawing surface shared by all pipeline stages of one render.
///
/// Owns its raster context and text shaper, so concurrent renders never share mutable state.
pub(crate) struct Surface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    shaper: TextLayoutEngine,
    fonts: Fonts,
}

impl Surface {
    pub(crate) fn new(canvas: Canvas, fonts: &Fonts) -> CanvasResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CanvasError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CanvasError::render("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(width, height),
            shaper: TextLayoutEngine::new(fonts)?,
            fonts: fonts.clone(),
        })
    }

    pub(crate) fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn reset_transform(&mut self) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Fill `rect` with a linear gradient running from `start` to `end`.
    pub(crate) fn fill_rect_linear(
        &mut self,
        rect: Rect,
        start: Point,
        end: Point,
        stops: &[(f32, Rgba8)],
    ) {
        self.reset_transform();
        let gradient =
            vello_cpu::peniko::Gradient::new_linear(point_to_cpu(start), point_to_cpu(end))
                .with_stops(color_stops(stops).as_slice());
        self.ctx.set_paint(gradient);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Fill `rect` with a radial gradient around `center`.
    pub(crate) fn fill_rect_radial(
        &mut self,
        rect: Rect,
        center: Point,
        radius: f64,
        stops: &[(f32, Rgba8)],
    ) {
        self.reset_transform();
        let gradient =
            vello_cpu::peniko::Gradient::new_radial(point_to_cpu(center), radius as f32)
                .with_stops(color_stops(stops).as_slice());
        self.ctx.set_paint(gradient);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Draw a decoded graphic stretched to fill `dest`.
    pub(crate) fn draw_graphic(&mut self, graphic: &PreparedGraphic, dest: Rect) -> CanvasResult<()> {
        let (pixmap, w, h) = match graphic {
            PreparedGraphic::Raster(img) => (premul_image_to_pixmap(img)?, img.width, img.height),
            PreparedGraphic::Svg(tree) => {
                let (w, h) = svg_raster_size(dest.width(), dest.height())?;
                let rgba = rasterize_svg_to_premul_rgba8(tree, w, h)?;
                let img = PreparedImage {
                    width: w,
                    height: h,
                    rgba8_premul: Arc::new(rgba),
                };
                (premul_image_to_pixmap(&img)?, w, h)
            }
        };
        let (w, h) = (f64::from(w), f64::from(h));
        let transform = Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);

        self.reset_transform();
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        });
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        Ok(())
    }

    /// Advance width of `text` in the given face and size.
    pub(crate) fn measure(&mut self, text: &str, face: FontFace, size: f32) -> CanvasResult<f64> {
        let layout = self
            .shaper
            .layout_line(text, face, size, TextBrushRgba8::default())?;
        Ok(f64::from(crate::assets::store::advance_width(&layout)))
    }

    /// Draw one line of text with its baseline at `anchor.y`. Returns the advance width.
    pub(crate) fn draw_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        anchor: Point,
        align: TextAlign,
    ) -> CanvasResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let fill = style.fill;
        let layout = self.shaper.layout_line(
            text,
            style.face,
            style.size,
            TextBrushRgba8 {
                r: fill.r,
                g: fill.g,
                b: fill.b,
                a: fill.a,
            },
        )?;
        let width = f64::from(crate::assets::store::advance_width(&layout));
        let x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - width / 2.0,
        };

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let mut gx = run.offset();
                for g in run.glyphs() {
                    glyphs.push((g.id, gx + g.x, -g.y));
                    gx += g.advance;
                }
            }
        }

        let to_cpu = |&(id, x, y): &(_, f32, f32)| vello_cpu::Glyph { id, x, y };
        let font = self.fonts.data(style.face).clone();
        self.reset_transform();
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((x, anchor.y)));
        if let Some((line_width, color)) = style.outline {
            self.ctx.set_paint(color_to_cpu(color));
            self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(line_width));
            self.ctx
                .glyph_run(&font)
                .font_size(style.size)
                .stroke_glyphs(glyphs.iter().map(to_cpu));
        }
        self.ctx.set_paint(color_to_cpu(fill));
        self.ctx
            .glyph_run(&font)
            .font_size(style.size)
            .fill_glyphs(glyphs.iter().map(to_cpu));
        Ok(width)
    }

    /// Rasterize everything drawn so far.
    pub(crate) fn finish(mut self) -> FrameRGBA {
        let (w, h) = (self.canvas.width as u16, self.canvas.height as u16);
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn color_stops(stops: &[(f32, Rgba8)]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|&(offset, c)| vello_cpu::peniko::ColorStop::from((offset, color_to_cpu(c))))
        .collect()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_image_to_pixmap(img: &PreparedImage) -> CanvasResult<vello_cpu::Pixmap> {
    let w: u16 = img
        .width
        .try_into()
        .map_err(|_| CanvasError::render("image width exceeds u16"))?;
    let h: u16 = img
        .height
        .try_into()
        .map_err(|_| CanvasError::render("image height exceeds u16"))?;
    if img.rgba8_premul.len() != img.width as usize * img.height as usize * 4 {
        return Err(CanvasError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(img.width as usize * img.height as usize);
    for px in img.rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
