use kurbo::Shape;

use crate::{
    assets::store::FontFace,
    foundation::{
        core::{Point, Rect, Rgba8},
        error::CanvasResult,
    },
    layout::{positions::TextAlign, seats::NamePlacement},
    render::surface::{Surface, TextStyle},
    scene::{color::ColorScheme, template::NameDisplayKind},
};

const PILL_HEIGHT: f64 = 32.0;

const BASIC_FONT_SIZE: f32 = 24.0;
const BASIC_PADDING: f64 = 8.0;
const BASIC_BASELINE_DROP: f64 = 6.0;

const LABELED_FONT_SIZE: f32 = 16.0;
const LABELED_SINGLE_FONT_SIZE: f32 = 18.0;
const LABELED_PADDING: f64 = 12.0;
const LABELED_CORNER_RADIUS: f64 = 16.0;
const LABELED_BORDER: f64 = 2.0;
const LABELED_BASELINE_DROP: f64 = 5.0;
const LABELED_NAME_COLOR: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);

/// Draw every placed crew name in the given style. Returns how many names were drawn.
pub(crate) fn paint_names(
    surface: &mut Surface,
    kind: NameDisplayKind,
    placements: &[NamePlacement],
    colors: &ColorScheme,
) -> CanvasResult<usize> {
    for p in placements {
        match kind {
            NameDisplayKind::Basic => basic(surface, p)?,
            NameDisplayKind::Labeled => labeled(surface, p, colors)?,
        }
    }
    tracing::debug!(display = %kind, names = placements.len(), "painted crew names");
    Ok(placements.len())
}

/// White bold name on a dark translucent box.
fn basic(surface: &mut Surface, p: &NamePlacement) -> CanvasResult<()> {
    let text_width = surface.measure(&p.name, FontFace::Bold, BASIC_FONT_SIZE)?;
    let bg_width = text_width + BASIC_PADDING * 2.0;
    let bg = Rect::from_center_size(p.at, (bg_width, PILL_HEIGHT));
    surface.fill_rect(bg, Rgba8::BLACK.fade(0.7));

    let style = TextStyle::new(FontFace::Bold, BASIC_FONT_SIZE, Rgba8::WHITE);
    surface.draw_text(
        &p.name,
        &style,
        Point::new(p.at.x, p.at.y + BASIC_BASELINE_DROP),
        TextAlign::Center,
    )?;
    Ok(())
}

/// Seat badge plus name inside a rounded, bordered white pill.
fn labeled(surface: &mut Surface, p: &NamePlacement, colors: &ColorScheme) -> CanvasResult<()> {
    let Some(label) = p.label else {
        // Singles carry no badge: plain centered text.
        let style = TextStyle::new(FontFace::Bold, LABELED_SINGLE_FONT_SIZE, Rgba8::WHITE);
        surface.draw_text(&p.name, &style, p.at, TextAlign::Center)?;
        return Ok(());
    };

    let label = label.to_string();
    let label_width = surface.measure(&format!("{label} "), FontFace::Bold, LABELED_FONT_SIZE)?;
    let name_width = surface.measure(&p.name, FontFace::Regular, LABELED_FONT_SIZE)?;
    let total_width = label_width + name_width;
    let bg_width = total_width + LABELED_PADDING * 2.0;

    let pill = kurbo::RoundedRect::from_rect(
        Rect::from_center_size(p.at, (bg_width, PILL_HEIGHT)),
        LABELED_CORNER_RADIUS,
    )
    .to_path(0.1);
    surface.fill_path(&pill, Rgba8::WHITE.fade(0.95));
    surface.stroke_path(&pill, LABELED_BORDER, colors.primary());

    let start_x = p.at.x - total_width / 2.0;
    let baseline = p.at.y + LABELED_BASELINE_DROP;
    surface.draw_text(
        &label,
        &TextStyle::new(FontFace::Bold, LABELED_FONT_SIZE, colors.primary()),
        Point::new(start_x, baseline),
        TextAlign::Left,
    )?;
    surface.draw_text(
        &p.name,
        &TextStyle::new(FontFace::Regular, LABELED_FONT_SIZE, LABELED_NAME_COLOR),
        Point::new(start_x + label_width, baseline),
        TextAlign::Left,
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/names.rs"]
mod tests;
