use crate::{
    assets::store::FontFace,
    foundation::{core::Rgba8, error::CanvasResult},
    layout::positions::{TextAlign, TextPositioning},
    render::surface::{Surface, TextStyle},
    scene::{crew::Crew, template::BackgroundKind},
};

const RACE_NAME_SIZE: f32 = 56.0;
const SUBTITLE_SIZE_OUTLINED: f32 = 32.0;
const SUBTITLE_SIZE: f32 = 36.0;
const COACH_SIZE: f32 = 18.0;
const HEADER_OUTLINE: f64 = 3.0;
const COACH_OUTLINE: f64 = 2.0;

/// Draw the race name, the crew subtitle and the coach line.
///
/// On the diagonal background the text is white with a black outline so it reads against the
/// banner; elsewhere it is plain black.
pub(crate) fn paint_text(
    surface: &mut Surface,
    crew: &Crew,
    background: BackgroundKind,
    pos: &TextPositioning,
) -> CanvasResult<()> {
    let outlined = background == BackgroundKind::Diagonal;

    let (race_style, subtitle_style) = if outlined {
        (
            TextStyle::new(FontFace::Bold, RACE_NAME_SIZE, Rgba8::WHITE)
                .with_outline(HEADER_OUTLINE, Rgba8::BLACK),
            TextStyle::new(FontFace::Bold, SUBTITLE_SIZE_OUTLINED, Rgba8::WHITE)
                .with_outline(HEADER_OUTLINE, Rgba8::BLACK),
        )
    } else {
        (
            TextStyle::new(FontFace::Bold, RACE_NAME_SIZE, Rgba8::BLACK),
            TextStyle::new(FontFace::Regular, SUBTITLE_SIZE, Rgba8::BLACK),
        )
    };

    surface.draw_text(&crew.race_name, &race_style, pos.race_name, pos.header_align)?;
    if let Some(at) = pos.subtitle {
        surface.draw_text(&crew.subtitle(), &subtitle_style, at, pos.header_align)?;
    }

    if let Some(coach) = crew.coach() {
        let mut style = TextStyle::new(
            FontFace::Bold,
            COACH_SIZE,
            if outlined { Rgba8::WHITE } else { Rgba8::BLACK },
        );
        if outlined {
            style = style.with_outline(COACH_OUTLINE, Rgba8::BLACK);
        }
        surface.draw_text(&format!("Coach: {coach}"), &style, pos.coach, TextAlign::Center)?;
    }

    tracing::debug!(coach = crew.coach().is_some(), "painted header text");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
