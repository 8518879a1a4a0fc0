use crate::{
    assets::store::AssetStore,
    foundation::error::CanvasResult,
    layout::positions::{BoatPositioning, LogoPositioning},
    render::surface::Surface,
    scene::club_icon::ClubIconData,
};

/// Draw the boat silhouette for `code` into the boat rectangle.
pub(crate) fn composite_boat(
    surface: &mut Surface,
    assets: &AssetStore,
    code: &str,
    boat: &BoatPositioning,
) -> CanvasResult<()> {
    let graphic = assets.boat(code)?;
    surface.draw_graphic(graphic, boat.rect())?;
    tracing::debug!(code, "composited boat");
    Ok(())
}

/// Draw the club logo into its square. Any failure is logged and the logo is skipped.
///
/// Returns whether a logo was drawn.
pub(crate) fn composite_logo(
    surface: &mut Surface,
    assets: &AssetStore,
    icon: &ClubIconData,
    logo: &LogoPositioning,
) -> bool {
    let result = assets
        .load_logo(icon)
        .and_then(|graphic| surface.draw_graphic(&graphic, logo.rect()));
    match result {
        Ok(()) => {
            tracing::debug!(logo = %icon.describe(), "composited club logo");
            true
        }
        Err(e) => {
            tracing::warn!(logo = %icon.describe(), error = %e, "club logo skipped");
            false
        }
    }
}
