use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CanvasError, CanvasResult};
use crate::scene::club_icon::ClubIconData;
use crate::scene::color::ColorScheme;

/// Saved per-club styling: colors plus an optional bundled logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(alias = "clubName")]
    pub club_name: String,
    #[serde(alias = "primaryColor")]
    pub primary_color: String,
    #[serde(alias = "secondaryColor")]
    pub secondary_color: String,
    #[serde(default, alias = "logoFilename", skip_serializing_if = "Option::is_none")]
    pub logo_filename: Option<String>,
    #[serde(default, alias = "isDefault")]
    pub is_default: bool,
}

impl ClubPreset {
    /// Color override for this club. Malformed colors are validation errors.
    pub fn color_scheme(&self) -> CanvasResult<ColorScheme> {
        ColorScheme::parse(&self.primary_color, &self.secondary_color)
    }

    /// Logo reference for this club, if one is saved.
    pub fn club_icon(&self) -> Option<ClubIconData> {
        self.logo_filename
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(ClubIconData::preset)
    }

    /// Resolve both the color scheme and the logo reference.
    pub fn resolve(&self) -> CanvasResult<(ColorScheme, Option<ClubIconData>)> {
        Ok((self.color_scheme()?, self.club_icon()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CanvasError::validation(format!("read club preset '{}': {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|e| CanvasError::validation(format!("invalid club preset: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/preset.rs"]
mod tests;
