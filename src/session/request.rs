use std::path::Path;

use serde_json::Value;

use crate::foundation::error::{CanvasError, CanvasResult};
use crate::scene::{
    club_icon::ClubIconData,
    color::ColorScheme,
    crew::Crew,
    template::{TemplateConfig, TemplateId},
};

/// Which template a poster uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateChoice {
    Preset(TemplateId),
    Custom(TemplateConfig),
}

impl TemplateChoice {
    /// Resolve to a full configuration, validated before any drawing.
    pub fn resolve(&self) -> CanvasResult<TemplateConfig> {
        let cfg = match self {
            Self::Preset(id) => id.config(),
            Self::Custom(cfg) => *cfg,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for TemplateChoice {
    fn default() -> Self {
        Self::Preset(TemplateId::Template1)
    }
}

impl From<TemplateId> for TemplateChoice {
    fn from(id: TemplateId) -> Self {
        Self::Preset(id)
    }
}

impl From<TemplateConfig> for TemplateChoice {
    fn from(cfg: TemplateConfig) -> Self {
        Self::Custom(cfg)
    }
}

/// Everything needed to render one poster.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterRequest {
    pub crew: Crew,
    pub template: TemplateChoice,
    /// Replaces the template's colors when set.
    pub colors: Option<ColorScheme>,
    pub club_icon: Option<ClubIconData>,
}

impl PosterRequest {
    pub fn new(crew: Crew, template: impl Into<TemplateChoice>) -> Self {
        Self {
            crew,
            template: template.into(),
            colors: None,
            club_icon: None,
        }
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_club_icon(mut self, icon: ClubIconData) -> Self {
        self.club_icon = Some(icon);
        self
    }

    /// Template configuration with the color override applied.
    pub fn resolved_template(&self) -> CanvasResult<TemplateConfig> {
        let cfg = self.template.resolve()?;
        Ok(match self.colors {
            Some(colors) => cfg.with_colors(colors),
            None => cfg,
        })
    }

    /// Parse a request document:
    ///
    /// ```json
    /// {"crew": {..}, "template": "template2" | {..}, "colors": {..}, "clubIcon": {..}}
    /// ```
    ///
    /// Crew, color and club-icon problems are validation errors; an unknown template is a
    /// configuration error. A missing `template` selects `template1`.
    pub fn from_value(v: Value) -> CanvasResult<Self> {
        let Value::Object(mut obj) = v else {
            return Err(CanvasError::validation("poster request must be a JSON object"));
        };

        let crew = obj
            .remove("crew")
            .ok_or_else(|| CanvasError::validation("poster request is missing 'crew'"))
            .and_then(Crew::from_value)?;

        let template = match obj.remove("template") {
            None | Some(Value::Null) => TemplateChoice::default(),
            Some(Value::String(id)) => TemplateChoice::Preset(id.parse()?),
            Some(cfg @ Value::Object(_)) => TemplateChoice::Custom(
                serde_json::from_value(cfg)
                    .map_err(|e| CanvasError::config(format!("invalid template config: {e}")))?,
            ),
            Some(other) => {
                return Err(CanvasError::config(format!(
                    "'template' must be an id or an object, got {other}"
                )));
            }
        };

        let colors = match obj.remove("colors") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                serde_json::from_value(v)
                    .map_err(|e| CanvasError::validation(format!("invalid colors: {e}")))?,
            ),
        };

        let club_icon = match obj.remove("clubIcon").or_else(|| obj.remove("club_icon")) {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                serde_json::from_value(v)
                    .map_err(|e| CanvasError::validation(format!("invalid club icon: {e}")))?,
            ),
        };

        Ok(Self {
            crew,
            template,
            colors,
            club_icon,
        })
    }

    pub fn from_json_str(s: &str) -> CanvasResult<Self> {
        let v: Value = serde_json::from_str(s)
            .map_err(|e| CanvasError::validation(format!("invalid poster request: {e}")))?;
        Self::from_value(v)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            CanvasError::validation(format!("read poster request '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/request.rs"]
mod tests;
