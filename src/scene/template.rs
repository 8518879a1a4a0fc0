use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{CanvasError, CanvasResult};
use crate::scene::color::ColorScheme;

macro_rules! kebab_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $key)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CanvasError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| CanvasError::config(format!(
                        "unknown {} '{s}' (expected one of: {})",
                        stringify!($name),
                        Self::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ")
                    )))
            }
        }
    };
}

kebab_enum! {
    /// Decorative background painted first.
    pub enum BackgroundKind {
        Geometric => "geometric",
        Diagonal => "diagonal",
        RadialBurst => "radial-burst",
    }
}

kebab_enum! {
    /// Crew-name label style.
    pub enum NameDisplayKind {
        Basic => "basic",
        Labeled => "labeled",
    }
}

kebab_enum! {
    /// Boat silhouette placement.
    pub enum BoatStyle {
        Centered => "centered",
        Offset => "offset",
        Showcase => "showcase",
    }
}

kebab_enum! {
    /// Header text arrangement.
    pub enum TextLayoutKind {
        HeaderLeft => "header-left",
        HeaderCenter => "header-center",
        Minimal => "minimal",
    }
}

kebab_enum! {
    /// Corner the club logo is anchored to.
    pub enum LogoPlacement {
        BottomRight => "bottom-right",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        None => "none",
    }
}

/// Full visual configuration of one poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub background: BackgroundKind,
    pub name_display: NameDisplayKind,
    pub boat_style: BoatStyle,
    pub text_layout: TextLayoutKind,
    pub logo: LogoPlacement,
    #[serde(default)]
    pub dimensions: Canvas,
    #[serde(default)]
    pub colors: ColorScheme,
}

impl TemplateConfig {
    /// Reject configurations that cannot be rendered. Called before any drawing.
    pub fn validate(&self) -> CanvasResult<()> {
        self.dimensions.validate()
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Parse an explicit configuration from JSON. Unknown variant names are configuration errors.
    pub fn from_json_str(s: &str) -> CanvasResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CanvasError::config(format!("invalid template config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Predefined template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Template1,
    Template2,
    Template3,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::Template1,
        TemplateId::Template2,
        TemplateId::Template3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Template1 => "template1",
            Self::Template2 => "template2",
            Self::Template3 => "template3",
        }
    }

    /// Configuration for this preset with the default color scheme.
    pub fn config(self) -> TemplateConfig {
        let (background, name_display, boat_style, text_layout) = match self {
            Self::Template1 => (
                BackgroundKind::Geometric,
                NameDisplayKind::Basic,
                BoatStyle::Centered,
                TextLayoutKind::HeaderLeft,
            ),
            Self::Template2 => (
                BackgroundKind::Diagonal,
                NameDisplayKind::Labeled,
                BoatStyle::Offset,
                TextLayoutKind::HeaderLeft,
            ),
            Self::Template3 => (
                BackgroundKind::RadialBurst,
                NameDisplayKind::Basic,
                BoatStyle::Showcase,
                TextLayoutKind::HeaderCenter,
            ),
        };
        TemplateConfig {
            background,
            name_display,
            boat_style,
            text_layout,
            logo: LogoPlacement::BottomRight,
            dimensions: Canvas::PORTRAIT,
            colors: ColorScheme::DEFAULT,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| CanvasError::config(format!("unknown template id '{s}'")))
    }
}

/// Catalogue entry for listing templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateEntry {
    pub id: TemplateId,
    #[serde(flatten)]
    pub config: TemplateConfig,
}

/// All predefined templates in id order.
pub fn catalogue() -> Vec<TemplateEntry> {
    TemplateId::ALL
        .into_iter()
        .map(|id| TemplateEntry {
            id,
            config: id.config(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/template.rs"]
mod tests;
