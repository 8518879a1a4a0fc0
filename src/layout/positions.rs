use serde::Serialize;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::scene::template::{
    BackgroundKind, BoatStyle, LogoPlacement, NameDisplayKind, TemplateConfig, TextLayoutKind,
};

/// Natural size of the boat silhouette artwork before scaling.
pub const BOAT_BASE_WIDTH: f64 = 400.0;
pub const BOAT_BASE_HEIGHT: f64 = 600.0;

/// Baseline of the coach line.
pub const COACH_Y: f64 = 800.0;

/// Where the boat silhouette is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoatPositioning {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl BoatPositioning {
    pub fn compute(cfg: &TemplateConfig) -> Self {
        let scale = match cfg.boat_style {
            BoatStyle::Showcase => 0.45,
            BoatStyle::Centered | BoatStyle::Offset => 0.8,
        };
        let width = BOAT_BASE_WIDTH * scale;
        let height = BOAT_BASE_HEIGHT * scale;
        let y = match cfg.boat_style {
            BoatStyle::Offset => 250.0,
            BoatStyle::Centered | BoatStyle::Showcase => 280.0,
        };
        Self {
            x: (cfg.dimensions.width_f64() - width) / 2.0,
            y,
            width,
            height,
            scale,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Reference lines used to place crew names around the boat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NamePositioning {
    /// y of the first rowing position.
    pub base_y: f64,
    /// Vertical distance between rowing positions.
    pub spacing_y: f64,
    /// Horizontal offset of a name from the boat centerline.
    pub oar_length: f64,
    pub center_x: f64,
    pub img_y: f64,
    pub img_height: f64,
}

impl NamePositioning {
    pub fn compute(cfg: &TemplateConfig, boat: &BoatPositioning) -> Self {
        let labeled = cfg.name_display == NameDisplayKind::Labeled;
        let (base_off, spacing_y, oar_length) = if labeled {
            (230.0, (boat.height - 200.0) / 9.3, 215.0)
        } else {
            (170.0, (boat.height - 220.0) / 7.0, 250.0)
        };
        Self {
            base_y: boat.y + base_off,
            spacing_y,
            oar_length,
            center_x: cfg.dimensions.width_f64() / 2.0,
            img_y: boat.y,
            img_height: boat.height,
        }
    }
}

/// Horizontal anchoring of a text line relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

/// Baseline anchors of the header and coach lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextPositioning {
    pub race_name: Point,
    /// `None` when the layout omits the subtitle.
    pub subtitle: Option<Point>,
    pub header_align: TextAlign,
    pub coach: Point,
}

impl TextPositioning {
    pub fn compute(cfg: &TemplateConfig) -> Self {
        let (race_name, subtitle) = if cfg.background == BackgroundKind::Diagonal {
            (Point::new(40.0, 80.0), Point::new(40.0, 130.0))
        } else {
            (Point::new(60.0, 120.0), Point::new(60.0, 180.0))
        };
        let center_x = cfg.dimensions.width_f64() / 2.0;
        let coach = Point::new(center_x, COACH_Y);

        match cfg.text_layout {
            TextLayoutKind::HeaderLeft => Self {
                race_name,
                subtitle: Some(subtitle),
                header_align: TextAlign::Left,
                coach,
            },
            TextLayoutKind::HeaderCenter => Self {
                race_name: Point::new(center_x, race_name.y),
                subtitle: Some(Point::new(center_x, subtitle.y)),
                header_align: TextAlign::Center,
                coach,
            },
            TextLayoutKind::Minimal => Self {
                race_name,
                subtitle: None,
                header_align: TextAlign::Left,
                coach,
            },
        }
    }
}

/// Square area the club logo is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogoPositioning {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl LogoPositioning {
    /// `None` when the template hides the logo.
    pub fn compute(cfg: &TemplateConfig) -> Option<Self> {
        let size = match cfg.background {
            BackgroundKind::RadialBurst => 100.0,
            BackgroundKind::Diagonal => 120.0,
            BackgroundKind::Geometric => 160.0,
        };
        let margin = match cfg.background {
            BackgroundKind::Geometric => 60.0,
            BackgroundKind::Diagonal | BackgroundKind::RadialBurst => 30.0,
        };
        let Canvas { width, height } = cfg.dimensions;
        let far_x = f64::from(width) - size - margin;
        let far_y = f64::from(height) - size - margin;
        let (x, y) = match cfg.logo {
            LogoPlacement::BottomRight => (far_x, far_y),
            LogoPlacement::TopRight => (far_x, margin),
            LogoPlacement::BottomLeft => (margin, far_y),
            LogoPlacement::None => return None,
        };
        Some(Self { x, y, size })
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.size, self.y + self.size)
    }
}

/// Every derived position for one render.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PosterLayout {
    pub boat: BoatPositioning,
    pub names: NamePositioning,
    pub text: TextPositioning,
    pub logo: Option<LogoPositioning>,
}

impl PosterLayout {
    pub fn compute(cfg: &TemplateConfig) -> Self {
        let boat = BoatPositioning::compute(cfg);
        Self {
            names: NamePositioning::compute(cfg, &boat),
            text: TextPositioning::compute(cfg),
            logo: LogoPositioning::compute(cfg),
            boat,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/positions.rs"]
mod tests;
