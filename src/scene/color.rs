use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CanvasError, CanvasResult};

/// Two-color club palette applied to every template.
///
/// Templates use `primary` for accents, borders and badges and `secondary` for large fills; the
/// exact split is per background variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Accent color.
    pub primary: HexColor,
    /// Fill color.
    pub secondary: HexColor,
}

impl ColorScheme {
    /// Palette of the predefined templates (goldenrod on midnight blue).
    pub const DEFAULT: ColorScheme = ColorScheme {
        primary: HexColor(Rgba8::rgb(0xDA, 0xA5, 0x20)),
        secondary: HexColor(Rgba8::rgb(0x2C, 0x3E, 0x50)),
    };

    /// Parse both colors, failing with a validation error on malformed input.
    pub fn parse(primary: &str, secondary: &str) -> CanvasResult<Self> {
        Ok(Self {
            primary: primary.parse()?,
            secondary: secondary.parse()?,
        })
    }

    pub fn primary(&self) -> Rgba8 {
        self.primary.0
    }

    pub fn secondary(&self) -> Rgba8 {
        self.secondary.0
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A color that travels as a CSS-style string (`#RRGGBB`, `#RRGGBBAA`, `#RGB` or a basic
/// color keyword) and is held parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub Rgba8);

impl FromStr for HexColor {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
            .map(HexColor)
            .map_err(|e| CanvasError::validation(format!("invalid color \"{s}\": {e}")))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, a } = self.0;
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s)
            .map(HexColor)
            .map_err(serde::de::Error::custom)
    }
}

fn parse_color(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    if let Some(named) = named_color(s) {
        return Ok(named);
    }
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| "expected #RRGGBB, #RRGGBBAA, #RGB or a color name".to_owned())?;

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !hex.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match hex.len() {
        3 => {
            let mut c = [0u8; 3];
            for (i, ch) in hex.chars().enumerate() {
                let v = hex_byte(&ch.to_string())?;
                c[i] = v * 17;
            }
            Ok(Rgba8::rgb(c[0], c[1], c[2]))
        }
        6 => Ok(Rgba8::rgb(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        )),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

fn named_color(s: &str) -> Option<Rgba8> {
    let c = match s.to_ascii_lowercase().as_str() {
        "white" => Rgba8::WHITE,
        "black" => Rgba8::BLACK,
        "transparent" => Rgba8::TRANSPARENT,
        "red" => Rgba8::rgb(255, 0, 0),
        "green" => Rgba8::rgb(0, 128, 0),
        "blue" => Rgba8::rgb(0, 0, 255),
        "pink" => Rgba8::rgb(255, 192, 203),
        "brown" => Rgba8::rgb(165, 42, 42),
        "gray" | "grey" => Rgba8::rgb(128, 128, 128),
        "gold" => Rgba8::rgb(255, 215, 0),
        "goldenrod" => Rgba8::rgb(218, 165, 32),
        "navy" => Rgba8::rgb(0, 0, 128),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/color.rs"]
mod tests;
