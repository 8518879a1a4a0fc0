use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode;
use crate::config::GeneratorConfig;
use crate::foundation::error::{CanvasError, CanvasResult};
use crate::scene::club_icon::ClubIconData;

#[derive(Clone, Debug)]
/// Prepared raster image in premultiplied RGBA8 form.
pub(crate) struct PreparedImage {
    /// Width in pixels.
    pub(crate) width: u32,
    /// Height in pixels.
    pub(crate) height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub(crate) rgba8_premul: Arc<Vec<u8>>,
}

/// A decoded boat silhouette or logo.
#[derive(Clone, Debug)]
pub(crate) enum PreparedGraphic {
    Raster(PreparedImage),
    Svg(Arc<usvg::Tree>),
}

/// Boat class code to silhouette asset name.
const BOAT_ASSETS: &[(&str, &str)] = &[
    ("8+", "eight"),
    ("4+", "four"),
    ("4-", "four"),
    ("4x", "quad"),
    ("2x", "double"),
    ("2-", "pair"),
    ("1x", "single"),
];

/// Silhouette used for unknown classes and for classes whose own asset is unavailable.
pub(crate) const DEFAULT_BOAT: &str = "eight";

/// Asset name for a boat class code. Unknown codes map to [`DEFAULT_BOAT`].
pub(crate) fn boat_asset_name(code: &str) -> &'static str {
    BOAT_ASSETS
        .iter()
        .find(|(c, _)| *c == code.trim())
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_BOAT)
}

/// Normalize and validate a preset logo filename relative to the logo directory.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> CanvasResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CanvasError::validation("logo paths must be relative"));
    }
    if s.is_empty() {
        return Err(CanvasError::validation("logo path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CanvasError::validation("logo paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CanvasError::validation("logo path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Regular and bold faces shared by every render: raw bytes for shaping, font handles for
/// glyph rasterization.
#[derive(Clone, Debug)]
pub(crate) struct Fonts {
    regular: Arc<Vec<u8>>,
    bold: Arc<Vec<u8>>,
    regular_data: vello_cpu::peniko::FontData,
    bold_data: vello_cpu::peniko::FontData,
}

impl Fonts {
    fn load(regular: &Path, bold: &Path) -> CanvasResult<Self> {
        let regular = read_font(regular)?;
        let bold = read_font(bold)?;
        Ok(Self {
            regular_data: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(regular.clone()),
                0,
            ),
            bold_data: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bold.clone()),
                0,
            ),
            regular: Arc::new(regular),
            bold: Arc::new(bold),
        })
    }

    pub(crate) fn bytes(&self, face: FontFace) -> &[u8] {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }

    pub(crate) fn data(&self, face: FontFace) -> &vello_cpu::peniko::FontData {
        match face {
            FontFace::Regular => &self.regular_data,
            FontFace::Bold => &self.bold_data,
        }
    }
}

/// Read-only asset set shared across concurrent renders.
///
/// Boat silhouettes and fonts are loaded once up front. Logos are resolved per render because
/// uploads are per-request files.
#[derive(Debug)]
pub(crate) struct AssetStore {
    boats: HashMap<&'static str, PreparedGraphic>,
    logos_dir: PathBuf,
    fonts: Fonts,
}

impl AssetStore {
    /// Load fonts and boat silhouettes. Only a missing default boat or missing fonts are fatal.
    pub(crate) fn load(cfg: &GeneratorConfig) -> CanvasResult<Self> {
        let boats_dir = cfg.boats_path();
        let mut boats = HashMap::new();
        let mut names: Vec<&'static str> = BOAT_ASSETS.iter().map(|(_, n)| *n).collect();
        names.dedup();
        for name in names {
            match load_boat(&boats_dir, name) {
                Ok(g) => {
                    boats.insert(name, g);
                }
                Err(e) if name == DEFAULT_BOAT => {
                    return Err(CanvasError::asset(format!(
                        "default boat silhouette '{name}' in '{}': {e}",
                        boats_dir.display()
                    )));
                }
                Err(e) => {
                    tracing::warn!(boat = name, error = %e, "boat silhouette unavailable; will use default");
                }
            }
        }

        let fonts = Fonts::load(&cfg.regular_font_path(), &cfg.bold_font_path())?;

        tracing::debug!(boats = boats.len(), "asset store loaded");
        Ok(Self {
            boats,
            logos_dir: cfg.logos_path(),
            fonts,
        })
    }

    /// Silhouette for a boat class code, falling back to the default eight.
    pub(crate) fn boat(&self, code: &str) -> CanvasResult<&PreparedGraphic> {
        let name = boat_asset_name(code);
        if !is_known_boat(code) {
            tracing::warn!(code, "unrecognized boat class; using default silhouette");
        }
        if let Some(g) = self.boats.get(name) {
            return Ok(g);
        }
        tracing::warn!(code, boat = name, "boat silhouette missing; using default");
        self.boats
            .get(DEFAULT_BOAT)
            .ok_or_else(|| CanvasError::asset("default boat silhouette is not loaded"))
    }

    pub(crate) fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    /// Resolve and decode a club logo. Errors are for the caller to log and skip.
    pub(crate) fn load_logo(&self, icon: &ClubIconData) -> CanvasResult<PreparedGraphic> {
        let bytes = match icon {
            ClubIconData::Preset { filename } => {
                let rel = normalize_rel_path(filename)?;
                let path = self.logos_dir.join(rel);
                std::fs::read(&path)
                    .with_context(|| format!("read preset logo '{}'", path.display()))?
            }
            ClubIconData::Upload { file_path } => std::fs::read(file_path)
                .with_context(|| format!("read uploaded logo '{}'", file_path.display()))?,
            ClubIconData::Inline { data } => decode::decode_inline(data)?,
        };
        decode::decode_graphic(&bytes)
    }
}

fn is_known_boat(code: &str) -> bool {
    BOAT_ASSETS.iter().any(|(c, _)| *c == code.trim())
}

fn load_boat(dir: &Path, name: &str) -> CanvasResult<PreparedGraphic> {
    let svg = dir.join(format!("{name}.svg"));
    let path = if svg.is_file() {
        svg
    } else {
        dir.join(format!("{name}.png"))
    };
    let bytes = std::fs::read(&path).with_context(|| format!("read '{}'", path.display()))?;
    decode::decode_graphic(&bytes)
}

fn read_font(path: &Path) -> CanvasResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| CanvasError::asset(format!("read font '{}': {e}", path.display())))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

/// Which of the two bundled faces to shape with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FontFace {
    Regular,
    Bold,
}

struct FaceContext {
    font_ctx: parley::FontContext,
    family: String,
}

impl FaceContext {
    fn new(font_bytes: &[u8]) -> CanvasResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CanvasError::asset("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CanvasError::asset("registered font family has no name"))?
            .to_string();
        Ok(Self { font_ctx, family })
    }
}

/// Stateful helper for building single-line Parley layouts from the bundled faces.
///
/// Each face lives in its own font context so that faces sharing a family name never shadow
/// each other.
pub(crate) struct TextLayoutEngine {
    regular: FaceContext,
    bold: FaceContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl TextLayoutEngine {
    pub(crate) fn new(fonts: &Fonts) -> CanvasResult<Self> {
        Ok(Self {
            regular: FaceContext::new(fonts.bytes(FontFace::Regular))?,
            bold: FaceContext::new(fonts.bytes(FontFace::Bold))?,
            layout_ctx: parley::LayoutContext::new(),
        })
    }

    /// Shape and lay out one unwrapped line of text.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        face: FontFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CanvasResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CanvasError::render("text size_px must be finite and > 0"));
        }

        let face_ctx = match face {
            FontFace::Regular => &mut self.regular,
            FontFace::Bold => &mut self.bold,
        };

        let mut builder =
            self.layout_ctx
                .ranged_builder(&mut face_ctx.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face_ctx.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

/// Total horizontal advance of a laid-out line, trailing whitespace included.
pub(crate) fn advance_width(layout: &parley::Layout<TextBrushRgba8>) -> f32 {
    let mut width = 0.0f32;
    for line in layout.lines() {
        let mut line_width = 0.0f32;
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                line_width += run.glyphs().map(|g| g.advance).sum::<f32>();
            }
        }
        width = width.max(line_width);
    }
    width
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
