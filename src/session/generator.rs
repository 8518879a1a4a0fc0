use rayon::prelude::*;

use crate::{
    assets::store::AssetStore,
    config::GeneratorConfig,
    foundation::error::{CanvasError, CanvasResult},
    layout::{positions::PosterLayout, seats::place_names},
    render::{
        background::paint_background,
        compositor::{composite_boat, composite_logo},
        encode::encode_png,
        names::paint_names,
        surface::{FrameRGBA, Surface},
        text::paint_text,
    },
    scene::{club_icon::ClubIconData, crew::Crew, template::TemplateConfig},
    session::request::PosterRequest,
};

/// A finished poster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poster {
    /// PNG-encoded image bytes.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Number of crew names drawn (blank seats are skipped).
    pub names_drawn: usize,
    /// Whether a club logo made it onto the poster.
    pub logo_drawn: bool,
}

/// What one pass through the pipeline produced besides pixels.
#[derive(Clone, Copy, Debug, Default)]
struct PaintStats {
    names_drawn: usize,
    logo_drawn: bool,
}

/// Poster orchestrator.
///
/// Holds the read-only asset store; every render allocates its own surface, so a generator can be
/// shared across threads and used for concurrent renders.
pub struct PosterGenerator {
    assets: AssetStore,
}

impl PosterGenerator {
    /// Load bundled assets described by `cfg`.
    pub fn new(cfg: &GeneratorConfig) -> CanvasResult<Self> {
        Ok(Self {
            assets: AssetStore::load(cfg)?,
        })
    }

    /// Generator over the default assets, honouring the assets-root environment override.
    pub fn from_env() -> CanvasResult<Self> {
        Self::new(&GeneratorConfig::from_env())
    }

    /// Render one poster and encode it as PNG.
    pub fn generate(
        &self,
        crew: &Crew,
        cfg: &TemplateConfig,
        club_icon: Option<&ClubIconData>,
    ) -> CanvasResult<Vec<u8>> {
        let (frame, _) = self.paint(crew, cfg, club_icon)?;
        encode_png(&frame)
    }

    /// Render one poster to raw pixels (premultiplied RGBA8) without encoding.
    pub fn render_frame(
        &self,
        crew: &Crew,
        cfg: &TemplateConfig,
        club_icon: Option<&ClubIconData>,
    ) -> CanvasResult<FrameRGBA> {
        self.paint(crew, cfg, club_icon).map(|(frame, _)| frame)
    }

    /// Render a full request: template selection, color override and club icon.
    pub fn render(&self, req: &PosterRequest) -> CanvasResult<Poster> {
        let cfg = req.resolved_template()?;
        let (frame, stats) = self.paint(&req.crew, &cfg, req.club_icon.as_ref())?;
        let png = encode_png(&frame)?;
        Ok(Poster {
            png,
            width: frame.width,
            height: frame.height,
            names_drawn: stats.names_drawn,
            logo_drawn: stats.logo_drawn,
        })
    }

    /// Render many requests in parallel. Results are in request order; one failing request does
    /// not affect the others.
    ///
    /// `threads` overrides the worker count; `None` uses rayon defaults.
    pub fn render_batch(
        &self,
        requests: &[PosterRequest],
        threads: Option<usize>,
    ) -> CanvasResult<Vec<CanvasResult<Poster>>> {
        let pool = build_thread_pool(threads)?;
        tracing::debug!(requests = requests.len(), threads = pool.current_num_threads(), "batch render");
        Ok(pool.install(|| requests.par_iter().map(|req| self.render(req)).collect()))
    }

    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(crew = %crew.name, boat = %crew.boat_type.value, background = %cfg.background)
    )]
    fn paint(
        &self,
        crew: &Crew,
        cfg: &TemplateConfig,
        club_icon: Option<&ClubIconData>,
    ) -> CanvasResult<(FrameRGBA, PaintStats)> {
        cfg.validate()?;
        let layout = PosterLayout::compute(cfg);
        let placements = place_names(crew, &layout.names, cfg.name_display);

        let mut surface = Surface::new(cfg.dimensions, self.assets.fonts())?;
        let mut stats = PaintStats::default();

        paint_background(&mut surface, cfg.background, &cfg.colors);
        composite_boat(&mut surface, &self.assets, &crew.boat_type.value, &layout.boat)?;
        paint_text(&mut surface, crew, cfg.background, &layout.text)?;
        stats.names_drawn = paint_names(&mut surface, cfg.name_display, &placements, &cfg.colors)?;

        match (club_icon, layout.logo) {
            (Some(icon), Some(logo)) => {
                stats.logo_drawn = composite_logo(&mut surface, &self.assets, icon, &logo);
            }
            (Some(icon), None) => {
                tracing::debug!(logo = %icon.describe(), "logo placement is none; skipping logo");
            }
            (None, _) => {}
        }

        let frame = surface.finish();
        tracing::debug!(
            width = frame.width,
            height = frame.height,
            names = stats.names_drawn,
            logo = stats.logo_drawn,
            "poster painted"
        );
        Ok((frame, stats))
    }
}

fn build_thread_pool(threads: Option<usize>) -> CanvasResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CanvasError::config("batch 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CanvasError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/generator.rs"]
mod tests;
