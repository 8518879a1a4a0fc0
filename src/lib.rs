#![forbid(unsafe_code)]

//! Crew lineup posters for rowing clubs.
//!
//! A [`PosterGenerator`] paints a crew onto one of the predefined templates (or an explicit
//! [`TemplateConfig`]) on the CPU and returns PNG bytes. The pipeline is background, boat
//! silhouette, header text, crew names, then the optional club logo.
//!
//! ```no_run
//! use crewcanvas::{Crew, PosterGenerator, TemplateId};
//!
//! let generator = PosterGenerator::from_env()?;
//! let crew = Crew::from_path("crew.json")?;
//! let png = generator.generate(&crew, &TemplateId::Template2.config(), None)?;
//! std::fs::write("poster.png", png)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assets;
mod config;
mod foundation;
mod layout;
mod render;
mod scene;
mod session;

pub use config::{ASSETS_ENV, FontConfig, GeneratorConfig};
pub use foundation::core::{Canvas, Point, Rect, Rgba8};
pub use foundation::error::{CanvasError, CanvasResult};
pub use layout::positions::{
    BoatPositioning, LogoPositioning, NamePositioning, PosterLayout, TextAlign, TextPositioning,
};
pub use layout::seats::{NamePlacement, SeatLabel, Side, eight_visual_position, place_names};
pub use render::encode::encode_png;
pub use render::surface::FrameRGBA;
pub use scene::club_icon::ClubIconData;
pub use scene::color::{ColorScheme, HexColor};
pub use scene::crew::{BoatClass, BoatType, Crew};
pub use scene::preset::ClubPreset;
pub use scene::template::{
    BackgroundKind, BoatStyle, LogoPlacement, NameDisplayKind, TemplateConfig, TemplateEntry,
    TemplateId, TextLayoutKind, catalogue,
};
pub use session::generator::{Poster, PosterGenerator};
pub use session::request::{PosterRequest, TemplateChoice};
