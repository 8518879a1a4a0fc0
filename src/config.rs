use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CanvasError, CanvasResult};

/// Environment variable that overrides [`GeneratorConfig::assets_root`].
pub const ASSETS_ENV: &str = "CREWCANVAS_ASSETS";

/// Font files used for all poster text. Relative paths resolve against the assets root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub regular: PathBuf,
    pub bold: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("fonts/DejaVuSans.ttf"),
            bold: PathBuf::from("fonts/DejaVuSans-Bold.ttf"),
        }
    }
}

/// Where the generator finds its bundled assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub assets_root: PathBuf,
    /// Boat silhouettes, named after the boat table entries (`eight.svg`, ...).
    pub boats_dir: PathBuf,
    /// Preset club logos.
    pub logos_dir: PathBuf,
    pub fonts: FontConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            boats_dir: PathBuf::from("boats"),
            logos_dir: PathBuf::from("club-logos"),
            fonts: FontConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults, with [`ASSETS_ENV`] applied when set.
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Replace `assets_root` from [`ASSETS_ENV`] if it is set and non-empty.
    pub fn with_env_override(mut self) -> Self {
        if let Some(root) = std::env::var_os(ASSETS_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(root = ?root, "assets root overridden from environment");
            self.assets_root = PathBuf::from(root);
        }
        self
    }

    pub fn with_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.assets_root = root.into();
        self
    }

    pub fn from_reader<R: Read>(r: R) -> CanvasResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CanvasError::config(format!("invalid generator config: {e}")))
    }

    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CanvasError::config(format!("open generator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.assets_root.join(p)
        }
    }

    pub fn boats_path(&self) -> PathBuf {
        self.resolve(&self.boats_dir)
    }

    pub fn logos_path(&self) -> PathBuf {
        self.resolve(&self.logos_dir)
    }

    pub fn regular_font_path(&self) -> PathBuf {
        self.resolve(&self.fonts.regular)
    }

    pub fn bold_font_path(&self) -> PathBuf {
        self.resolve(&self.fonts.bold)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
