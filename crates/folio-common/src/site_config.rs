//! Site configuration.
//! Reads folio.toml from the current directory or the path in the FOLIO_CONFIG env var.
//! Every field has a default, so a missing file yields a working site.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8501".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

// ── Assets ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Root directory for photos, videos, figures and PDFs.
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
    /// Profile photo, relative to `dir`.
    #[serde(default = "default_profile_photo")]
    pub profile_photo: PathBuf,
    /// Rendered width of the profile photo in pixels.
    #[serde(default = "default_photo_width")]
    pub profile_photo_width: u32,
}

fn default_assets_dir()     -> PathBuf { PathBuf::from("assets") }
fn default_profile_photo()  -> PathBuf { PathBuf::from("photo.jpg") }
fn default_photo_width()    -> u32     { 300 }

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            profile_photo: default_profile_photo(),
            profile_photo_width: default_photo_width(),
        }
    }
}

// ── Media ────────────────────────────────────────────────────────────────────

/// What to do with a video URL that cannot be embedded and is rendered as a
/// plain link instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnembeddablePolicy {
    /// The link fallback counts as media shown; no image fallback follows.
    #[default]
    CountsAsShown,
    /// The link is still emitted, but the chain continues to the image stage.
    FallThrough,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default)]
    pub unembeddable: UnembeddablePolicy,
}

// ── Content ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Optional TOML file with `[profile]`, `[[projects]]` and `[[papers]]`.
    /// The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from folio.toml.
    /// Checks FOLIO_CONFIG env var first, then the current directory.
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Profile photo path, relative to the asset directory.
    pub fn profile_photo(&self) -> &Path {
        &self.assets.profile_photo
    }
}
