//! Site configuration management for `parlandim.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | SEO defaults (title, description, url, twitter) |
//! | `[theme]`   | Theme storage file and detector                 |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Parlandim<dev>"
//! description = "Blog sobre desenvolvimento"
//! site_url = "https://parlandim.dev"
//! twitter_username = "@parlandim"
//!
//! [theme]
//! detector = "system"
//! ```

mod defaults;
mod error;
mod handle;
mod site;
mod theme;

pub use handle::{cfg, init_config};
pub use theme::DetectorKind;

use error::ConfigError;
use site::SiteSection;
use theme::ThemeSection;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing parlandim.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root directory (set after loading)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Site-wide SEO defaults
    #[serde(default)]
    pub site: SiteSection,

    /// Theme preference settings
    #[serde(default)]
    pub theme: ThemeSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Apply the CLI root and resolve relative paths against it.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);
        self.set_root(&root);
        self.theme.storage = Self::normalize_path(&root.join(&self.theme.storage));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let site_url = &self.site.site_url;

        if !site_url.is_empty()
            && !site_url.starts_with("http://")
            && !site_url.starts_with("https://")
        {
            bail!(ConfigError::Validation(
                "[site.site_url] must start with http:// or https://".into()
            ));
        }

        // Page pathnames start with '/', so a trailing slash would double it
        if site_url.ends_with('/') {
            bail!(ConfigError::Validation(
                "[site.site_url] must not end with '/'".into()
            ));
        }

        if let Some(image) = &self.site.image
            && !image.is_empty()
            && !image.starts_with('/')
        {
            bail!(ConfigError::Validation(
                "[site.image] must be an absolute path starting with '/'".into()
            ));
        }

        if self.theme.storage.as_os_str().is_empty() {
            bail!(ConfigError::Validation("[theme.storage] must not be empty".into()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
