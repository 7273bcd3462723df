//! Settings for locating the documentation root.
//!
//! Settings are stored in TOML format. The default location is:
//! - Linux: `~/.config/docbridge/config.toml`
//! - macOS: `~/Library/Application Support/docbridge/config.toml`
//! - Windows: `%APPDATA%\docbridge\config.toml`
//!
//! ```toml
//! docs_dir = "/srv/docs"
//! ```
//!
//! A relative `docs_dir` is resolved against the process working directory
//! when the [`PathGuard`](crate::PathGuard) is built.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Documentation root used when nothing else is configured.
pub const DEFAULT_DOCS_DIR: &str = "./docs";

/// Server settings.
///
/// # Examples
///
/// ```
/// use docbridge_core::Settings;
/// use std::path::Path;
///
/// let settings = Settings::from_toml_str(r#"docs_dir = "/srv/docs""#).unwrap();
/// assert_eq!(settings.docs_dir, Path::new("/srv/docs"));
///
/// let settings = Settings::from_toml_str("").unwrap();
/// assert_eq!(settings, Settings::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Documentation root directory
    pub docs_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::ConfigError {
            message: "failed to parse settings".to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let settings = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads settings from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional: when
    /// no file is there, built-in defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a settings file is present but
    /// cannot be read or parsed, or if an explicit path is missing.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_config_path() {
            Some(default) if default.is_file() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the platform-specific default settings file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docbridge").join("config.toml"))
    }

    /// Overrides the documentation root when `docs_dir` is `Some`.
    #[must_use]
    pub fn with_docs_dir(mut self, docs_dir: Option<PathBuf>) -> Self {
        if let Some(docs_dir) = docs_dir {
            self.docs_dir = docs_dir;
        }
        self
    }
}
