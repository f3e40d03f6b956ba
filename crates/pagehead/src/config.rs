//! Site configuration (`pagehead.toml`)
//!
//! ```toml
//! [site]
//! name = "vectorbt"
//! home_url = "https://github.com/polakowo/vectorbt"
//! logo = "assets/logo.png"       # optional, relative to the config file
//! title = "vectorbt docs"        # optional, defaults to `name`
//! ```

use std::fmt;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::assets;
use crate::model::{HeaderConfig, Logo};

/// Parsed `pagehead.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Project display name shown in the header.
    pub name: String,
    /// Project home page the header links to.
    pub home_url: String,
    /// Path to a logo image, relative to the config file.
    pub logo: Option<String>,
    /// Site title for `<title>`; defaults to `name`.
    pub title: Option<String>,
}

impl SiteConfig {
    /// Parse config text, enforcing that name and home URL are non-empty.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text).map_err(ConfigError::Parse)?;
        if config.site.name.trim().is_empty() {
            return Err(ConfigError::EmptyField("site.name"));
        }
        if config.site.home_url.trim().is_empty() {
            return Err(ConfigError::EmptyField("site.home_url"));
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        Self::parse(&text)
    }

    /// Build the read-only header branding for this site build.
    ///
    /// Reads the logo file once, relative to `base_dir` (the config file's
    /// directory). Without a configured logo the embedded default is used.
    pub fn header_config(&self, base_dir: &Path) -> Result<HeaderConfig, ConfigError> {
        let logo = match &self.site.logo {
            Some(rel) => {
                let path = base_dir.join(rel);
                let bytes = std::fs::read(&path)
                    .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
                Logo::new(bytes)
            }
            None => Logo::new(assets::DEFAULT_LOGO.to_vec()),
        };
        Ok(HeaderConfig {
            display_name: self.site.name.clone(),
            home_url: self.site.home_url.clone(),
            logo,
        })
    }

    /// Site title for `<title>` tags.
    pub fn title(&self) -> &str {
        self.site.title.as_deref().unwrap_or(&self.site.name)
    }
}

/// Errors from reading or parsing site configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem error, with the offending path.
    Io(String, io::Error),
    Parse(toml::de::Error),
    /// A required field was present but empty.
    EmptyField(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, err) => write!(f, "{path}: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
            ConfigError::EmptyField(field) => write!(f, "config field `{field}` must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::EmptyField(_) => None,
        }
    }
}
