//! Optional `configurator.toml` with defaults for the estimate command.
//!
//! ```toml
//! default_country = "BE"
//! default_region = "Flanders"
//! include_installation = false
//! format = "json"
//! ```
//!
//! Command-line flags always win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use configurator_core::Country;
use serde::Deserialize;

/// File looked up in the working directory when `--settings` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "configurator.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_country: Option<String>,
    pub default_region: Option<String>,
    pub include_installation: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Load from an explicit path, or from `configurator.toml` when present.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file just gives empty settings.
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !fallback.exists() {
                    return Ok(Settings::default());
                }
                fallback
            }
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Settings::parse(&contents)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<Settings> {
        Ok(toml::from_str(contents)?)
    }

    /// `flag` if given, else the configured default, else NL.
    pub fn country(&self, flag: Option<&str>) -> Result<Country> {
        match flag.or(self.default_country.as_deref()) {
            Some(code) => Ok(code.parse::<Country>()?),
            None => Ok(Country::default()),
        }
    }
}
