//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding the configured backend origin.
pub const BASE_URL_ENV: &str = "SHOWTIME_API_URL";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, e.g. `http://localhost:8000/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Picks the backend origin: `flag`, then `env`, then the config file.
    ///
    /// Returns `None` when none is set, leaving the client default in place.
    /// Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the winning value is not a valid URL.
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<&str>) -> Result<Option<Url>> {
        let candidates = [
            ("--base-url", flag),
            (BASE_URL_ENV, env),
            ("config api.base_url", self.api.base_url.as_deref()),
        ];
        let Some((source, raw)) = candidates
            .into_iter()
            .find_map(|(source, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (source, v)))
        else {
            return Ok(None);
        };

        let url = Url::parse(raw.trim())
            .with_context(|| format!("invalid base URL from {source}: {raw}"))?;
        tracing::debug!(%url, source, "resolved backend base URL");
        Ok(Some(url))
    }
}
