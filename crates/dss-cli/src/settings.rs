//! Persistent CLI settings.
//!
//! Stored as TOML in the platform config directory:
//!
//! ```toml
//! [backend]
//! url = "http://127.0.0.1:8000/api/"
//! timeout_secs = 30
//! ```
//!
//! The backend URL resolves as defaults, then this file, then the
//! `DSS_BACKEND_URL` environment variable, then the `--backend` flag.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dss_client::{BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured backend URL.
pub const BACKEND_URL_ENV: &str = "DSS_BACKEND_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse settings {}", path.display()))
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "DatasetSubmissionStudio", "DSS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Resolve the backend configuration with environment and flag overrides.
    pub fn backend_config(&self, env_url: Option<&str>, flag_url: Option<&str>) -> BackendConfig {
        let url = flag_url
            .or(env_url)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.backend.url);
        BackendConfig::new(url).with_timeout_secs(self.backend.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_beats_file() {
        let settings = Settings {
            backend: BackendSettings {
                url: "http://file/api/".to_string(),
                timeout_secs: 5,
            },
        };
        assert_eq!(settings.backend_config(None, None).base_url, "http://file/api/");
        assert_eq!(
            settings.backend_config(Some("http://env/api/"), None).base_url,
            "http://env/api/"
        );
        let config = settings.backend_config(Some("http://env/api/"), Some("http://flag/api/"));
        assert_eq!(config.base_url, "http://flag/api/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn blank_override_is_ignored() {
        let settings = Settings::default();
        assert_eq!(
            settings.backend_config(Some("  "), None).base_url,
            DEFAULT_BACKEND_URL
        );
    }

    #[test]
    fn partial_file_uses_defaults() {
        let settings: Settings = toml::from_str("[backend]\nurl = \"http://x/api/\"\n").unwrap();
        assert_eq!(settings.backend.timeout_secs, DEFAULT_TIMEOUT_SECS);
        let empty: Settings = toml::from_str("").unwrap();
        assert_eq!(empty, Settings::default());
    }
}
