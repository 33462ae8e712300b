//! Embedding gateway settings.
//!
//! Loads an optional YAML file and overlays environment variables on top
//! (env wins). The resolved object is passed explicitly into the client
//! constructor; nothing here is process-global.

use std::path::Path;

use serde::Deserialize;

use crate::error::EmbedError;

const ENV_URL: &str = "TEAMMATCH_EMBED_URL";
const ENV_API_KEY: &str = "TEAMMATCH_EMBED_API_KEY";
const ENV_MODEL: &str = "TEAMMATCH_EMBED_MODEL";
const ENV_TIMEOUT_SECS: &str = "TEAMMATCH_EMBED_TIMEOUT_SECS";

/// Resolved embedding gateway settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedSettings {
    /// Base URL of the embedding service.
    pub base_url: Option<String>,
    /// Bearer credential for the service.
    pub api_key: Option<String>,
    /// Optional model hint forwarded with every batch.
    pub model: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl EmbedSettings {
    /// Resolve settings from the environment only.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// Resolve settings from a YAML file with environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::Settings`] when the file cannot be read or
    /// parsed. A missing value is not an error here; the client constructor
    /// decides what is mandatory.
    pub fn load(path: &Path) -> Result<Self, EmbedError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EmbedError::Settings(format!("{}: {e}", path.display())))?;
        let file: Self = serde_yaml::from_str(&raw)
            .map_err(|e| EmbedError::Settings(format!("{}: {e}", path.display())))?;
        Ok(file.overlay_env())
    }

    fn overlay_env(mut self) -> Self {
        if let Some(url) = env_value(ENV_URL) {
            self.base_url = Some(url);
        }
        if let Some(key) = env_value(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(model) = env_value(ENV_MODEL) {
            self.model = Some(model);
        }
        if let Some(timeout) = env_value(ENV_TIMEOUT_SECS).and_then(|v| v.parse().ok()) {
            self.timeout_secs = Some(timeout);
        }
        self
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
