use crate::controls::{default_presets, ControlDefaults, Preset, SLIDER_MAX};
use crate::error::{Result, SimplifierError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifierConfig {
    pub client: ClientConfig,
    pub debounce: DebounceConfig,
    pub defaults: ControlDefaults,
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoint_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub delay_ms: u64,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            debounce: DebounceConfig::default(),
            defaults: ControlDefaults::default(),
            presets: default_presets(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".into(),
            endpoint_path: "/api/simplify".into(),
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 650 }
    }
}

impl ClientConfig {
    /// Full URL of the simplify endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl SimplifierConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SimplifierError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), presets = config.presets.len(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.client.base_url.trim();
        if base.is_empty() {
            return Err(SimplifierError::Config("client.base_url is empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SimplifierError::Config(format!(
                "client.base_url must be an http(s) URL, got {base}"
            )));
        }
        if self.debounce.delay_ms == 0 {
            return Err(SimplifierError::Config("debounce.delay_ms must be positive".into()));
        }
        if self.defaults.ratio > SLIDER_MAX {
            return Err(SimplifierError::Config(format!(
                "defaults.ratio {} exceeds {SLIDER_MAX}",
                self.defaults.ratio
            )));
        }
        if self.defaults.threshold > SLIDER_MAX {
            return Err(SimplifierError::Config(format!(
                "defaults.threshold {} exceeds {SLIDER_MAX}",
                self.defaults.threshold
            )));
        }
        if let Some(p) = self.presets.iter().find(|p| p.ratio > SLIDER_MAX) {
            return Err(SimplifierError::Config(format!(
                "preset {} has ratio {} above {SLIDER_MAX}",
                p.label, p.ratio
            )));
        }
        Ok(())
    }

    /// Index of the preset whose label matches `name`, ignoring case.
    pub fn preset_index(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.label.eq_ignore_ascii_case(name))
    }
}
