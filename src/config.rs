//! Application Configuration
//!
//! Optional JSON settings embedded in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "log_level": "debug", "progress": { "thresholds": { "high": 80 } } }
//! </script>
//! ```
//!
//! Every field has a default, so a missing element or a partial object is fine.

use std::str::FromStr;

use checklist_core::{ConfigError, ProgressConfig};
use log::LevelFilter;
use serde::Deserialize;

/// Id of the `<script>` element holding the JSON config
const CONFIG_ELEMENT_ID: &str = "app-config";

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// `log` level name: off, error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Progress bar thresholds and colors
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            progress: ProgressConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config. Blank text yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        self.progress.validate()
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| ConfigError::InvalidValue {
            field: "log_level".to_string(),
            reason: format!("unknown level '{}'", self.log_level),
        })
    }
}

/// Read the config block from the current document
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(text) => AppConfig::from_json(&text),
        None => Ok(AppConfig::default()),
    }
}
