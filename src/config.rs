//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/pmcli/config.toml` (XDG standard).

use std::fs;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global pmcli configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Default output format ("human" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl GlobalConfig {
    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        let path = paths::config_file();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = paths::config_dir();
        fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(paths::config_file(), content)?;
        Ok(())
    }
}
