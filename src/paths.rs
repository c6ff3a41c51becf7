//! Centralized path definitions for pmcli
//!
//! Single source of truth for the filesystem locations pmcli touches.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/pmcli/
//! ├── config.toml               # User preferences
//! └── token                     # Bearer token slot (single line)
//! ```
//!
//! The config directory can be redirected with the `PMCLI_CONFIG_DIR`
//! environment variable, which tests rely on to stay out of the real home.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PMCLI_CONFIG_DIR";

/// Get the pmcli config directory (`~/.config/pmcli` by default)
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("pmcli")
}

/// Get the global config file path
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the bearer token slot path
#[must_use]
pub fn token_file() -> PathBuf {
    config_dir().join("token")
}
