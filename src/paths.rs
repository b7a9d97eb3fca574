//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations.

use std::path::PathBuf;

use crate::error::ConfigError;

const APP_DIR: &str = "naija";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/naija` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/naija` otherwise
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => dirs::home_dir()
            .map(|home| home.join(".config").join(APP_DIR))
            .ok_or(ConfigError::NoHomeDir),
    }
}
