use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Default settings in the `[naija]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NaijaConfig {
    /// Gemini model identifier.
    pub model: Option<String>,
    /// OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Default batch output path.
    pub output: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/naija/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub naija: NaijaConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Settings after merging CLI options, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub model: String,
    pub endpoint: String,
    pub default_output: PathBuf,
}

/// Resolves configuration: CLI options, then config file, then built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let file = &config_file.naija;

    let model = options
        .model
        .clone()
        .or_else(|| file.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| file.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let default_output = file
        .output
        .as_deref()
        .filter(|o| !o.trim().is_empty())
        .unwrap_or(DEFAULT_OUTPUT);

    ResolvedConfig {
        model,
        endpoint,
        default_output: PathBuf::from(default_output),
    }
}

/// Loads the optional configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `config.toml` in [`paths::config_dir`].
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Loads `config.toml` from the default location.
    ///
    /// When no config directory can be determined there is no file to read, so
    /// the defaults are used.
    pub fn load_default() -> Result<ConfigFile, ConfigError> {
        Self::load_or_default(Self::new())
    }

    fn load_or_default(manager: Result<Self, ConfigError>) -> Result<ConfigFile, ConfigError> {
        match manager {
            Ok(manager) => manager.load(),
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                Ok(ConfigFile::default())
            }
        }
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file; a missing file yields the defaults.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.config_path.display(),
                    "no config file, using defaults"
                );
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadConfig {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::ParseConfig {
            path: self.config_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::write(
            manager.config_path(),
            "[naija]\nmodel = \"gemini-2.5-flash\"\noutput = \"pidgin.txt\"\n",
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.naija.model, Some("gemini-2.5-flash".to_string()));
        assert_eq!(loaded.naija.endpoint, None);
        assert_eq!(loaded.naija.output, Some("pidgin.txt".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert_eq!(manager.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_empty_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "").unwrap();

        assert_eq!(manager.load().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[naija\nmodel = ").unwrap();

        let result = manager.load();
        assert!(matches!(result, Err(ConfigError::ParseConfig { .. })));
    }

    #[test]
    fn test_missing_config_dir_falls_back_to_defaults() {
        let loaded = ConfigManager::load_or_default(Err(ConfigError::NoHomeDir)).unwrap();
        assert_eq!(loaded, ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_still_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "model = [").unwrap();

        let result = ConfigManager::load_or_default(Ok(manager));
        assert!(matches!(result, Err(ConfigError::ParseConfig { .. })));
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.default_output, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_resolve_config_blank_output_falls_back() {
        let config = ConfigFile {
            naija: NaijaConfig {
                output: Some("  ".to_string()),
                ..NaijaConfig::default()
            },
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config);
        assert_eq!(resolved.default_output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
