//! Credential acquisition and the optional configuration file.

mod credential;
mod manager;

pub use credential::{API_KEY_ENV, ApiKey, acquire_api_key, api_key_from};
pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_OUTPUT, NaijaConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
