//! Error types shared across the crate.
//!
//! Errors come in two tiers. [`ConfigError`] is fatal: it is raised during
//! startup and ends the process with a failure status. [`GenerateError`] is
//! recoverable: it describes a single failed request and is handled by the
//! operation that issued it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration errors raised before the shell starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credential was found in the environment or entered at the prompt.
    #[error(
        "No API key provided.\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or paste the key when prompted."
    )]
    MissingApiKey { env_var: &'static str },

    /// The config file exists but could not be read.
    #[error("Failed to read config file: {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file exists but is not valid TOML for this tool.
    #[error("Failed to parse config file: {}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The home directory could not be determined.
    #[error("Failed to determine home directory")]
    NoHomeDir,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// Reading the credential from the terminal failed.
    #[error("Failed to read input")]
    Input(#[from] io::Error),
}

/// A single failed text-generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request never produced an HTTP response.
    #[error("Failed to connect to API endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status (auth, quota, rate limit, ...).
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered, but not with generated text.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_mentions_env_var() {
        let err = ConfigError::MissingApiKey {
            env_var: "GEMINI_API_KEY",
        };
        assert!(err.to_string().contains("export GEMINI_API_KEY="));
    }

    #[test]
    fn test_status_error_includes_status_and_body() {
        let err = GenerateError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 429: quota exceeded"
        );
    }
}
