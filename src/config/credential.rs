use std::fmt;

use crate::error::ConfigError;
use crate::input::Prompter;
use crate::ui::Style;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// A non-empty API key. Never printed by `Debug`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps `key`, rejecting empty or whitespace-only values.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey {
                env_var: API_KEY_ENV,
            });
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Reads the API key from [`API_KEY_ENV`], or asks for it.
///
/// Returns `Ok(None)` when the user interrupts the prompt.
pub fn acquire_api_key<P: Prompter>(prompter: &mut P) -> Result<Option<ApiKey>, ConfigError> {
    api_key_from(std::env::var(API_KEY_ENV).ok(), prompter)
}

/// Uses `env_value` when it is non-empty; otherwise prompts once.
///
/// The prompted key is held in memory only.
pub fn api_key_from<P: Prompter>(
    env_value: Option<String>,
    prompter: &mut P,
) -> Result<Option<ApiKey>, ConfigError> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        println!("{} API key loaded from environment", Style::success("✓"));
        return ApiKey::new(key).map(Some);
    }

    println!();
    println!("{}", Style::header("Gemini API Key Required"));
    println!("Paste your Google Gemini API key below");
    println!(
        "{}",
        Style::hint(format!(
            "(Key will not be saved - set {API_KEY_ENV} for persistence)"
        ))
    );
    println!();

    match prompter.read_line("API Key:")? {
        Some(entered) => ApiKey::new(entered).map(Some),
        None => Ok(None),
    }
}
