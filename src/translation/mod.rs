mod client;
mod generator;
mod language;
mod prompt;
mod translator;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiClient};
pub use generator::TextGenerator;
pub use language::{Direction, Language};
pub use translator::{Translator, error_placeholder};
