use std::future::Future;

use crate::error::GenerateError;

/// A remote capability that turns a prompt into generated text.
///
/// [`GeminiClient`](super::GeminiClient) is the production implementation;
/// tests substitute their own.
pub trait TextGenerator {
    /// Sends `prompt` and returns the generated text.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerateError>>;
}
