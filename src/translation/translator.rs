use super::generator::TextGenerator;
use super::language::{Direction, Language};
use super::prompt::{DETECT_TEMPLATE, TO_ENGLISH_TEMPLATE, TO_PIDGIN_TEMPLATE, build_prompt};
use crate::error::GenerateError;

/// English <-> Nigerian Pidgin translator over a [`TextGenerator`].
pub struct Translator<G> {
    generator: G,
}

impl<G: TextGenerator> Translator<G> {
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Translates `text`, returning the failure as a value.
    ///
    /// Blank input yields an empty string without calling the generator.
    pub async fn try_translate(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<String, GenerateError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let template = match direction {
            Direction::ToPidgin => TO_PIDGIN_TEMPLATE,
            Direction::ToEnglish => TO_ENGLISH_TEMPLATE,
        };

        let reply = self.generator.generate(&build_prompt(template, text)).await?;
        Ok(strip_quotes(reply.trim()).to_string())
    }

    /// Translates `text`, encoding a failure as `[ERROR: <message>]`.
    pub async fn translate(&self, text: &str, direction: Direction) -> String {
        match self.try_translate(text, direction).await {
            Ok(translation) => translation,
            Err(e) => {
                tracing::warn!(error = %e, "translation request failed");
                error_placeholder(&e)
            }
        }
    }

    pub async fn translate_to_pidgin(&self, text: &str) -> String {
        self.translate(text, Direction::ToPidgin).await
    }

    pub async fn translate_to_english(&self, text: &str) -> String {
        self.translate(text, Direction::ToEnglish).await
    }

    /// Asks the model whether `text` is Pidgin, English or a mix.
    ///
    /// Any failure yields [`Language::Unknown`].
    pub async fn detect_language(&self, text: &str) -> Language {
        match self.generator.generate(&build_prompt(DETECT_TEMPLATE, text)).await {
            Ok(reply) => Language::classify(&reply),
            Err(e) => {
                tracing::warn!(error = %e, "language detection failed");
                Language::Unknown
            }
        }
    }
}

/// The placeholder written in place of a failed translation.
pub fn error_placeholder(err: &GenerateError) -> String {
    format!("[ERROR: {err}]")
}

/// Removes one layer of enclosing double quotes.
///
/// A reply that is only `"` becomes empty.
fn strip_quotes(text: &str) -> &str {
    if text.starts_with('"') && text.ends_with('"') {
        text.get(1..text.len() - 1).unwrap_or_default()
    } else {
        text
    }
}
