//! Translation directions and language classification.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// Which way a piece of text is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// English to Nigerian Pidgin.
    ToPidgin,
    /// Nigerian Pidgin to English.
    ToEnglish,
}

impl Direction {
    /// Name of the language this direction produces.
    pub const fn target_name(self) -> &'static str {
        match self {
            Self::ToPidgin => "Pidgin",
            Self::ToEnglish => "English",
        }
    }

    /// Name of the language this direction consumes.
    pub const fn source_name(self) -> &'static str {
        match self {
            Self::ToPidgin => "English",
            Self::ToEnglish => "Pidgin",
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    /// Parses the batch-mode tokens `pidgin` and `english` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pidgin" => Ok(Self::ToPidgin),
            "english" => Ok(Self::ToEnglish),
            _ => anyhow::bail!("Invalid mode. Use 'pidgin' or 'english'"),
        }
    }
}

/// Result of language detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pidgin,
    English,
    Mixed,
    Unknown,
}

impl Language {
    /// Classifies a free-form model reply.
    ///
    /// Keywords are checked case-insensitively in a fixed order (pidgin,
    /// english, mixed); the first one present wins.
    pub fn classify(reply: &str) -> Self {
        let reply = reply.trim().to_lowercase();

        [Self::Pidgin, Self::English, Self::Mixed]
            .into_iter()
            .find(|lang| reply.contains(lang.as_str()))
            .unwrap_or(Self::Unknown)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pidgin => "pidgin",
            Self::English => "english",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }

    /// The translation to perform for text detected as this language, if unambiguous.
    pub const fn translate_direction(self) -> Option<Direction> {
        match self {
            Self::English => Some(Direction::ToPidgin),
            Self::Pidgin => Some(Direction::ToEnglish),
            Self::Mixed | Self::Unknown => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("pidgin".parse::<Direction>().ok(), Some(Direction::ToPidgin));
        assert_eq!(
            " English ".parse::<Direction>().ok(),
            Some(Direction::ToEnglish)
        );
        assert!("yoruba".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_classify_single_keyword() {
        assert_eq!(Language::classify("pidgin"), Language::Pidgin);
        assert_eq!(Language::classify("  English\n"), Language::English);
        assert_eq!(Language::classify("MIXED"), Language::Mixed);
    }

    #[test]
    fn test_classify_priority_order() {
        // Both keywords present: pidgin is checked first
        assert_eq!(
            Language::classify("It's English with some Pidgin"),
            Language::Pidgin
        );
        assert_eq!(Language::classify("mixed english"), Language::English);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Language::classify("French"), Language::Unknown);
        assert_eq!(Language::classify(""), Language::Unknown);
    }

    #[test]
    fn test_translate_direction() {
        assert_eq!(
            Language::English.translate_direction(),
            Some(Direction::ToPidgin)
        );
        assert_eq!(
            Language::Pidgin.translate_direction(),
            Some(Direction::ToEnglish)
        );
        assert_eq!(Language::Mixed.translate_direction(), None);
        assert_eq!(Language::Unknown.translate_direction(), None);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Language::Pidgin.to_string(), "pidgin");
        assert_eq!(Language::Unknown.to_string(), "unknown");
    }
}
