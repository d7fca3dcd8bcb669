//! Languages the assistant can converse in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode};

/// A supported chat language, identified by its ISO 639-1 code.
///
/// English is the pivot: the dialogue itself only ever sees English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Gu,
    Ta,
}

impl Language {
    /// The language every message is translated to before the dialogue runs.
    pub const PIVOT: Language = Language::En;

    /// Every supported language, pivot first.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Mr,
        Language::Gu,
        Language::Ta,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Ta => "ta",
        }
    }

    /// English name for language pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Mr => "Marathi",
            Self::Gu => "Gujarati",
            Self::Ta => "Tamil",
        }
    }

    pub fn is_pivot(&self) -> bool {
        *self == Self::PIVOT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnsupportedLanguage,
                    format!("Unsupported language: {}", s),
                )
                .with_detail("field", "language")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default_pivot() {
        assert_eq!(Language::default(), Language::PIVOT);
        assert!(Language::En.is_pivot());
        assert!(!Language::Hi.is_pivot());
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!(" ta ".parse::<Language>().unwrap(), Language::Ta);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedLanguage);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Gu).unwrap(), "\"gu\"");
    }
}
