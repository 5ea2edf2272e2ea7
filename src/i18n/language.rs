// src/i18n/language.rs
use super::TranslationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two page languages. German is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Position of this language's button among the `.nav-lang-btn` controls.
    pub fn nav_index(self) -> usize {
        match self {
            Language::De => 0,
            Language::En => 1,
        }
    }

    /// Startup restore rule: only an explicit `en` switches away from German.
    pub fn from_preference(saved: Option<&str>) -> Language {
        match saved {
            Some("en") => Language::En,
            _ => Language::De,
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }
}

impl FromStr for Language {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(TranslationError::InvalidLanguage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
