use crate::error::{CaesarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest level accepted for a specific transformation
pub const MIN_LEVEL: u32 = 1;

const ENGLISH_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ENGLISH_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const SPANISH_UPPERCASE: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";
const SPANISH_LOWERCASE: &str = "abcdefghijklmnñopqrstuvwxyz";

/// Built-in alphabet sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// 26 letters, every one a single byte
    #[default]
    #[serde(rename = "en")]
    English,
    /// 27 letters, `Ñ`/`ñ` after `N`/`n`
    #[serde(rename = "sp")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Short code used on the command line
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "sp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Spanish => write!(f, "Spanish"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = CaesarError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "sp" => Ok(Self::Spanish),
            _ => Err(CaesarError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Letter case of an alphabet variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

/// Ordered characters of one case of one language
pub fn alphabet_for(language: Language, case: LetterCase) -> &'static str {
    match (language, case) {
        (Language::English, LetterCase::Upper) => ENGLISH_UPPERCASE,
        (Language::English, LetterCase::Lower) => ENGLISH_LOWERCASE,
        (Language::Spanish, LetterCase::Upper) => SPANISH_UPPERCASE,
        (Language::Spanish, LetterCase::Lower) => SPANISH_LOWERCASE,
    }
}

/// Highest admissible level, equal to the alphabet length
pub fn max_level_for(language: Language) -> u32 {
    match language {
        Language::English => 26,
        Language::Spanish => 27,
    }
}
