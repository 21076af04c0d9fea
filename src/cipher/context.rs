use crate::alphabet::{alphabet_for, max_level_for, Language, LetterCase, MIN_LEVEL};
use crate::cipher::shift::ShiftStrategy;
use crate::error::{CaesarError, Result};
use tracing::debug;

/// Active alphabet pair and shift strategy for one run.
///
/// Built once from the selected language and passed by reference to every
/// transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformationContext {
    language: Language,
    uppercase: &'static str,
    lowercase: &'static str,
    max_level: u32,
    strategy: ShiftStrategy,
}

impl TransformationContext {
    pub fn new(language: Language) -> Self {
        let uppercase = alphabet_for(language, LetterCase::Upper);
        let lowercase = alphabet_for(language, LetterCase::Lower);
        let strategy = ShiftStrategy::for_alphabets(uppercase, lowercase);
        debug!(language = language.code(), ?strategy, "selected alphabet");

        Self {
            language,
            uppercase,
            lowercase,
            max_level: max_level_for(language),
            strategy,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn uppercase(&self) -> &'static str {
        self.uppercase
    }

    pub fn lowercase(&self) -> &'static str {
        self.lowercase
    }

    pub fn min_level(&self) -> u32 {
        MIN_LEVEL
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn strategy(&self) -> ShiftStrategy {
        self.strategy
    }

    /// Accept `level` only inside `[min_level, max_level]`
    pub fn check_level(&self, level: i64) -> Result<u32> {
        if level >= i64::from(self.min_level()) && level <= i64::from(self.max_level) {
            Ok(level as u32)
        } else {
            Err(CaesarError::LevelOutOfRange {
                level,
                min: self.min_level(),
                max: self.max_level,
            })
        }
    }

    /// Parse a user supplied level and range check it
    pub fn parse_level(&self, value: &str) -> Result<u32> {
        let level: i64 = value
            .trim()
            .parse()
            .map_err(|_| CaesarError::InvalidLevel(value.to_string()))?;
        self.check_level(level)
    }
}

impl Default for TransformationContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Build the context for a language code (`en` or `sp`)
pub fn select_language(code: &str) -> Result<TransformationContext> {
    Ok(TransformationContext::new(code.parse()?))
}
