//! Language eligibility: only English text, or requests targeting English,
//! may be summarized.

use tracing::{debug, warn};
use whatlang::Lang;

use crate::core::config::DEFAULT_MIN_DETECT_CHARS;
use crate::core::models::TargetLanguage;
use crate::errors::LanguageError;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDecision {
    pub detected: Lang,
    pub target: TargetLanguage,
    pub allowed: bool,
}

impl LanguageDecision {
    /// ISO 639-3 code of the detected language.
    #[must_use]
    pub fn detected_code(&self) -> &'static str {
        self.detected.code()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageGate {
    min_detect_chars: usize,
}

impl Default for LanguageGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DETECT_CHARS)
    }
}

impl LanguageGate {
    /// `min_detect_chars` counts non-whitespace characters; anything shorter
    /// is refused instead of guessed at.
    #[must_use]
    pub fn new(min_detect_chars: usize) -> Self {
        Self { min_detect_chars }
    }

    /// # Errors
    ///
    /// Returns an error if the text is below the minimum length or the
    /// detector cannot classify it.
    pub fn detect(&self, text: &str) -> Result<Lang, LanguageError> {
        let chars = text.chars().filter(|c| !c.is_whitespace()).count();
        if chars < self.min_detect_chars {
            return Err(LanguageError::TooShort {
                chars,
                min: self.min_detect_chars,
            });
        }

        let info = whatlang::detect(text).ok_or(LanguageError::Undetectable)?;
        if !info.is_reliable() {
            warn!(
                lang = info.lang().code(),
                confidence = info.confidence(),
                "Low-confidence language detection"
            );
        }
        Ok(info.lang())
    }

    /// Detects the language of `text` and applies the English-only policy.
    ///
    /// # Errors
    ///
    /// Detection failures are returned as-is; they never default to allowed.
    pub fn decide(
        &self,
        text: &str,
        target: &TargetLanguage,
    ) -> Result<LanguageDecision, LanguageError> {
        let detected = self.detect(text)?;
        let allowed = target.is_default() || detected == Lang::Eng;
        debug!(
            detected = detected.code(),
            target = %target,
            allowed,
            "Language gate decision"
        );

        Ok(LanguageDecision {
            detected,
            target: target.clone(),
            allowed,
        })
    }
}
