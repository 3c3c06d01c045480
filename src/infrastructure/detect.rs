// Offline language detection
use crate::domain::error::MoodError;
use crate::domain::traits::LanguageDetector;
use lingua::LanguageDetectorBuilder;
use tracing::trace;

/// n-gram detector backed by `lingua`, accurate on short sentences.
///
/// Every language lingua knows has an ISO 639-1 code, so the result is
/// always two letters. Models load lazily on the first call and stay
/// resident for the life of the process.
pub struct LinguaDetector {
    inner: lingua::LanguageDetector,
}

impl LinguaDetector {
    pub fn new() -> Self {
        Self {
            inner: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for LinguaDetector {
    fn detect(&self, text: &str) -> Result<String, MoodError> {
        let language = self
            .inner
            .detect_language_of(text)
            .ok_or_else(|| MoodError::Detection("No features in text".to_string()))?;

        let code = language.iso_code_639_1().to_string();
        trace!(language = ?language, code = %code, "lingua result");

        Ok(code)
    }
}
