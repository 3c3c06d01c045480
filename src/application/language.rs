use crate::domain::error::MoodError;
use crate::domain::traits::{LanguageDetector, Translator};
use tracing::{debug, info};

pub const ENGLISH: &str = "en";
pub const AUTO: &str = "auto";

/// Bring `text` into English.
///
/// English input is returned as-is and the translator is never called.
pub async fn normalize(
    detector: &dyn LanguageDetector,
    translator: &dyn Translator,
    text: &str,
) -> Result<String, MoodError> {
    let language = detector.detect(text)?;
    debug!(language = %language, "detected language");

    if language == ENGLISH {
        return Ok(text.to_string());
    }

    info!(language = %language, "translating to English");
    translator.translate(text, AUTO, ENGLISH).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedDetector(Result<&'static str, &'static str>);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Result<String, MoodError> {
            self.0
                .map(str::to_string)
                .map_err(|e| MoodError::Detection(e.to_string()))
        }
    }

    #[derive(Default)]
    struct CountingTranslator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, MoodError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("[{}->{}] {}", source, target, text))
        }
    }

    #[tokio::test]
    async fn test_english_passes_through() {
        let translator = CountingTranslator::default();
        let text = "  This is already English  ";
        let out = normalize(&FixedDetector(Ok("en")), &translator, text)
            .await
            .unwrap();
        assert_eq!(out, text);
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_other_languages_are_translated_from_auto() {
        let translator = CountingTranslator::default();
        let out = normalize(&FixedDetector(Ok("fr")), &translator, "C'est très bien")
            .await
            .unwrap();
        assert_eq!(out, "[auto->en] C'est très bien");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_detection_failure_skips_translation() {
        let translator = CountingTranslator::default();
        let err = normalize(&FixedDetector(Err("No features in text")), &translator, "???")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No features in text");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }
}
