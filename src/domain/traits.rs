use crate::domain::error::MoodError;
use crate::domain::model::LabelScore;
use async_trait::async_trait;

/// Trait for language detection
///
/// Returns an ISO-639-ish code such as `"en"` or `"fr"`.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, MoodError>;
}

/// Trait for translation services
///
/// Implementations can be swapped without changing the calling code.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, MoodError>;
}

/// Trait for the sentiment model
///
/// Returns label/score pairs, best first. Labels look like `"4 stars"`.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, MoodError>;

    /// Identifier shown on the health endpoint.
    fn name(&self) -> &str;
}
