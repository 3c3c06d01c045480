use crate::domain::error::MoodError;
use crate::domain::traits::{LanguageDetector, SentimentModel, Translator};
use crate::infrastructure::config::Config;
use crate::infrastructure::detect::LinguaDetector;
use crate::infrastructure::network::google::GoogleTranslator;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::huggingface::HuggingFaceClassifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only collaborators. Built once at startup, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn LanguageDetector>,
    pub translator: Arc<dyn Translator>,
    pub classifier: Arc<dyn SentimentModel>,
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
        classifier: Arc<dyn SentimentModel>,
        config: Config,
    ) -> Self {
        Self {
            detector,
            translator,
            classifier,
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    /// Wire up the default detector, translator and classifier from `config`.
    pub fn from_config(config: Config) -> Result<Self, MoodError> {
        let translator_client = create_client(Duration::from_secs(config.translator.timeout_secs))?;
        let classifier_client = create_client(Duration::from_secs(config.classifier.timeout_secs))?;

        let translator = GoogleTranslator::new(translator_client, config.translator.endpoint.clone());
        let classifier = HuggingFaceClassifier::new(classifier_client, &config.classifier);

        Ok(Self::new(
            Arc::new(LinguaDetector::new()),
            Arc::new(translator),
            Arc::new(classifier),
            config,
        ))
    }
}
