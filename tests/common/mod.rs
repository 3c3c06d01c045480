//! Shared fakes for the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use sentimood::domain::error::MoodError;
use sentimood::domain::model::LabelScore;
use sentimood::domain::traits::{LanguageDetector, SentimentModel, Translator};
use sentimood::infrastructure::config::Config;
use sentimood::AppState;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct FakeDetector {
    pub language: Result<String, String>,
}

impl FakeDetector {
    pub fn says(language: &str) -> Self {
        Self {
            language: Ok(language.to_string()),
        }
    }

    pub fn fails(message: &str) -> Self {
        Self {
            language: Err(message.to_string()),
        }
    }
}

impl LanguageDetector for FakeDetector {
    fn detect(&self, _text: &str) -> Result<String, MoodError> {
        self.language.clone().map_err(MoodError::Detection)
    }
}

#[derive(Default)]
pub struct FakeTranslator {
    pub fail_with: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeTranslator {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, MoodError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(MoodError::Api(message.clone())),
            None => Ok(format!("EN: {}", text)),
        }
    }
}

pub struct FakeModel {
    pub labels: Result<Vec<LabelScore>, String>,
    pub calls: AtomicUsize,
}

impl FakeModel {
    pub fn rates(label: &str, score: f64) -> Self {
        Self {
            labels: Ok(vec![LabelScore {
                label: label.to_string(),
                score,
            }]),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            labels: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentModel for FakeModel {
    async fn classify(&self, _text: &str) -> Result<Vec<LabelScore>, MoodError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.labels.clone().map_err(MoodError::Api)
    }

    fn name(&self) -> &str {
        "fake-model"
    }
}

pub fn state(
    detector: FakeDetector,
    translator: Arc<FakeTranslator>,
    model: Arc<FakeModel>,
) -> AppState {
    AppState::new(Arc::new(detector), translator, model, Config::default())
}

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
