use crate::domain::error::MoodError;
use crate::domain::model::LabelScore;
use crate::domain::traits::SentimentModel;
use crate::infrastructure::config::ClassifierConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_MODEL: &str = "nlptown/bert-base-multilingual-uncased-sentiment";

// Inference API response shapes. Text classification usually comes back
// nested one level per input; some deployments return the flat list.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Error { error: String },
}

/// Star-rating sentiment model served by the Hugging Face Inference API
pub struct HuggingFaceClassifier {
    client: Client,
    url: String,
    model: String,
    api_token: Option<String>,
}

impl HuggingFaceClassifier {
    pub fn new(client: Client, config: &ClassifierConfig) -> Self {
        let url = format!("{}/{}", config.endpoint.trim_end_matches('/'), config.model);
        Self {
            client,
            url,
            model: config.model.clone(),
            api_token: config.api_token.clone().filter(|t| !t.is_empty()),
        }
    }
}

#[async_trait]
impl SentimentModel for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, MoodError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "inputs": text }));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<InferenceResponse>(&body);
        if !status.is_success() {
            return Err(match parsed {
                Ok(InferenceResponse::Error { error }) => {
                    MoodError::Api(format!("{} (HTTP {})", error, status))
                }
                _ => MoodError::Api(format!("Model endpoint returned HTTP {}", status)),
            });
        }

        let mut scores = match parsed? {
            InferenceResponse::Nested(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            InferenceResponse::Flat(scores) => scores,
            InferenceResponse::Error { error } => return Err(MoodError::Api(error)),
        };

        sort_by_score(&mut scores);
        debug!(labels = scores.len(), model = %self.model, "model responded");

        Ok(scores)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn sort_by_score(scores: &mut [LabelScore]) {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
}
