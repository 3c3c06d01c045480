use crate::domain::error::MoodError;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate through the public `gtx` web endpoint
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, MoodError> {
        let params = [
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.endpoint).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoodError::Api(format!("Translator returned HTTP {}", status)));
        }

        let body = response.json::<Value>().await?;
        let translated = parse_translation(&body)?;
        debug!(chars = translated.chars().count(), "translation received");

        Ok(translated)
    }
}

// Response layout: [[["<translated>", "<original>", ...], ...], null, "<detected>", ...]
// Long input comes back split into several sentence segments.
fn parse_translation(body: &Value) -> Result<String, MoodError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| MoodError::Api("Unexpected translator response".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(MoodError::Api("Translator returned no text".to_string()));
    }

    Ok(translated)
}
