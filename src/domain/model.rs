use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
///
/// `text` stays optional so a missing field is reported as such instead of
/// surfacing as a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// 粗粒度情绪标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Angry,
    Sad,
    Normal,
    Happy,
}

impl Sentiment {
    /// Map a star rating to a mood. Total: anything that is not 1, 2 or 3 is happy.
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            1 => Sentiment::Angry,
            2 => Sentiment::Sad,
            3 => Sentiment::Normal,
            _ => Sentiment::Happy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Angry => "angry",
            Sentiment::Sad => "sad",
            Sentiment::Normal => "normal",
            Sentiment::Happy => "happy",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// 模型返回的单个标签
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

// 分类结果
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub rating: i64,
    pub raw_label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub original_text: String,
    pub translated_text: String,
    pub sentiment: Sentiment,
    pub rating: i64,
    pub raw_label: String,
    pub score: f64,
}

impl PredictionResult {
    pub fn new(original_text: String, translated_text: String, classification: Classification) -> Self {
        Self {
            original_text,
            translated_text,
            sentiment: Sentiment::from_rating(classification.rating),
            rating: classification.rating,
            raw_label: classification.raw_label,
            score: classification.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub started_at: String,
    pub classifier_model: String,
}
