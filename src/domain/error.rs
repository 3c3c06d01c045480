use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("{0}")]
    Detection(String),
}

/// Failures of a single `/predict` request, in the order they are checked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("No text provided")]
    NoText,

    #[error("Text is empty")]
    EmptyText,

    #[error("Please enter a meaningful sentence in English or any natural language.")]
    NotASentence,

    #[error("Translation failed: {0}")]
    Translation(MoodError),

    #[error("Prediction failed: {0}")]
    Prediction(MoodError),
}

impl ApiError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidBody(_) | ApiError::NoText | ApiError::EmptyText | ApiError::NotASentence
        )
    }
}
