use crate::application::classify::classify;
use crate::application::language::normalize;
use crate::application::validation::is_valid;
use crate::domain::error::ApiError;
use crate::domain::model::{PredictRequest, PredictionResult};
use crate::state::AppState;
use tracing::{info, warn};

pub async fn predict(state: &AppState, request: PredictRequest) -> Result<PredictionResult, ApiError> {
    // 1. Input checks, before anything leaves the process
    let original_text = request.text.ok_or(ApiError::NoText)?;

    if original_text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    if !is_valid(&original_text) {
        return Err(ApiError::NotASentence);
    }

    // 2. Detect + translate
    let translated_text = normalize(
        state.detector.as_ref(),
        state.translator.as_ref(),
        &original_text,
    )
    .await
    .map_err(|e| {
        warn!(error = %e, "translation step failed");
        ApiError::Translation(e)
    })?;

    // 3. Classify
    let classification = classify(state.classifier.as_ref(), &translated_text)
        .await
        .map_err(|e| {
            warn!(error = %e, "classification step failed");
            ApiError::Prediction(e)
        })?;

    let result = PredictionResult::new(original_text, translated_text, classification);
    info!(
        sentiment = %result.sentiment,
        rating = result.rating,
        score = result.score,
        "prediction done"
    );

    Ok(result)
}
