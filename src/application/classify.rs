use crate::domain::error::MoodError;
use crate::domain::model::Classification;
use crate::domain::traits::SentimentModel;
use tracing::debug;

/// Run the model and read the star rating off its top label.
pub async fn classify(model: &dyn SentimentModel, text: &str) -> Result<Classification, MoodError> {
    let scores = model.classify(text).await?;
    let top = scores
        .into_iter()
        .next()
        .ok_or_else(|| MoodError::Api("model returned no labels".to_string()))?;

    let rating = parse_star_rating(&top.label)?;
    debug!(label = %top.label, score = top.score, "classified");

    Ok(Classification {
        rating,
        raw_label: top.label,
        score: top.score,
    })
}

/// `"4 stars"` -> 4, `"1 star"` -> 1.
pub fn parse_star_rating(label: &str) -> Result<i64, MoodError> {
    let token = label
        .split_whitespace()
        .next()
        .ok_or_else(|| MoodError::Api(format!("malformed label: {:?}", label)))?;

    token
        .parse::<i64>()
        .map_err(|e| MoodError::Api(format!("malformed label {:?}: {}", label, e)))
}
