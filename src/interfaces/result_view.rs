//! Plain-text rendering of the result card shown after a prediction.

use crate::domain::errors::PredictionError;
use crate::domain::trading::types::{Direction, PredictionOutcome};

pub const CAPTION: &str = "Predicted Close Price for Apple Inc. (AAPL)";
pub const SUCCESS_MESSAGE: &str = "Successfully Completed Prediction Close Price";

pub fn status_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Gain => "📈 PROFIT",
        Direction::Loss => "📉 LOSS",
    }
}

pub fn render_outcome(outcome: &PredictionOutcome) -> String {
    format!(
        "{}\n{}\n{}\n✅ {}",
        status_label(outcome.direction),
        outcome.formatted,
        CAPTION,
        SUCCESS_MESSAGE
    )
}

pub fn render_error(error: &PredictionError) -> String {
    match error {
        PredictionError::ArtifactLoad { .. } => format!("Error loading model files: {}", error),
        _ => format!("❌ {}", error),
    }
}
