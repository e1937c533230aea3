use crate::application::ml::artifacts::ModelArtifacts;
use crate::domain::currency::{INR_PER_USD, denormalize};
use crate::domain::errors::PredictionError;
use crate::domain::formatting::format_currency;
use crate::domain::ml::feature_registry::features_to_vector;
use crate::domain::trading::types::{Direction, PredictionOutcome, RawInput};
use crate::domain::validation::input_validation::InputValidator;
use std::sync::Arc;
use tracing::{debug, info};

/// Validate -> normalize -> scale -> infer -> classify -> format.
///
/// Stateless apart from the shared artifacts; one call per user action.
pub struct PredictionPipeline {
    artifacts: Arc<ModelArtifacts>,
}

impl PredictionPipeline {
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn artifacts(&self) -> &Arc<ModelArtifacts> {
        &self.artifacts
    }

    pub fn predict_values(
        &self,
        open: f64,
        high: f64,
        low: f64,
        volume: f64,
    ) -> Result<PredictionOutcome, PredictionError> {
        self.predict(&RawInput::new(open, high, low, volume))
    }

    pub fn predict(&self, input: &RawInput) -> Result<PredictionOutcome, PredictionError> {
        let validated = InputValidator::validate(input)?;

        let features = validated.normalize(INR_PER_USD);
        let vector = features_to_vector(&features);
        let scaled = self.artifacts.scaler().transform(&vector);
        debug!("Scaled features: {:?}", scaled);

        let prediction = self
            .artifacts
            .model()
            .predict(&scaled)
            .map_err(|reason| PredictionError::Inference { reason })?;
        if !prediction.is_finite() {
            return Err(PredictionError::Inference {
                reason: format!("model returned non-finite value {}", prediction),
            });
        }

        let direction = Direction::classify(prediction, features.open);
        let display_prediction = denormalize(prediction, INR_PER_USD);
        let formatted =
            format_currency(display_prediction).map_err(|e| PredictionError::Inference {
                reason: e.to_string(),
            })?;

        info!(
            "Prediction: open={:.4} close={:.4} ({}) -> {}",
            features.open, prediction, direction, formatted
        );

        Ok(PredictionOutcome {
            normalized_open: features.open,
            prediction,
            display_prediction,
            direction,
            formatted,
        })
    }
}
