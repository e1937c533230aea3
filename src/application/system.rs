use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ml::artifacts::ModelArtifacts;
use crate::application::pipeline::PredictionPipeline;
use crate::config::Config;
use crate::domain::errors::PredictionError;
use crate::domain::trading::types::PredictionOutcome;
use crate::interfaces::form::PredictionForm;

/// A running predictor. Only exists once both artifacts have loaded.
pub struct Application {
    pub config: Config,
    pipeline: PredictionPipeline,
}

impl Application {
    pub fn build(config: Config) -> Result<Self, PredictionError> {
        info!("Building pricecast application...");

        let artifacts = Arc::new(ModelArtifacts::load(&config.artifacts)?);
        info!("Artifacts ready: {:?}", artifacts);

        Ok(Self {
            config,
            pipeline: PredictionPipeline::new(artifacts),
        })
    }

    /// Builds from artifacts that are already in memory.
    pub fn with_artifacts(config: Config, artifacts: Arc<ModelArtifacts>) -> Self {
        Self {
            config,
            pipeline: PredictionPipeline::new(artifacts),
        }
    }

    pub fn pipeline(&self) -> &PredictionPipeline {
        &self.pipeline
    }

    /// Handles one form submission. A rejected request leaves no trace for the next one.
    pub fn submit(&self, form: &PredictionForm) -> Result<PredictionOutcome, PredictionError> {
        let result = form.parse().and_then(|input| self.pipeline.predict(&input));
        if let Err(e) = &result {
            warn!("Prediction request rejected: {}", e);
        }
        result
    }
}
