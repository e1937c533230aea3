use super::predictor::RegressionModel;
use super::smartcore_predictor::SmartCorePredictor;
use crate::config::ArtifactEnvConfig;
use crate::domain::errors::{ArtifactKind, PredictionError};
use crate::domain::ml::feature_registry::FEATURE_COUNT;
use crate::domain::ml::scaler::{FeatureScaler, FeatureTransform};
use crate::infrastructure::artifact_loader::read_json_artifact;
use std::path::Path;
use tracing::{error, info};

/// Path reported for artifacts handed to [`ModelArtifacts::new`] directly.
pub const IN_MEMORY: &str = "<in-memory>";

/// The fitted model and scaler, loaded once at startup.
///
/// Immutable after construction; share it through `Arc` across any number
/// of concurrent readers.
pub struct ModelArtifacts {
    model: Box<dyn RegressionModel>,
    scaler: Box<dyn FeatureTransform>,
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("model", &self.model.name())
            .field("n_features", &self.scaler.n_features())
            .finish()
    }
}

impl ModelArtifacts {
    /// Loads scaler then model from the configured paths.
    pub fn load(config: &ArtifactEnvConfig) -> Result<Self, PredictionError> {
        info!(
            "Loading artifacts: model={:?} ({}), scaler={:?}",
            config.model_path, config.model_kind, config.scaler_path
        );
        let scaler = load_scaler(&config.scaler_path)?;
        let model = SmartCorePredictor::load(&config.model_path, config.model_kind)?;
        Self::assemble(Box::new(model), Box::new(scaler), &config.scaler_path)
    }

    /// Wraps already-built artifacts. The scaler must cover every registry feature.
    pub fn new(
        model: Box<dyn RegressionModel>,
        scaler: Box<dyn FeatureTransform>,
    ) -> Result<Self, PredictionError> {
        Self::assemble(model, scaler, Path::new(IN_MEMORY))
    }

    fn assemble(
        model: Box<dyn RegressionModel>,
        scaler: Box<dyn FeatureTransform>,
        scaler_path: &Path,
    ) -> Result<Self, PredictionError> {
        if scaler.n_features() != FEATURE_COUNT {
            error!("Scaler at {:?} has the wrong width", scaler_path);
            return Err(PredictionError::ArtifactLoad {
                artifact: ArtifactKind::Scaler,
                path: scaler_path.to_path_buf(),
                reason: format!(
                    "scaler expects {} features, pipeline provides {}",
                    scaler.n_features(),
                    FEATURE_COUNT
                ),
            });
        }
        Ok(Self { model, scaler })
    }

    pub fn model(&self) -> &dyn RegressionModel {
        self.model.as_ref()
    }

    pub fn scaler(&self) -> &dyn FeatureTransform {
        self.scaler.as_ref()
    }
}

fn load_scaler(path: &Path) -> Result<FeatureScaler, PredictionError> {
    let scaler: FeatureScaler = read_json_artifact(ArtifactKind::Scaler, path)?;
    scaler.validate().map_err(|reason| {
        error!("Scaler at {:?} rejected: {}", path, reason);
        PredictionError::ArtifactLoad {
            artifact: ArtifactKind::Scaler,
            path: path.to_path_buf(),
            reason,
        }
    })?;
    Ok(scaler)
}
