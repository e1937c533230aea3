use super::predictor::RegressionModel;
use crate::domain::errors::{ArtifactKind, PredictionError};
use crate::domain::ml::feature_registry::FEATURE_COUNT;
use crate::domain::ml::model_kind::ModelKind;
use crate::infrastructure::artifact_loader::read_json_artifact;
use serde_json::Value;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::path::Path;
use tracing::{error, info};

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type LinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

enum SmartCoreModel {
    RandomForest(ForestModel),
    Linear(LinearModel),
}

/// Regression model backed by a smartcore estimator deserialized from JSON.
pub struct SmartCorePredictor {
    model: SmartCoreModel,
}

impl SmartCorePredictor {
    /// Loads the estimator at `path`. A missing or malformed file is fatal,
    /// and so is an estimator fitted on a different number of features.
    pub fn load(path: &Path, kind: ModelKind) -> Result<Self, PredictionError> {
        let model = match kind {
            ModelKind::RandomForest => {
                SmartCoreModel::RandomForest(read_json_artifact(ArtifactKind::Model, path)?)
            }
            ModelKind::Linear => {
                SmartCoreModel::Linear(read_json_artifact(ArtifactKind::Model, path)?)
            }
        };
        let predictor = Self { model };
        predictor.check_width(FEATURE_COUNT).map_err(|reason| {
            error!("Model at {:?} rejected: {}", path, reason);
            PredictionError::ArtifactLoad {
                artifact: ArtifactKind::Model,
                path: path.to_path_buf(),
                reason,
            }
        })?;
        info!("Model ready: {} {}", predictor.name(), predictor.version());
        Ok(predictor)
    }

    /// Verifies the estimator only reads columns the pipeline provides.
    ///
    /// Linear models store one coefficient per feature. Forests keep their
    /// split columns private, so they are read back from the serialized trees.
    pub fn check_width(&self, n_features: usize) -> Result<(), String> {
        match &self.model {
            SmartCoreModel::Linear(model) => {
                let (fitted, _) = model.coefficients().shape();
                if fitted != n_features {
                    return Err(format!(
                        "model fitted on {} features, pipeline provides {}",
                        fitted, n_features
                    ));
                }
            }
            SmartCoreModel::RandomForest(model) => {
                let tree = serde_json::to_value(model)
                    .map_err(|e| format!("cannot inspect forest: {}", e))?;
                if let Some(max_feature) = max_split_feature(&tree) {
                    if max_feature >= n_features {
                        return Err(format!(
                            "forest splits on feature index {}, pipeline provides {} features",
                            max_feature, n_features
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn from_random_forest(model: ForestModel) -> Self {
        Self {
            model: SmartCoreModel::RandomForest(model),
        }
    }

    pub fn from_linear(model: LinearModel) -> Self {
        Self {
            model: SmartCoreModel::Linear(model),
        }
    }
}

/// Largest `split_feature` over internal nodes. Leaves carry no split value.
fn max_split_feature(value: &Value) -> Option<usize> {
    match value {
        Value::Object(map) => {
            let own = match (map.get("split_feature"), map.get("split_value")) {
                (Some(Value::Number(feature)), Some(split)) if !split.is_null() => {
                    feature.as_u64().map(|f| f as usize)
                }
                _ => None,
            };
            map.values().filter_map(max_split_feature).chain(own).max()
        }
        Value::Array(items) => items.iter().filter_map(max_split_feature).max(),
        _ => None,
    }
}

impl RegressionModel for SmartCorePredictor {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = match &self.model {
            SmartCoreModel::RandomForest(model) => model.predict(&input_matrix),
            SmartCoreModel::Linear(model) => model.predict(&input_matrix),
        }
        .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        match self.model {
            SmartCoreModel::RandomForest(_) => "SmartCore Random Forest",
            SmartCoreModel::Linear(_) => "SmartCore Linear Regression",
        }
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
