#![allow(dead_code)]

use pricecast::application::ml::predictor::RegressionModel;
use pricecast::config::ArtifactEnvConfig;
use pricecast::domain::ml::feature_registry::FEATURE_NAMES;
use pricecast::domain::ml::model_kind::ModelKind;
use pricecast::domain::ml::scaler::{FeatureScaler, FeatureTransform};
use serde_json::json;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Temp directory holding a freshly fitted model and scaler.
pub struct ArtifactFixture {
    pub dir: PathBuf,
    pub config: ArtifactEnvConfig,
}

impl Drop for ArtifactFixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub fn fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pricecast-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Synthetic daily bars around $180 with close drifting from open.
fn synthetic_bars() -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in 0..120 {
        let t = i as f64;
        let open = 170.0 + 20.0 * (t * 0.13).sin();
        let high = open + 1.0 + (t * 0.7).cos().abs() * 2.0;
        let low = open - 1.0 - (t * 0.3).sin().abs() * 2.0;
        let volume = 40_000_000.0 + 10_000_000.0 * (t * 0.21).cos();
        let close = low + (high - low) * (0.5 + 0.4 * (t * 0.9).sin());
        x.push(vec![open, high, low, volume]);
        y.push(close);
    }
    (x, y)
}

fn fit_standard_scaler(rows: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
    let n = rows.len() as f64;
    let width = rows[0].len();
    let mean: Vec<f64> = (0..width)
        .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
        .collect();
    let scale: Vec<f64> = (0..width)
        .map(|j| {
            (rows.iter().map(|r| (r[j] - mean[j]).powi(2)).sum::<f64>() / n).sqrt()
        })
        .collect();
    (mean, scale)
}

/// Fits a small random forest on scaled synthetic bars and writes both artifacts.
pub fn fitted_artifacts() -> ArtifactFixture {
    let (x, y) = synthetic_bars();
    let (mean, scale) = fit_standard_scaler(&x);
    let scaler = FeatureScaler::standard(mean.clone(), scale.clone());
    let scaled: Vec<Vec<f64>> = x.iter().map(|row| scaler.transform(row)).collect();

    let matrix = DenseMatrix::from_2d_vec(&scaled).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(20)
        .with_max_depth(6)
        .with_min_samples_split(2);
    let model = RandomForestRegressor::fit(&matrix, &y, params).unwrap();

    let dir = fixture_dir();
    let model_path = dir.join("model.json");
    let scaler_path = dir.join("scaler.json");

    let mut file = File::create(&model_path).unwrap();
    serde_json::to_writer(&mut file, &model).unwrap();

    // Written with scikit-learn attribute names
    let scaler_json = json!({
        "kind": "standard",
        "mean_": mean,
        "scale_": scale,
        "feature_names_in_": FEATURE_NAMES,
    });
    std::fs::write(&scaler_path, serde_json::to_vec(&scaler_json).unwrap()).unwrap();

    ArtifactFixture {
        dir,
        config: ArtifactEnvConfig {
            model_path,
            scaler_path,
            model_kind: ModelKind::RandomForest,
        },
    }
}

/// Overwrites the fixture's model with one fitted on six columns.
///
/// The forest's target depends only on the two extra columns, so its splits
/// must index past the four registry features.
pub fn write_six_column_model(fixture: &mut ArtifactFixture, kind: ModelKind) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in 0..60 {
        let t = i as f64;
        let row = match kind {
            ModelKind::RandomForest => vec![1.0, 1.0, 1.0, 1.0, (t * 0.37).sin(), (t * 0.53).cos()],
            ModelKind::Linear => vec![
                (t * 0.3).sin(),
                (t * 0.7).cos(),
                t * 0.1,
                (t * 0.05).powi(2),
                (t * 1.1).sin(),
                (t * 1.9).cos(),
            ],
        };
        y.push(10.0 * row[4] + 5.0 * row[5] + 0.1 * t);
        x.push(row);
    }
    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();

    let mut file = File::create(&fixture.config.model_path).unwrap();
    match kind {
        ModelKind::RandomForest => {
            let params = RandomForestRegressorParameters::default().with_n_trees(10);
            let model = RandomForestRegressor::fit(&matrix, &y, params).unwrap();
            serde_json::to_writer(&mut file, &model).unwrap();
        }
        ModelKind::Linear => {
            let model =
                LinearRegression::fit(&matrix, &y, LinearRegressionParameters::default()).unwrap();
            serde_json::to_writer(&mut file, &model).unwrap();
        }
    }
    fixture.config.model_kind = kind;
}

/// Model double that counts calls and returns the first scaled feature plus `offset`.
pub struct CountingModel {
    pub calls: Arc<AtomicUsize>,
    pub offset: f64,
}

impl RegressionModel for CountingModel {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(features[0] + self.offset)
    }

    fn name(&self) -> &str {
        "Counting"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Scaler double that counts calls and passes features through.
pub struct CountingScaler {
    pub calls: Arc<AtomicUsize>,
}

impl FeatureTransform for CountingScaler {
    fn transform(&self, features: &[f64]) -> Vec<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        features.to_vec()
    }

    fn n_features(&self) -> usize {
        FEATURE_NAMES.len()
    }
}
