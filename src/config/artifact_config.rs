//! Artifact location parsing from environment variables.
//!
//! The conversion rate is compiled in and intentionally absent here.

use crate::domain::ml::model_kind::ModelKind;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "data/ml/model.json";
pub const DEFAULT_SCALER_PATH: &str = "data/ml/scaler.json";

/// Where the pre-fitted artifacts live and which estimator the model file holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
    pub model_kind: ModelKind,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            scaler_path: PathBuf::from(DEFAULT_SCALER_PATH),
            model_kind: ModelKind::default(),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_env() -> Result<Self> {
        let model_kind = match env::var("MODEL_KIND") {
            Ok(value) => value
                .parse::<ModelKind>()
                .context("Failed to parse MODEL_KIND")?,
            Err(_) => ModelKind::default(),
        };

        Ok(Self {
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
                .into(),
            scaler_path: env::var("SCALER_PATH")
                .unwrap_or_else(|_| DEFAULT_SCALER_PATH.to_string())
                .into(),
            model_kind,
        })
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_scaler_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scaler_path = path.into();
        self
    }
}
