//! Configuration module for pricecast.
//!
//! Loaded from environment variables (after `.env` via dotenvy). Only the
//! artifact locations are configurable.

mod artifact_config;

pub use artifact_config::{ArtifactEnvConfig, DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH};

use anyhow::Result;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub artifacts: ArtifactEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            artifacts: ArtifactEnvConfig::from_env()?,
        })
    }
}
