use std::fmt;
use std::str::FromStr;

/// Estimator family stored in the model artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    RandomForest,
    Linear,
}

impl FromStr for ModelKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random_forest" | "random-forest" | "rf" => Ok(ModelKind::RandomForest),
            "linear" => Ok(ModelKind::Linear),
            _ => anyhow::bail!(
                "Invalid MODEL_KIND: {}. Must be 'random_forest' or 'linear'",
                s
            ),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::RandomForest => f.write_str("random_forest"),
            ModelKind::Linear => f.write_str("linear"),
        }
    }
}
