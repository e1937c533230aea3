use crate::domain::ml::feature_registry::{FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};

/// A fitted per-feature transform applied before inference.
pub trait FeatureTransform: Send + Sync {
    /// Scales one feature vector. The input has `n_features()` entries.
    fn transform(&self, features: &[f64]) -> Vec<f64>;

    fn n_features(&self) -> usize;
}

/// Pre-fitted feature scaler, deserialized from the shipped JSON artifact.
///
/// Accepts the scikit-learn attribute names (`mean_`, `scale_`, `min_`,
/// `feature_names_in_`) so an exported estimator can be dumped as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`
    Standard {
        #[serde(alias = "mean_")]
        mean: Vec<f64>,
        #[serde(alias = "scale_")]
        scale: Vec<f64>,
        #[serde(default, alias = "feature_names_in_")]
        feature_names: Option<Vec<String>>,
    },
    /// `x * scale + min`
    MinMax {
        #[serde(alias = "min_")]
        min: Vec<f64>,
        #[serde(alias = "scale_")]
        scale: Vec<f64>,
        #[serde(default, alias = "feature_names_in_")]
        feature_names: Option<Vec<String>>,
    },
}

impl FeatureScaler {
    pub fn standard(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        FeatureScaler::Standard {
            mean,
            scale,
            feature_names: None,
        }
    }

    pub fn min_max(min: Vec<f64>, scale: Vec<f64>) -> Self {
        FeatureScaler::MinMax {
            min,
            scale,
            feature_names: None,
        }
    }

    /// Checks the fitted parameters against the feature registry.
    pub fn validate(&self) -> Result<(), String> {
        let (offsets, scale, feature_names) = match self {
            FeatureScaler::Standard {
                mean,
                scale,
                feature_names,
            } => (mean, scale, feature_names),
            FeatureScaler::MinMax {
                min,
                scale,
                feature_names,
            } => (min, scale, feature_names),
        };

        if offsets.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {} features, got {} offsets and {} scales",
                FEATURE_COUNT,
                offsets.len(),
                scale.len()
            ));
        }

        if let Some(bad) = offsets.iter().chain(scale.iter()).find(|v| !v.is_finite()) {
            return Err(format!("non-finite scaler parameter: {}", bad));
        }

        // Exported frames often use column headers like "Open"
        if let Some(names) = feature_names {
            let matches = names.len() == FEATURE_COUNT
                && names
                    .iter()
                    .zip(FEATURE_NAMES)
                    .all(|(name, expected)| name.eq_ignore_ascii_case(expected));
            if !matches {
                return Err(format!(
                    "feature order {:?} does not match expected {:?}",
                    names, FEATURE_NAMES
                ));
            }
        }

        Ok(())
    }
}

impl FeatureTransform for FeatureScaler {
    fn transform(&self, features: &[f64]) -> Vec<f64> {
        match self {
            FeatureScaler::Standard { mean, scale, .. } => features
                .iter()
                .zip(mean.iter().zip(scale.iter()))
                .map(|(x, (m, s))| {
                    // Constant features were fitted with zero variance
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (x - m) / s
                })
                .collect(),
            FeatureScaler::MinMax { min, scale, .. } => features
                .iter()
                .zip(min.iter().zip(scale.iter()))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        }
    }

    fn n_features(&self) -> usize {
        match self {
            FeatureScaler::Standard { mean, .. } => mean.len(),
            FeatureScaler::MinMax { min, .. } => min.len(),
        }
    }
}
