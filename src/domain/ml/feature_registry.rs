use crate::domain::trading::types::NormalizedFeatures;

/// Ordered list of feature names.
/// This order MUST match exactly with the order the scaler and model were fitted on.
/// Any change here is a breaking change for the shipped artifacts.
pub const FEATURE_NAMES: &[&str] = &["open", "high", "low", "volume"];

pub const FEATURE_COUNT: usize = 4;

/// Flattens normalized features into the model's input order.
pub fn features_to_vector(features: &NormalizedFeatures) -> Vec<f64> {
    vec![
        features.open,
        features.high,
        features.low,
        features.volume,
    ]
}
