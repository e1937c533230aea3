/// Interface for pre-fitted regression models
pub trait RegressionModel: Send + Sync {
    /// Predict the closing price (model currency) from one scaled feature vector
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
