// Prediction input and output value objects
pub mod types;
