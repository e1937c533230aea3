pub mod artifacts;
pub mod predictor;
pub mod smartcore_predictor;
