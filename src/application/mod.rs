// Model and scaler artifacts
pub mod ml;

// Input -> scale -> predict -> format
pub mod pipeline;

// System orchestrator
pub mod system;
