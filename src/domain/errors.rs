use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One of the four fields submitted by the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputField {
    Open,
    High,
    Low,
    Volume,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Open,
        InputField::High,
        InputField::Low,
        InputField::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InputField::Open => "open",
            InputField::High => "high",
            InputField::Low => "low",
            InputField::Volume => "volume",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    NotANumber,
    NonFinite,
    Negative,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ViolationKind::Missing => "missing",
            ViolationKind::NotANumber => "not a number",
            ViolationKind::NonFinite => "non-finite",
            ViolationKind::Negative => "negative",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: InputField,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.field, self.kind)
    }
}

/// Which pre-fitted artifact failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Model,
    Scaler,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Model => f.write_str("regression model"),
            ArtifactKind::Scaler => f.write_str("feature scaler"),
        }
    }
}

/// Errors raised while loading artifacts or serving a prediction.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Failed to load {artifact} from {path:?}: {reason}")]
    ArtifactLoad {
        artifact: ArtifactKind,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid input: {}", join_violations(.violations))]
    InvalidInput { violations: Vec<FieldViolation> },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    pub fn is_invalid_field(&self, field: InputField) -> bool {
        match self {
            PredictionError::InvalidInput { violations } => {
                violations.iter().any(|v| v.field == field)
            }
            _ => false,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
