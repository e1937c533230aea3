use crate::domain::currency::normalize;
use crate::domain::errors::InputField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fields exactly as submitted. `None` means the field was left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
}

impl RawInput {
    pub fn new(open: f64, high: f64, low: f64, volume: f64) -> Self {
        Self {
            open: Some(open),
            high: Some(high),
            low: Some(low),
            volume: Some(volume),
        }
    }

    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Open => self.open,
            InputField::High => self.high,
            InputField::Low => self.low,
            InputField::Volume => self.volume,
        }
    }
}

/// Input that passed validation: every field present, finite and non-negative.
///
/// Only `InputValidator` constructs this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub(crate) open: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) volume: f64,
}

impl ValidatedInput {
    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Prices move to model currency, volume is a count and passes through.
    pub fn normalize(&self, rate: f64) -> NormalizedFeatures {
        NormalizedFeatures {
            open: normalize(self.open, rate),
            high: normalize(self.high, rate),
            low: normalize(self.low, rate),
            volume: self.volume,
        }
    }
}

/// Features in model currency, before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Gain,
    Loss,
}

impl Direction {
    /// Ties count as a gain.
    pub fn classify(prediction: f64, open: f64) -> Self {
        if prediction >= open {
            Direction::Gain
        } else {
            Direction::Loss
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Gain => f.write_str("GAIN"),
            Direction::Loss => f.write_str("LOSS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    /// Open price in model currency.
    pub normalized_open: f64,
    /// Predicted close in model currency.
    pub prediction: f64,
    /// Predicted close in display currency.
    pub display_prediction: f64,
    pub direction: Direction,
    pub formatted: String,
}
