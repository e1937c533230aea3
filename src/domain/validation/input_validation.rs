use crate::domain::errors::{FieldViolation, InputField, PredictionError, ViolationKind};
use crate::domain::trading::types::{RawInput, ValidatedInput};
use tracing::warn;

/// Gatekeeper for user-submitted prediction input.
///
/// Rejects missing, non-finite and negative fields. Relations between
/// fields (e.g. low above high) are left to the model.
pub struct InputValidator;

impl InputValidator {
    /// Validates every field and reports all violations at once.
    pub fn validate(input: &RawInput) -> Result<ValidatedInput, PredictionError> {
        let violations = Self::violations(input);

        match (input.open, input.high, input.low, input.volume) {
            (Some(open), Some(high), Some(low), Some(volume)) if violations.is_empty() => {
                Ok(ValidatedInput {
                    open,
                    high,
                    low,
                    volume,
                })
            }
            _ => Err(PredictionError::InvalidInput { violations }),
        }
    }

    /// Every field violation in `input`, in field order.
    pub fn violations(input: &RawInput) -> Vec<FieldViolation> {
        InputField::ALL
            .into_iter()
            .filter_map(|field| {
                let kind = Self::check_value(input.get(field))?;
                warn!("Validation FAILED: field {} is {}", field, kind);
                Some(FieldViolation { field, kind })
            })
            .collect()
    }

    fn check_value(value: Option<f64>) -> Option<ViolationKind> {
        match value {
            None => Some(ViolationKind::Missing),
            Some(v) if !v.is_finite() => Some(ViolationKind::NonFinite),
            Some(v) if v < 0.0 => Some(ViolationKind::Negative),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RawInput {
        RawInput::new(14981.5, 15130.9, 14923.4, 45_000_000.0)
    }

    #[test]
    fn test_validate_default_form_values() {
        let validated = InputValidator::validate(&valid()).unwrap();
        assert_eq!(validated.open(), 14981.5);
        assert_eq!(validated.volume(), 45_000_000.0);
    }

    #[test]
    fn test_validate_negative_open() {
        let input = RawInput {
            open: Some(-1.0),
            ..valid()
        };
        let err = InputValidator::validate(&input).unwrap_err();
        assert!(err.is_invalid_field(InputField::Open));
        match err {
            PredictionError::InvalidInput { violations } => {
                assert_eq!(
                    violations,
                    vec![FieldViolation {
                        field: InputField::Open,
                        kind: ViolationKind::Negative,
                    }]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_non_finite_volume() {
        for volume in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let input = RawInput {
                volume: Some(volume),
                ..valid()
            };
            let err = InputValidator::validate(&input).unwrap_err();
            assert!(err.is_invalid_field(InputField::Volume));
        }
    }

    #[test]
    fn test_validate_missing_field() {
        let input = RawInput {
            high: None,
            ..valid()
        };
        let err = InputValidator::validate(&input).unwrap_err();
        assert!(err.is_invalid_field(InputField::High));
    }

    #[test]
    fn test_validate_reports_all_violations() {
        let input = RawInput {
            open: Some(-5.0),
            high: None,
            low: Some(f64::NAN),
            volume: Some(1.0),
        };
        match InputValidator::validate(&input).unwrap_err() {
            PredictionError::InvalidInput { violations } => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(
                    fields,
                    vec![InputField::Open, InputField::High, InputField::Low]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_accepts_edge_values() {
        // Zero prices, low above high and fractional volume are all accepted
        let zeros = RawInput::new(0.0, 0.0, 0.0, 0.0);
        assert!(InputValidator::validate(&zeros).is_ok());

        let inverted = RawInput::new(100.0, 90.0, 110.0, 10.0);
        assert!(InputValidator::validate(&inverted).is_ok());

        let fractional = RawInput::new(100.0, 101.0, 99.0, 1234.75);
        assert!(InputValidator::validate(&fractional).is_ok());
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let input = RawInput {
            low: Some(-0.0),
            ..valid()
        };
        assert!(InputValidator::validate(&input).is_ok());
    }
}
