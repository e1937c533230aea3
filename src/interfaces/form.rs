use crate::domain::errors::{FieldViolation, InputField, PredictionError, ViolationKind};
use crate::domain::trading::types::RawInput;
use crate::domain::validation::input_validation::InputValidator;
use serde::Deserialize;

/// Default form values, as pre-filled on the input page.
pub const DEFAULT_OPEN: &str = "14981.5";
pub const DEFAULT_HIGH: &str = "15130.9";
pub const DEFAULT_LOW: &str = "14923.4";
pub const DEFAULT_VOLUME: &str = "45000000";

/// The four text fields exactly as the presentation layer submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PredictionForm {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub high: String,
    #[serde(default)]
    pub low: String,
    #[serde(default)]
    pub volume: String,
}

impl PredictionForm {
    pub fn with_defaults() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            high: DEFAULT_HIGH.to_string(),
            low: DEFAULT_LOW.to_string(),
            volume: DEFAULT_VOLUME.to_string(),
        }
    }

    /// Converts text fields to numbers. Blank means missing.
    ///
    /// Unparsable text is rejected here; range checks happen in the validator.
    /// When any field fails to parse, the remaining fields' range violations
    /// are reported alongside it.
    pub fn parse(&self) -> Result<RawInput, PredictionError> {
        let mut violations = Vec::new();
        let mut parse_field = |field: InputField, text: &str| -> Option<f64> {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            match strip_thousands(trimmed).and_then(|digits| digits.parse::<f64>().ok()) {
                Some(value) => Some(value),
                None => {
                    violations.push(FieldViolation {
                        field,
                        kind: ViolationKind::NotANumber,
                    });
                    None
                }
            }
        };

        let input = RawInput {
            open: parse_field(InputField::Open, &self.open),
            high: parse_field(InputField::High, &self.high),
            low: parse_field(InputField::Low, &self.low),
            volume: parse_field(InputField::Volume, &self.volume),
        };

        if violations.is_empty() {
            return Ok(input);
        }

        let unparsed: Vec<InputField> = violations.iter().map(|v| v.field).collect();
        violations.extend(
            InputValidator::violations(&input)
                .into_iter()
                .filter(|v| !unparsed.contains(&v.field)),
        );
        violations.sort_by_key(|v| v.field);
        Err(PredictionError::InvalidInput { violations })
    }
}

/// Drops thousands separators from `text`.
///
/// Commas are only accepted between well-formed groups of the integer part
/// (`45,000,000`, `-1,234.5`). Returns `None` for misplaced commas.
fn strip_thousands(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let unsigned = text.trim_start_matches(['+', '-']);
    let sign = &text[..text.len() - unsigned.len()];
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let groups: Vec<&str> = integer.split(',').collect();
    let first_ok = (1..=3).contains(&groups[0].len());
    let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
    let digits_ok = groups.iter().all(|g| g.chars().all(|c| c.is_ascii_digit()));
    if sign.len() > 1 || !(first_ok && rest_ok && digits_ok) {
        return None;
    }

    let mut out = format!("{}{}", sign, groups.concat());
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Some(out)
}
