//! Conversion between the display currency (INR) and the currency the
//! model was fitted on (USD).

/// Rupees per US dollar. Fixed at build time; there is no runtime override.
pub const INR_PER_USD: f64 = 83.0;

/// Converts a display-currency price into model currency.
pub fn normalize(price: f64, rate: f64) -> f64 {
    price / rate
}

/// Converts a model-currency amount back into display currency.
pub fn denormalize(amount: f64, rate: f64) -> f64 {
    amount * rate
}
