// Currency conversion between display and model currency
pub mod currency;

// Domain-specific error types
pub mod errors;

// Display formatting
pub mod formatting;

// Feature layout and fitted scaler
pub mod ml;

// Core prediction value objects
pub mod trading;

// Input validation
pub mod validation;
