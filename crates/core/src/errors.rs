//! Core error types for the Crêp'Time profitability model.
//!
//! Every computation is total over valid input and rejects invalid input
//! immediately. Ratios that are undefined for a given input (ROI without
//! investment, payback without profit, break-even without revenue) are not
//! errors: they are reported through [`crate::simulation::Metric`] and
//! [`crate::investment::Payback`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the profitability model.
#[derive(Error, Debug)]
pub enum Error {
    /// Partner count, day count, tax rate, negative amounts, malformed sweep
    /// ranges or product mixes.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }

    pub(crate) fn overflow(what: &str) -> Self {
        Error::Unexpected(format!("arithmetic overflow while computing {}", what))
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Duplicate entry '{0}'")]
    DuplicateEntry(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
