use thiserror::Error;

/// Validation errors for domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Malformed date or date-time text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is not a `YYYY-MM-DD` calendar date.
    #[error("'{value}' is not a valid date: {message}")]
    Date {
        /// Offending text.
        value: String,
        /// Parser message.
        message: String,
    },
    /// Text is not an RFC3339 timestamp.
    #[error("'{value}' is not a valid date-time: {message}")]
    DateTime {
        /// Offending text.
        value: String,
        /// Parser message.
        message: String,
    },
}

impl ParseError {
    /// Returns the text that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            ParseError::Date { value, .. } | ParseError::DateTime { value, .. } => value,
        }
    }
}
