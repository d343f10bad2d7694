use ibmflex_types::ParseError;
use thiserror::Error;

/// Malformed base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not valid base64: {message}")]
pub struct DecodeError {
    /// Offending text.
    pub value: String,
    /// Decoder message.
    pub message: String,
}

/// Failure turning text back into an SDK domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Date or date-time text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Byte-array text could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
