use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ibmflex_types::{Date, DateTime, Uuid};

use crate::error::{ConversionError, DecodeError};

/// SDK value carried as a string on the Terraform side.
pub trait StringCodec: Sized + Clone + Send + Sync + 'static {
    /// Diagnostic summary used when [`StringCodec::decode`] fails.
    const DECODE_SUMMARY: &'static str;

    /// Canonical text form.
    fn encode(&self) -> String;

    /// Inverse of [`StringCodec::encode`].
    fn decode(text: &str) -> Result<Self, ConversionError>;
}

impl StringCodec for Date {
    const DECODE_SUMMARY: &'static str = "error parsing date string";

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(text: &str) -> Result<Self, ConversionError> {
        Ok(Date::parse(text)?)
    }
}

impl StringCodec for DateTime {
    const DECODE_SUMMARY: &'static str = "error parsing date-time string";

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(text: &str) -> Result<Self, ConversionError> {
        Ok(DateTime::parse(text)?)
    }
}

// SDK UUIDs are plain strings; the text is taken as-is.
impl StringCodec for Uuid {
    const DECODE_SUMMARY: &'static str = "error parsing uuid string";

    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(text: &str) -> Result<Self, ConversionError> {
        Ok(Uuid::new(text))
    }
}

impl StringCodec for Vec<u8> {
    const DECODE_SUMMARY: &'static str = "error decoding byte-array string";

    fn encode(&self) -> String {
        encode_bytes(self)
    }

    fn decode(text: &str) -> Result<Self, ConversionError> {
        Ok(decode_bytes(text)?)
    }
}

/// Standard base64 (RFC 4648, padded).
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard padded base64.
pub fn decode_bytes(text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(text).map_err(|err| DecodeError {
        value: text.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_is_padded() {
        assert_eq!(encode_bytes(b"foo!"), "Zm9vIQ==");
        assert_eq!(decode_bytes("Zm9vIQ==").unwrap(), b"foo!".to_vec());
    }

    #[test]
    fn base64_rejects_garbage() {
        let err = decode_bytes("not valid base64!!").unwrap_err();
        assert_eq!(err.value, "not valid base64!!");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn uuid_decode_never_fails() {
        let id = <Uuid as StringCodec>::decode("anything").unwrap();
        assert_eq!(id.encode(), "anything");
    }

    #[test]
    fn date_decode_surfaces_parse_error() {
        let err = <Date as StringCodec>::decode("bad date").unwrap_err();
        assert!(matches!(err, ConversionError::Parse(_)));
    }
}
