use chrono::{FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::validation::{ParseError, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-less layouts accepted after RFC3339; they are read as UTC.
const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Offset layouts without the colon in the offset (`+0100`).
const NO_COLON_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];

/// Calendar date, canonical form `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    /// Parses `YYYY-MM-DD` text.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Date)
            .map_err(|err| ParseError::Date {
                value: value.to_string(),
                message: err.to_string(),
            })
    }

    /// Builds a date from its components; `None` when the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Date::parse(&value)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

/// Timestamp, rendered as RFC3339 with millisecond precision.
///
/// The original offset is kept; a zero offset renders as `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
    /// Parses RFC3339 text, falling back to the offset-less and
    /// colon-less layouts SDK payloads use.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let rfc3339_err = match chrono::DateTime::parse_from_rfc3339(value) {
            Ok(dt) => return Ok(DateTime(dt)),
            Err(err) => err,
        };
        for layout in NO_COLON_DATE_TIME_FORMATS {
            if let Ok(dt) = chrono::DateTime::parse_from_str(value, layout) {
                return Ok(DateTime(dt));
            }
        }
        for layout in LOCAL_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
                let utc = FixedOffset::east_opt(0)
                    .and_then(|offset| offset.from_local_datetime(&naive).single());
                if let Some(dt) = utc {
                    return Ok(DateTime(dt));
                }
            }
        }
        Err(ParseError::DateTime {
            value: value.to_string(),
            message: rfc3339_err.to_string(),
        })
    }

    /// Underlying chrono timestamp.
    pub fn as_chrono(&self) -> chrono::DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse(s)
    }
}

impl TryFrom<String> for DateTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateTime::parse(&value)
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.to_string()
    }
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
    fn from(value: chrono::DateTime<FixedOffset>) -> Self {
        DateTime(value)
    }
}

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps text without validation; SDK payloads are trusted as-is.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            fn pattern() -> &'static Regex {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                PATTERN.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }

            /// Parses a validated value from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Self::pattern().is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Borrows the text form.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    Uuid,
    "UUID in canonical 36-character hyphenated form (pattern checked only by `parse`).",
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
);
