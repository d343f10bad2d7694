//! Conversions between Terraform attribute values and IBM Cloud SDK host values.
//!
//! Every conversion comes in a pair:
//! - host → typed (`<t>_slice_to_list_value`, `<t>_map_to_map_value`, ...) is total;
//!   `None` becomes a null value and an empty container stays an empty container.
//! - typed → host (`list_value_to_<t>_slice`, `map_value_to_<t>_map`, ...) returns
//!   `Ok(None)` for null or unknown input and reports malformed dates, date-times
//!   and base64 text as [`Diagnostics`](ibmflex_types::Diagnostics).
//!
//! "Any" values are the one lossy direction: they are rendered to strings and
//! only strings come back.
//!
#![deny(missing_docs)]

/// Any-typed SDK values and their string rendering.
pub mod any;
/// String encodings of SDK domain types (dates, UUIDs, byte arrays).
pub mod codec;
/// Error types for parse/decode failures.
pub mod error;
/// Conversions for scalar primitives and their containers.
pub mod primitives;
/// Conversions for string-encoded domain types and their containers.
pub mod strings;

pub use any::*;
pub use codec::{decode_bytes, encode_bytes, StringCodec};
pub use error::{ConversionError, DecodeError};
pub use primitives::*;
pub use strings::*;
