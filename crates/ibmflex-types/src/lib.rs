//! Value model shared by the IBM Cloud provider's conversion and reporting layers.
//!
//! This crate provides:
//! - The three-state (null/unknown/known) typed attribute model used on the
//!   configuration side ([`Nullable`], [`ListValue`], [`SetValue`], [`MapValue`])
//! - String-backed SDK domain types ([`Date`], [`DateTime`], [`Uuid`])
//! - The diagnostics model handed back to the plugin runtime
//!
//! Nothing here performs I/O or holds shared state; every type is `Send + Sync`.
//!
#![deny(missing_docs)]

/// List, set and map attribute values.
pub mod collections;
/// Framework diagnostics (severity, summary, detail).
pub mod diagnostics;
/// Date, date-time and UUID domain types.
pub mod domain;
/// Validation and parse errors for domain types.
pub mod validation;
/// Scalar attribute values and attribute type descriptors.
pub mod value;

pub use collections::{ListValue, MapValue, SetValue};
pub use diagnostics::{BasicDiagnostic, Diagnostic, Diagnostics, Severity};
pub use domain::{Date, DateTime, Uuid};
pub use validation::{ParseError, ValidationError};
pub use value::{
    Attr, AttrType, BoolValue, Float32Value, Float64Value, Int32Value, Int64Value, Nullable,
    Primitive, StringValue,
};
