//! Problem records for the IBM Cloud Terraform provider.
//!
//! This crate provides:
//! - `Problem`, a wrapper around an SDK error or framework diagnostic that
//!   stamps component, resource, operation and discriminator metadata
//! - Stable identifiers: `terraform-` + hex prefix of a domain-separated SHA-256
//! - Console and debug reports rendered as ordered YAML documents
//! - `Reporter`, the entry point CRUD handlers use to build problems
//!
//! Problems are immutable once built; the identifier depends only on the
//! construction inputs.
//!
#![deny(missing_docs)]

/// Identity of the component that raises problems.
pub mod component;
/// Format-string convenience that picks the first error argument as the cause.
pub mod format;
/// Identifier hashing.
pub mod identity;
/// Insertion-ordered reports and their YAML rendering.
pub mod ordered;
/// The problem record.
pub mod problem;
/// Problem construction entry points.
pub mod reporter;
/// SDK-side problems and the legacy service error wrapper.
pub mod sdk;

pub use component::ComponentInfo;
pub use format::{FmtArg, FormattedError};
pub use identity::create_id_hash;
pub use ordered::OrderedMaps;
pub use problem::{as_orderable, OrderableProblem, Problem};
pub use reporter::Reporter;
pub use sdk::{SdkProblem, ServiceErrorResponse};
