use std::any::Any;
use std::error::Error;
use std::fmt;

use ibmflex_types::{Diagnostic, Diagnostics, Severity};

use crate::component::ComponentInfo;
use crate::format::FormattedError;
use crate::identity::create_id_hash;
use crate::ordered::OrderedMaps;
use crate::sdk::{SdkProblem, ServiceErrorResponse};

/// Prefix of every problem identifier.
pub const PROBLEM_ID_PREFIX: &str = "terraform";

/// A problem that can describe itself as ordered reports.
pub trait OrderableProblem {
    /// Stable identifier of the failure class.
    fn id(&self) -> String;
    /// Report shown to users.
    fn console_ordered_maps(&self) -> OrderedMaps;
    /// Console report plus developer detail.
    fn debug_ordered_maps(&self) -> OrderedMaps;

    /// Rendered console report.
    fn console_message(&self) -> String {
        self.console_ordered_maps().render()
    }

    /// Rendered debug report.
    fn debug_message(&self) -> String {
        self.debug_ordered_maps().render()
    }
}

/// Views an error as an orderable problem, looking through known wrappers.
pub fn as_orderable<'a>(
    err: &'a (dyn Error + Send + Sync + 'static),
) -> Option<&'a dyn OrderableProblem> {
    if let Some(problem) = err.downcast_ref::<Problem>() {
        return Some(problem);
    }
    if let Some(problem) = err.downcast_ref::<SdkProblem>() {
        return Some(problem);
    }
    if let Some(FormattedError::Problem(problem)) = err.downcast_ref::<FormattedError>() {
        return Some(problem.as_ref());
    }
    if let Some(response) = err.downcast_ref::<ServiceErrorResponse>() {
        return as_orderable(response.error.as_ref());
    }
    None
}

/// An error wrapped with the context needed to report it.
///
/// Built through [`crate::Reporter`]; immutable afterwards.
#[derive(Debug)]
pub struct Problem {
    cause: Box<dyn Error + Send + Sync>,
    summary: String,
    severity: Severity,
    component: ComponentInfo,
    resource: String,
    operation: String,
    discriminator: Option<String>,
    id: String,
}

impl Problem {
    pub(crate) fn new(
        component: ComponentInfo,
        cause: Box<dyn Error + Send + Sync>,
        summary: String,
        severity: Severity,
        resource: &str,
        operation: &str,
        discriminator: Option<&str>,
    ) -> Self {
        let discriminator = discriminator.filter(|d| !d.is_empty());
        let signature = base_signature(&component, severity, discriminator, cause.as_ref());
        let id = create_id_hash(PROBLEM_ID_PREFIX, &[signature.as_str(), resource, operation]);
        tracing::debug!(%id, resource, operation, "problem created");
        Self {
            cause,
            summary,
            severity,
            component,
            resource: resource.to_string(),
            operation: operation.to_string(),
            discriminator: discriminator.map(str::to_string),
            id,
        }
    }

    /// Stable identifier, `terraform-` followed by eight hex digits.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// User-facing summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Component the problem was raised by.
    pub fn component(&self) -> &ComponentInfo {
        &self.component
    }

    /// Terraform resource or data source name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Operation, `create`/`read`/`update`/`delete` or free text.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Extra text distinguishing otherwise identical failures.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    /// Wrapped error.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Unwraps the wrapped error.
    pub fn into_cause(self) -> Box<dyn Error + Send + Sync> {
        self.cause
    }

    /// Single-entry collection holding this problem.
    pub fn into_diagnostics(self) -> Diagnostics {
        let mut diags = Diagnostics::new();
        diags.push(self);
        diags
    }

    /// Emits the debug report at a level matching the severity.
    pub fn log(&self) {
        let message = self.debug_message();
        match self.severity {
            Severity::Error => tracing::error!(id = %self.id, "{}", message),
            Severity::Warning => tracing::warn!(id = %self.id, "{}", message),
        }
    }
}

/// Component name, severity, discriminator and the cause's own identifier.
fn base_signature(
    component: &ComponentInfo,
    severity: Severity,
    discriminator: Option<&str>,
    cause: &(dyn Error + Send + Sync + 'static),
) -> String {
    let mut parts = vec![component.name.clone(), severity.to_string()];
    if let Some(discriminator) = discriminator {
        parts.push(discriminator.to_string());
    }
    if let Some(caused_by) = as_orderable(cause) {
        parts.push(caused_by.id());
    }
    parts.join(":")
}

impl OrderableProblem for Problem {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn console_ordered_maps(&self) -> OrderedMaps {
        let mut maps = OrderedMaps::new();
        maps.add("id", self.id.as_str());
        maps.add("summary", self.summary.as_str());
        maps.add("severity", self.severity.to_string());
        maps.add("resource", self.resource.as_str());
        maps.add("operation", self.operation.as_str());
        maps.add("component", self.component.to_ordered_maps());
        maps
    }

    fn debug_ordered_maps(&self) -> OrderedMaps {
        let mut maps = self.console_ordered_maps();
        if let Some(caused_by) = as_orderable(self.cause.as_ref()) {
            maps.add("caused_by", caused_by.debug_ordered_maps());
        }
        maps
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

impl Error for Problem {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl Diagnostic for Problem {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn detail(&self) -> String {
        self.console_message()
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}
