use std::error::Error;

use ibmflex_types::{Diagnostic, Diagnostics, Severity};

use crate::component::ComponentInfo;
use crate::format::{interpolate, take_cause, FmtArg, FormattedError};
use crate::problem::Problem;

/// Builds problems stamped with one component identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reporter {
    component: ComponentInfo,
}

impl Reporter {
    /// Reporter for `component`.
    pub fn new(component: ComponentInfo) -> Self {
        Self { component }
    }

    /// Component stamped on every problem.
    pub fn component(&self) -> &ComponentInfo {
        &self.component
    }

    /// Wraps `cause` as an error-severity problem.
    pub fn terraform_error(
        &self,
        cause: impl Into<Box<dyn Error + Send + Sync>>,
        summary: impl Into<String>,
        resource: &str,
        operation: &str,
    ) -> Problem {
        self.build(cause.into(), summary.into(), Severity::Error, resource, operation, None)
    }

    /// Like [`Reporter::terraform_error`], with a discriminator in the identifier.
    pub fn discriminated_terraform_error(
        &self,
        cause: impl Into<Box<dyn Error + Send + Sync>>,
        summary: impl Into<String>,
        resource: &str,
        operation: &str,
        discriminator: &str,
    ) -> Problem {
        self.build(
            cause.into(),
            summary.into(),
            Severity::Error,
            resource,
            operation,
            Some(discriminator),
        )
    }

    /// Converts a framework diagnostic.
    ///
    /// A diagnostic that already is a [`Problem`] comes back unchanged and
    /// `discriminator` is ignored. Otherwise the summary becomes
    /// `"<summary>: <detail>"` and warnings stay warnings.
    pub fn from_diagnostic(
        &self,
        diag: Box<dyn Diagnostic>,
        resource: &str,
        operation: &str,
        discriminator: Option<&str>,
    ) -> Problem {
        let severity = diag.severity();
        let text = format!("{}: {}", diag.summary(), diag.detail());
        match diag.into_any().downcast::<Problem>() {
            Ok(problem) => {
                tracing::debug!(id = problem.id(), "diagnostic already wraps a problem");
                *problem
            }
            Err(_) => self.build(
                text.clone().into(),
                text,
                severity,
                resource,
                operation,
                discriminator,
            ),
        }
    }

    /// Formats `format` with `args`; see [`crate::fmt_errorf!`].
    ///
    /// The first argument carrying an error becomes the cause of a problem
    /// whose summary is the formatted text. Without one the text is returned
    /// as [`FormattedError::Plain`].
    pub fn fmt_errorf(&self, format: &str, args: Vec<FmtArg>) -> FormattedError {
        let text = interpolate(format, &args);
        match take_cause(args) {
            Some(cause) => FormattedError::Problem(Box::new(self.build(
                cause,
                text,
                Severity::Error,
                "",
                "",
                None,
            ))),
            None => FormattedError::Plain(text),
        }
    }

    /// Converts every diagnostic of `batch` and appends it to `target`.
    pub fn append_diagnostics(
        &self,
        target: &mut Diagnostics,
        batch: Diagnostics,
        resource: &str,
        operation: &str,
    ) {
        for diag in batch {
            let problem = self.from_diagnostic(diag, resource, operation, None);
            tracing::debug!(id = problem.id(), resource, operation, "diagnostic appended");
            target.push(problem);
        }
    }

    fn build(
        &self,
        cause: Box<dyn Error + Send + Sync>,
        summary: String,
        severity: Severity,
        resource: &str,
        operation: &str,
        discriminator: Option<&str>,
    ) -> Problem {
        Problem::new(
            self.component.clone(),
            cause,
            summary,
            severity,
            resource,
            operation,
            discriminator,
        )
    }
}
