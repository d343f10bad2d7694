use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the current operation.
    #[default]
    Error,
    /// Reported but not fatal.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic as handed back to the plugin runtime.
///
/// Implementors other than [`BasicDiagnostic`] (problem records, for
/// instance) are recovered through [`Diagnostic::into_any`].
pub trait Diagnostic: fmt::Debug + Send + Sync + 'static {
    /// Severity of the diagnostic.
    fn severity(&self) -> Severity;
    /// One-line summary.
    fn summary(&self) -> String;
    /// Longer explanation; may be empty.
    fn detail(&self) -> String;
    /// Borrows the concrete diagnostic.
    fn as_any(&self) -> &(dyn Any + Send + Sync);
    /// Recovers the concrete diagnostic.
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

/// Plain summary/detail diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicDiagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// One-line summary.
    pub summary: String,
    /// Longer explanation.
    pub detail: String,
}

impl BasicDiagnostic {
    /// Error-severity diagnostic.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Warning-severity diagnostic.
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl Diagnostic for BasicDiagnostic {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn detail(&self) -> String {
        self.detail.clone()
    }

    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Box<dyn Diagnostic>>,
}

impl Diagnostics {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error diagnostic.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(BasicDiagnostic::error(summary, detail));
    }

    /// Appends a warning diagnostic.
    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(BasicDiagnostic::warning(summary, detail));
    }

    /// Appends any diagnostic.
    pub fn push<D: Diagnostic>(&mut self, diag: D) {
        self.items.push(Box::new(diag));
    }

    /// Appends an already boxed diagnostic.
    pub fn push_boxed(&mut self, diag: Box<dyn Diagnostic>) {
        self.items.push(diag);
    }

    /// Moves every diagnostic of `other` to the end of this collection.
    pub fn append(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// True when at least one error is present.
    pub fn has_error(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.items.len() - self.error_count()
    }

    /// Total number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Diagnostic> + '_ {
        self.items.iter().map(|d| d.as_ref())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Box<dyn Diagnostic>;
    type IntoIter = std::vec::IntoIter<Box<dyn Diagnostic>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, diag) in self.items.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", diag.severity(), diag.summary())?;
            let detail = diag.detail();
            if !detail.is_empty() {
                write!(f, ": {}", detail)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut diags = Diagnostics::new();
        diags.add_warning("deprecated", "use `name` instead");
        assert!(!diags.has_error());
        diags.add_error("error parsing date string", "bad");
        assert!(diags.has_error());
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.warning_count(), 1);
    }

    #[test]
    fn display_lists_each_diagnostic() {
        let mut diags = Diagnostics::new();
        diags.add_error("first", "");
        diags.add_warning("second", "more");
        assert_eq!(diags.to_string(), "error: first\nwarning: second: more");
    }

    #[test]
    fn concrete_type_is_recoverable() {
        let boxed: Box<dyn Diagnostic> = Box::new(BasicDiagnostic::error("s", "d"));
        assert!(boxed.as_any().is::<BasicDiagnostic>());
        let concrete = boxed.into_any().downcast::<BasicDiagnostic>().unwrap();
        assert_eq!(concrete.detail, "d");
    }
}
