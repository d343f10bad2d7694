use std::error::Error;
use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::problem::Problem;
use crate::sdk::{SdkProblem, ServiceErrorResponse};

/// Rendered in place of a `{}` that has no matching argument.
const MISSING_ARGUMENT: &str = "<missing>";

/// Argument of [`crate::Reporter::fmt_errorf`].
#[derive(Debug)]
pub enum FmtArg {
    /// Already rendered text.
    Text(String),
    /// An error; the first one becomes the cause.
    Error(Box<dyn Error + Send + Sync>),
    /// Legacy wrapper; its embedded error becomes the cause.
    ServiceError(ServiceErrorResponse),
}

impl FmtArg {
    /// Error argument.
    pub fn error(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        FmtArg::Error(err.into())
    }

    /// Text argument from anything displayable.
    pub fn display(value: impl Display) -> Self {
        FmtArg::Text(value.to_string())
    }

    fn render(&self) -> String {
        match self {
            FmtArg::Text(text) => text.clone(),
            FmtArg::Error(err) => err.to_string(),
            FmtArg::ServiceError(response) => response.to_string(),
        }
    }
}

impl From<&str> for FmtArg {
    fn from(value: &str) -> Self {
        FmtArg::Text(value.to_string())
    }
}

impl From<String> for FmtArg {
    fn from(value: String) -> Self {
        FmtArg::Text(value)
    }
}

impl From<&String> for FmtArg {
    fn from(value: &String) -> Self {
        FmtArg::Text(value.clone())
    }
}

macro_rules! display_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FmtArg {
                fn from(value: $ty) -> Self {
                    FmtArg::Text(value.to_string())
                }
            }
        )*
    };
}

display_arg!(bool, i32, i64, u16, u32, u64, usize, f32, f64);

impl From<Box<dyn Error + Send + Sync>> for FmtArg {
    fn from(value: Box<dyn Error + Send + Sync>) -> Self {
        FmtArg::Error(value)
    }
}

impl From<Problem> for FmtArg {
    fn from(value: Problem) -> Self {
        FmtArg::Error(Box::new(value))
    }
}

impl From<SdkProblem> for FmtArg {
    fn from(value: SdkProblem) -> Self {
        FmtArg::Error(Box::new(value))
    }
}

impl From<ServiceErrorResponse> for FmtArg {
    fn from(value: ServiceErrorResponse) -> Self {
        FmtArg::ServiceError(value)
    }
}

/// Result of [`crate::Reporter::fmt_errorf`].
#[derive(Debug, ThisError)]
pub enum FormattedError {
    /// An error argument was found and wrapped.
    #[error(transparent)]
    Problem(Box<Problem>),
    /// No error argument; just the formatted text.
    #[error("{0}")]
    Plain(String),
}

impl FormattedError {
    /// The wrapped problem, if any.
    pub fn as_problem(&self) -> Option<&Problem> {
        match self {
            FormattedError::Problem(problem) => Some(problem.as_ref()),
            FormattedError::Plain(_) => None,
        }
    }

    /// Unwraps the problem, if any.
    pub fn into_problem(self) -> Option<Problem> {
        match self {
            FormattedError::Problem(problem) => Some(*problem),
            FormattedError::Plain(_) => None,
        }
    }
}

/// Substitutes `{}` placeholders in order; `{{` and `}}` are literal braces.
///
/// Surplus arguments are ignored.
pub(crate) fn interpolate(format: &str, args: &[FmtArg]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut next_arg = args.iter();
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        let lookahead = chars.peek().copied();
        match (c, lookahead) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('{', Some('}')) => {
                chars.next();
                match next_arg.next() {
                    Some(arg) => out.push_str(&arg.render()),
                    None => out.push_str(MISSING_ARGUMENT),
                }
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            (other, _) => out.push(other),
        }
    }
    out
}

/// Removes the first error-bearing argument and returns its error.
pub(crate) fn take_cause(args: Vec<FmtArg>) -> Option<Box<dyn Error + Send + Sync>> {
    args.into_iter().find_map(|arg| match arg {
        FmtArg::Error(err) => Some(err),
        FmtArg::ServiceError(response) => Some(response.error),
        FmtArg::Text(_) => None,
    })
}

/// Formats an error with the calling reporter, `fmt_errorf!(reporter, "...{}...", arg, ...)`.
///
/// Each argument goes through `FmtArg::from`; wrap arbitrary errors with
/// `FmtArg::error`.
#[macro_export]
macro_rules! fmt_errorf {
    ($reporter:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $reporter.fmt_errorf($format, vec![$($crate::FmtArg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled_in_order() {
        let args = vec![FmtArg::from("vpc"), FmtArg::from(3)];
        assert_eq!(interpolate("{} failed {} times", &args), "vpc failed 3 times");
    }

    #[test]
    fn escaped_braces_and_missing_arguments() {
        assert_eq!(interpolate("{{{}}} {}", &[FmtArg::from("x")]), "{x} <missing>");
    }

    #[test]
    fn first_error_wins() {
        let args = vec![
            FmtArg::from("text"),
            FmtArg::error("first"),
            FmtArg::error("second"),
        ];
        assert_eq!(take_cause(args).map(|e| e.to_string()).as_deref(), Some("first"));
    }

    #[test]
    fn service_error_yields_embedded_error() {
        let response = ServiceErrorResponse::new("Forbidden").with_status_code(403);
        let cause = take_cause(vec![FmtArg::from(response)]).unwrap();
        assert_eq!(cause.to_string(), "Forbidden");
    }
}
