use std::error::Error;
use std::fmt;

use ibmflex_types::Severity;
use serde::Serialize;

use crate::component::ComponentInfo;
use crate::identity::create_id_hash;
use crate::ordered::OrderedMaps;
use crate::problem::OrderableProblem;

/// Failure reported by an SDK client call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkProblem {
    /// SDK the failure came from.
    pub component: ComponentInfo,
    /// SDK error message.
    pub summary: String,
    /// Severity.
    pub severity: Severity,
    /// API operation identifier, e.g. `create_vpc`.
    pub operation_id: String,
    /// HTTP status code, when the failure came from a response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Service error code from the response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Extra text distinguishing otherwise identical failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
}

impl SdkProblem {
    /// Error-severity SDK problem without HTTP details.
    pub fn new(
        component: ComponentInfo,
        summary: impl Into<String>,
        operation_id: impl Into<String>,
    ) -> Self {
        Self {
            component,
            summary: summary.into(),
            severity: Severity::Error,
            operation_id: operation_id.into(),
            status_code: None,
            error_code: None,
            discriminator: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Sets the service error code.
    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    /// Sets the discriminator.
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    fn id_prefix(&self) -> &'static str {
        if self.status_code.is_some() {
            "http"
        } else {
            "sdk"
        }
    }
}

impl OrderableProblem for SdkProblem {
    fn id(&self) -> String {
        let severity = self.severity.to_string();
        let status = self.status_code.map(|c| c.to_string()).unwrap_or_default();
        create_id_hash(
            self.id_prefix(),
            &[
                self.component.name.as_str(),
                severity.as_str(),
                self.operation_id.as_str(),
                status.as_str(),
                self.error_code.as_deref().unwrap_or_default(),
                self.discriminator.as_deref().unwrap_or_default(),
            ],
        )
    }

    fn console_ordered_maps(&self) -> OrderedMaps {
        let mut maps = OrderedMaps::new();
        maps.add("id", self.id());
        maps.add("summary", self.summary.as_str());
        maps.add("severity", self.severity.to_string());
        maps.add("operation_id", self.operation_id.as_str());
        if let Some(status_code) = self.status_code {
            maps.add("status_code", u64::from(status_code));
        }
        if let Some(error_code) = &self.error_code {
            maps.add("error_code", error_code.as_str());
        }
        maps.add("component", self.component.to_ordered_maps());
        maps
    }

    fn debug_ordered_maps(&self) -> OrderedMaps {
        self.console_ordered_maps()
    }
}

impl fmt::Display for SdkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

impl Error for SdkProblem {}

/// Hand-written wrapper pairing an SDK error with the HTTP response it came from.
#[derive(Debug)]
pub struct ServiceErrorResponse {
    /// Embedded SDK error.
    pub error: Box<dyn Error + Send + Sync>,
    /// HTTP status code of the response.
    pub status_code: Option<u16>,
    /// Decoded response body.
    pub result: Option<serde_json::Value>,
}

impl ServiceErrorResponse {
    /// Wraps `error` without response details.
    pub fn new(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            error: error.into(),
            status_code: None,
            result: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Sets the response body.
    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(result);
        self
    }
}

impl fmt::Display for ServiceErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(status_code) = self.status_code {
            write!(f, " (status code {})", status_code)?;
        }
        if let Some(result) = &self.result {
            write!(f, "\n{}", result)?;
        }
        Ok(())
    }
}

impl Error for ServiceErrorResponse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sdk() -> ComponentInfo {
        ComponentInfo::new("github.com/IBM/vpc-go-sdk", "0.60.0")
    }

    #[test]
    fn prefix_follows_status_code() {
        let plain = SdkProblem::new(sdk(), "no endpoint", "create_vpc");
        assert!(plain.id().starts_with("sdk-"));
        let http = plain.clone().with_status_code(404);
        assert!(http.id().starts_with("http-"));
        assert_ne!(http.id(), http.clone().with_error_code("not_found").id());
    }

    #[test]
    fn console_report_lists_http_details() {
        let problem = SdkProblem::new(sdk(), "not found", "get_vpc")
            .with_status_code(404)
            .with_error_code("not_found");
        let keys: Vec<String> = problem
            .console_ordered_maps()
            .keys()
            .map(str::to_string)
            .collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "summary",
                "severity",
                "operation_id",
                "status_code",
                "error_code",
                "component"
            ]
        );
    }

    #[test]
    fn service_error_displays_response() {
        let response = ServiceErrorResponse::new("Not Found")
            .with_status_code(404)
            .with_result(json!({"errors": []}));
        assert_eq!(response.to_string(), "Not Found (status code 404)\n{\"errors\":[]}");
        assert!(response.source().is_some());
    }
}
