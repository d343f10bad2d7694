use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMaps;

/// Module path the provider is published under.
pub const PROVIDER_NAME: &str = "github.com/IBM-Cloud/terraform-provider-ibm";

/// Environment variable overriding the reported provider version.
pub const VERSION_ENV: &str = "IBMCLOUD_PROVIDER_VERSION";

/// Name and version stamped on every problem.
///
/// Built once at startup and handed to [`crate::Reporter::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentInfo {
    /// Component name, part of every identifier.
    pub name: String,
    /// Component version; reported but not hashed.
    pub version: String,
}

impl ComponentInfo {
    /// Component with explicit values.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The provider, at the version this crate was built as.
    pub fn provider() -> Self {
        Self::new(PROVIDER_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// The provider, with the version taken from [`VERSION_ENV`] when set.
    pub fn from_env() -> Self {
        Self::with_version_override(std::env::var(VERSION_ENV).ok())
    }

    /// The provider, with `version` replacing the build version when non-blank.
    pub fn with_version_override(version: Option<String>) -> Self {
        match version.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => {
                tracing::debug!(version = v, "provider version overridden");
                Self::new(PROVIDER_NAME, v)
            }
            _ => Self::provider(),
        }
    }

    /// `{name, version}` report section.
    pub fn to_ordered_maps(&self) -> OrderedMaps {
        let mut maps = OrderedMaps::new();
        maps.add("name", self.name.as_str());
        maps.add("version", self.version.as_str());
        maps
    }
}
