use super::VulnerabilityEntry;
use serde::{Deserialize, Serialize};

/// Provider tag attached to every non-empty result
pub const PROVIDER_NAME: &str = "custom-integration-demo";

/// ComponentResult - licenses and vulnerabilities found for one queried component
///
/// `component_id` is always the identifier exactly as queried, version
/// suffix included, so the scanner can correlate results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentResult {
    #[serde(rename = "component_id")]
    pub component_id: String,

    #[serde(rename = "Licenses", default)]
    pub licenses: Vec<String>,

    #[serde(rename = "Provider", default)]
    pub provider: String,

    #[serde(rename = "Vulnerabilities", default)]
    pub vulnerabilities: Vec<VulnerabilityEntry>,
}

impl ComponentResult {
    /// Creates a result tagged with [`PROVIDER_NAME`].
    pub fn matched(
        component_id: impl Into<String>,
        licenses: Vec<String>,
        vulnerabilities: Vec<VulnerabilityEntry>,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            licenses,
            provider: PROVIDER_NAME.to_string(),
            vulnerabilities,
        }
    }

    /// Creates the empty result emitted for a query nothing matched.
    pub fn placeholder(component_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty() && self.vulnerabilities.is_empty()
    }
}

/// ResolutionResponse - one result per query, in query order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionResponse {
    #[serde(rename = "Components", alias = "components", default)]
    pub components: Vec<ComponentResult>,
}

impl ResolutionResponse {
    pub fn new(components: Vec<ComponentResult>) -> Self {
        Self { components }
    }

    /// Number of results carrying at least one license or vulnerability.
    pub fn matched_count(&self) -> usize {
        self.components.iter().filter(|c| !c.is_empty()).count()
    }
}
