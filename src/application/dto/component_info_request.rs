use crate::component_resolution::domain::ComponentQuery;
use crate::shared::error::ProviderError;
use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

/// ComponentInfoRequest - body of a component info call
///
/// `context` is opaque scanner metadata, usually a string. It is accepted
/// and kept but plays no part in resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentInfoRequest {
    #[serde(
        rename = "Components",
        alias = "components",
        default,
        deserialize_with = "null_as_default"
    )]
    pub components: Vec<ComponentQuery>,

    #[serde(
        rename = "Context",
        alias = "context",
        default,
        deserialize_with = "null_as_default"
    )]
    pub context: serde_json::Value,
}

impl ComponentInfoRequest {
    pub fn new(components: Vec<ComponentQuery>) -> Self {
        Self {
            components,
            context: serde_json::Value::Null,
        }
    }

    /// Decodes a request body.
    ///
    /// An empty body is read as a request with no components.
    pub fn from_json(body: &[u8]) -> Result<Self, ProviderError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| ProviderError::InvalidRequest {
            details: e.to_string(),
        })
    }
}
