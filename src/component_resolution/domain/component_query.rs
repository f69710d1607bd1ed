use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

/// ComponentQuery value object - one component identifier sent by the scanner
///
/// The identifier has the form `<scheme>://<name>:<version>`. Blob
/// references travel with the query but take no part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentQuery {
    #[serde(
        rename = "component_id",
        alias = "ComponentID",
        alias = "componentId",
        default,
        deserialize_with = "null_as_default"
    )]
    pub component_id: String,

    #[serde(
        rename = "Blobs",
        alias = "blobs",
        default,
        deserialize_with = "null_as_default"
    )]
    pub blobs: Vec<String>,
}

impl ComponentQuery {
    pub fn new(component_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            blobs: Vec::new(),
        }
    }

    pub fn with_blobs(mut self, blobs: Vec<String>) -> Self {
        self.blobs = blobs;
        self
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }
}
