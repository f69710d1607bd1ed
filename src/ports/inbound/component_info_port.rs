use crate::application::dto::{CheckAuthResponse, ComponentInfoRequest};
use crate::component_resolution::domain::ResolutionResponse;
use crate::shared::Result;
use async_trait::async_trait;

/// ComponentInfoPort - Inbound port for the scanner integration
///
/// This port defines what the HTTP adapter needs from the application:
/// API key validation and component resolution.
#[async_trait]
pub trait ComponentInfoPort: Send + Sync {
    /// Validates the API key presented by the caller
    ///
    /// # Arguments
    /// * `api_key` - The presented key, or `None` when the header is absent
    ///
    /// # Returns
    /// A response stating whether the key is valid. Never fails.
    fn check_auth(&self, api_key: Option<&str>) -> CheckAuthResponse;

    /// Returns true if `api_key` matches the configured key
    fn is_authorized(&self, api_key: Option<&str>) -> bool {
        self.check_auth(api_key).valid
    }

    /// Resolves the components of a request against the record store
    ///
    /// # Arguments
    /// * `request` - The decoded component info request
    ///
    /// # Returns
    /// One result per requested component, in request order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The record store cannot be loaded (per-request reload mode)
    /// - A stored version range or a queried version cannot be parsed
    async fn component_info(&self, request: ComponentInfoRequest) -> Result<ResolutionResponse>;
}
