use crate::application::dto::{CheckAuthResponse, ComponentInfoRequest};
use crate::application::use_cases::{CheckAuthUseCase, ResolveComponentsUseCase};
use crate::application::RecordSnapshot;
use crate::component_resolution::domain::ResolutionResponse;
use crate::ports::inbound::ComponentInfoPort;
use crate::ports::outbound::RecordStore;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// ComponentInfoService - application entry point behind the HTTP adapter
///
/// Wires the authentication and resolution use cases to the inbound port.
pub struct ComponentInfoService<S> {
    check_auth: CheckAuthUseCase,
    resolve_components: ResolveComponentsUseCase<S>,
}

impl<S: RecordStore> ComponentInfoService<S> {
    pub fn new(api_key: impl Into<String>, snapshot: Arc<RecordSnapshot<S>>) -> Self {
        Self {
            check_auth: CheckAuthUseCase::new(api_key),
            resolve_components: ResolveComponentsUseCase::new(snapshot),
        }
    }
}

#[async_trait]
impl<S: RecordStore> ComponentInfoPort for ComponentInfoService<S> {
    fn check_auth(&self, api_key: Option<&str>) -> CheckAuthResponse {
        self.check_auth.execute(api_key)
    }

    async fn component_info(&self, request: ComponentInfoRequest) -> Result<ResolutionResponse> {
        self.resolve_components.execute(request).await
    }
}
