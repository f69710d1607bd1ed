use crate::application::dto::ComponentInfoRequest;
use crate::application::RecordSnapshot;
use crate::component_resolution::domain::{ParsedComponent, ResolutionResponse};
use crate::component_resolution::services::ComponentResolver;
use crate::ports::outbound::RecordStore;
use crate::shared::Result;
use std::sync::Arc;

/// ResolveComponentsUseCase - resolves a component info request
///
/// Takes the record set for the request from the snapshot and hands the
/// queries to the domain resolver.
///
/// # Type Parameters
/// * `S` - RecordStore implementation backing the snapshot
pub struct ResolveComponentsUseCase<S> {
    snapshot: Arc<RecordSnapshot<S>>,
}

impl<S: RecordStore> ResolveComponentsUseCase<S> {
    pub fn new(snapshot: Arc<RecordSnapshot<S>>) -> Self {
        Self { snapshot }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `request` - Decoded request carrying the component queries
    ///
    /// # Returns
    /// One result per query, in request order
    pub async fn execute(&self, request: ComponentInfoRequest) -> Result<ResolutionResponse> {
        for query in &request.components {
            if ParsedComponent::parse(query.component_id()).is_malformed() {
                tracing::debug!(
                    component_id = query.component_id(),
                    "Component identifier has no version separator, it cannot match any record"
                );
            }
        }

        let records = self.snapshot.for_request().await?;
        let response = ComponentResolver::resolve(&request.components, &records)?;

        tracing::info!(
            requested = request.components.len(),
            matched = response.matched_count(),
            "Resolved components"
        );
        Ok(response)
    }
}
