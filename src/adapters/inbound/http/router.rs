use super::handlers;
use crate::ports::inbound::ComponentInfoPort;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub port: Arc<dyn ComponentInfoPort>,
}

/// Builds the router serving the scanner integration endpoints.
pub fn create_router(port: Arc<dyn ComponentInfoPort>) -> Router {
    Router::new()
        .route("/api/checkauth", get(handlers::check_auth))
        .route(
            "/api/componentinfo",
            get(handlers::component_info).post(handlers::component_info),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { port })
}
