use super::error::ApiError;
use super::router::AppState;
use crate::application::dto::{CheckAuthResponse, ComponentInfoRequest};
use crate::component_resolution::domain::ResolutionResponse;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the API key. Header names are case-insensitive, so
/// clients sending `apiKey` match.
pub const API_KEY_HEADER: &str = "apikey";

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Always answers 200; validity is reported in the body.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CheckAuthResponse> {
    let response = state.port.check_auth(presented_key(&headers));
    if !response.valid {
        tracing::warn!(endpoint = "/api/checkauth", "Rejected API key");
    }
    Json(response)
}

pub async fn component_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResolutionResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("component_info", %request_id);

    resolve(state, headers, body).instrument(span).await
}

async fn resolve(
    state: AppState,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResolutionResponse>, ApiError> {
    if !state.port.is_authorized(presented_key(&headers)) {
        tracing::warn!(endpoint = "/api/componentinfo", "Rejected API key");
        return Err(ApiError::unauthorized());
    }

    let request = ComponentInfoRequest::from_json(&body).inspect_err(|e| {
        tracing::warn!("Malformed component info request: {}", e);
    })?;

    match state.port.component_info(request).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!("Component resolution failed: {:#}", err);
            Err(err.into())
        }
    }
}
