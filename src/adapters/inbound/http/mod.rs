/// HTTP adapter exposing the scanner integration endpoints
///
/// - `GET /api/checkauth` - API key check used by the scanner's "Test" button
/// - `GET|POST /api/componentinfo` - component license and vulnerability lookup
mod error;
mod handlers;
mod router;
mod server;

pub use error::ApiError;
pub use handlers::API_KEY_HEADER;
pub use router::{create_router, AppState};
#[cfg(unix)]
pub use server::spawn_reload_on_hangup;
pub use server::{bind, serve};
