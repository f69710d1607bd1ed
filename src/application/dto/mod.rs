/// Data Transfer Objects for application layer
///
/// DTOs carry request and response bodies between the HTTP adapter
/// and the use cases, keeping the domain layer free of wire concerns.
mod check_auth_response;
mod component_info_request;

pub use check_auth_response::{CheckAuthResponse, INVALID_API_KEY_MESSAGE};
pub use component_info_request::ComponentInfoRequest;
