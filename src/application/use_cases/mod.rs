/// Use cases module containing application business logic orchestration
mod check_auth;
mod resolve_components;

pub use check_auth::CheckAuthUseCase;
pub use resolve_components::ResolveComponentsUseCase;
