/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod component_info_service;
pub mod dto;
pub mod record_snapshot;
pub mod use_cases;

pub use component_info_service::ComponentInfoService;
pub use record_snapshot::RecordSnapshot;
