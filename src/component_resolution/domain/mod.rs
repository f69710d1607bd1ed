pub mod component_query;
pub mod component_record;
pub mod component_result;
pub mod parsed_component;

pub use component_query::ComponentQuery;
pub use component_record::{ComponentRecord, LicenseEntry, VulnerabilityEntry};
pub use component_result::{ComponentResult, ResolutionResponse, PROVIDER_NAME};
pub use parsed_component::ParsedComponent;
