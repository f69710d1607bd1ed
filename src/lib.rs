//! component-info - license and vulnerability provider for security scanners
//!
//! This library answers a scanner's vendor-integration queries: given
//! component identifiers such as `pypi://requests:2.22.0`, it returns the
//! licenses and vulnerabilities whose version ranges cover each exact
//! version. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`component_resolution`): identifier parsing, version range
//!   matching and result aggregation
//! - **Application Layer** (`application`): Use cases, DTOs and the record snapshot
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): The HTTP server and the JSON record store
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use component_info::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let store = JsonFileRecordStore::new("db.json");
//! let snapshot = std::sync::Arc::new(RecordSnapshot::load(store, false).await?);
//! let service = ComponentInfoService::new("my-api-key", snapshot);
//!
//! let request = ComponentInfoRequest::new(vec![ComponentQuery::new("pypi://requests:2.22.0")]);
//! let response = service.component_info(request).await?;
//! for component in response.components {
//!     println!("{}: {} vulnerabilities", component.component_id, component.vulnerabilities.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod component_resolution;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{create_router, AppState};
    pub use crate::adapters::outbound::filesystem::JsonFileRecordStore;
    pub use crate::application::dto::{CheckAuthResponse, ComponentInfoRequest};
    pub use crate::application::use_cases::{CheckAuthUseCase, ResolveComponentsUseCase};
    pub use crate::application::{ComponentInfoService, RecordSnapshot};
    pub use crate::component_resolution::domain::{
        ComponentQuery, ComponentRecord, ComponentResult, LicenseEntry, ParsedComponent,
        ResolutionResponse, VulnerabilityEntry, PROVIDER_NAME,
    };
    pub use crate::component_resolution::services::{ComponentResolver, VersionMatcher};
    pub use crate::ports::inbound::ComponentInfoPort;
    pub use crate::ports::outbound::RecordStore;
    pub use crate::shared::error::ProviderError;
    pub use crate::shared::Result;
}
