mod component_resolver;
mod version_matcher;

pub use component_resolver::ComponentResolver;
pub use version_matcher::{parse_version, VersionConstraint, VersionMatcher};
