/// ParsedComponent value object - a component identifier split into name and version
///
/// The identifier is split at the **last** `:`, so the scheme separator in
/// `pypi://requests:2.22.0` stays part of the name (`pypi://requests`).
/// An identifier without any `:` yields an empty name and an empty version
/// and is flagged as malformed, so it never joins against a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedComponent {
    name: String,
    version: String,
    has_separator: bool,
}

impl ParsedComponent {
    pub fn parse(component_id: &str) -> Self {
        match component_id.rfind(':') {
            Some(index) => Self {
                name: component_id[..index].to_string(),
                version: component_id[index + 1..].to_string(),
                has_separator: true,
            },
            None => Self::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns true when the identifier had no `:` separator at all.
    pub fn is_malformed(&self) -> bool {
        !self.has_separator
    }

    /// Returns true when the identifier can be joined against stored records.
    pub fn is_joinable(&self) -> bool {
        self.has_separator && !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scheme_name_version() {
        let parsed = ParsedComponent::parse("pypi://requests:2.22.0");
        assert_eq!(parsed.name(), "pypi://requests");
        assert_eq!(parsed.version(), "2.22.0");
    }

    #[test]
    fn test_parse_splits_at_last_colon() {
        let parsed = ParsedComponent::parse("gav://org.apache:commons-lang3:3.12.0");
        assert_eq!(parsed.name(), "gav://org.apache:commons-lang3");
        assert_eq!(parsed.version(), "3.12.0");
    }

    #[test]
    fn test_parse_without_colon_is_empty() {
        let parsed = ParsedComponent::parse("notFoundComponent");
        assert_eq!(parsed.name(), "");
        assert_eq!(parsed.version(), "");
        assert!(parsed.is_malformed());
        assert!(!parsed.is_joinable());
    }

    #[test]
    fn test_parse_trailing_colon_has_empty_version() {
        let parsed = ParsedComponent::parse("npm://left-pad:");
        assert_eq!(parsed.name(), "npm://left-pad");
        assert_eq!(parsed.version(), "");
        assert!(!parsed.is_malformed());
        assert!(parsed.is_joinable());
    }

    #[test]
    fn test_parse_scheme_only_colon() {
        // The only colon is the scheme separator.
        let parsed = ParsedComponent::parse("pypi://requests");
        assert_eq!(parsed.name(), "pypi");
        assert_eq!(parsed.version(), "//requests");
    }

    #[test]
    fn test_parse_leading_colon_is_not_joinable() {
        let parsed = ParsedComponent::parse(":1.0.0");
        assert_eq!(parsed.name(), "");
        assert_eq!(parsed.version(), "1.0.0");
        assert!(!parsed.is_malformed());
        assert!(!parsed.is_joinable());
    }
}
