use super::VersionMatcher;
use crate::component_resolution::domain::{
    ComponentQuery, ComponentRecord, ComponentResult, ParsedComponent, ResolutionResponse,
};
use crate::shared::error::ProviderError;

/// ComponentResolver - Joins component queries against stored records
///
/// Every query produces exactly one result, in query order. A query joins
/// every record whose name equals the query's name exactly; each license
/// entry and vulnerability entry whose range contains the queried version
/// contributes to the result. Licenses are concatenated without
/// de-duplication.
///
/// A query nothing matched still gets a result: an empty placeholder with
/// no provider tag.
pub struct ComponentResolver;

impl ComponentResolver {
    /// Resolves a batch of queries against a record snapshot
    ///
    /// # Arguments
    /// * `queries` - Component queries in the order the scanner sent them
    /// * `records` - The record snapshot to join against
    ///
    /// # Returns
    /// A response with one result per query, in the same order
    ///
    /// # Errors
    /// Fails the whole batch on the first unparsable version range or
    /// component version encountered for a joined record.
    pub fn resolve(
        queries: &[ComponentQuery],
        records: &[ComponentRecord],
    ) -> Result<ResolutionResponse, ProviderError> {
        let components = queries
            .iter()
            .map(|query| Self::resolve_one(query, records))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolutionResponse::new(components))
    }

    fn resolve_one(
        query: &ComponentQuery,
        records: &[ComponentRecord],
    ) -> Result<ComponentResult, ProviderError> {
        let parsed = ParsedComponent::parse(query.component_id());
        if !parsed.is_joinable() {
            return Ok(ComponentResult::placeholder(query.component_id()));
        }

        let mut licenses = Vec::new();
        let mut vulnerabilities = Vec::new();

        for record in records.iter().filter(|r| r.name == parsed.name()) {
            for entry in &record.license_entries {
                if VersionMatcher::matches(parsed.version(), &entry.version_range)? {
                    licenses.extend(entry.licenses.iter().cloned());
                }
            }

            for entry in &record.vulnerability_entries {
                if VersionMatcher::matches(parsed.version(), &entry.version_range)? {
                    vulnerabilities.push(entry.clone());
                }
            }
        }

        if licenses.is_empty() && vulnerabilities.is_empty() {
            return Ok(ComponentResult::placeholder(query.component_id()));
        }

        Ok(ComponentResult::matched(
            query.component_id(),
            licenses,
            vulnerabilities,
        ))
    }
}
