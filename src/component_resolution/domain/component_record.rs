use crate::shared::serde_ext::null_as_default;
use serde::{Deserialize, Serialize};

/// Licenses declared for every version matching `version_range`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseEntry {
    #[serde(
        rename = "Version",
        alias = "version",
        default,
        deserialize_with = "null_as_default"
    )]
    pub version_range: String,

    #[serde(
        rename = "Licenses",
        alias = "licenses",
        default,
        deserialize_with = "null_as_default"
    )]
    pub licenses: Vec<String>,
}

impl LicenseEntry {
    pub fn new(version_range: impl Into<String>, licenses: Vec<String>) -> Self {
        Self {
            version_range: version_range.into(),
            licenses,
        }
    }
}

/// A vulnerability affecting every version matching `version_range`
///
/// Field names on the wire follow the scanner integration contract, which
/// is also the record store format. The same shape is echoed back in
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VulnerabilityEntry {
    #[serde(rename = "CVE", alias = "cve", default, deserialize_with = "null_as_default")]
    pub cve: String,

    #[serde(
        rename = "Version",
        alias = "version",
        default,
        deserialize_with = "null_as_default"
    )]
    pub version_range: String,

    #[serde(rename = "Type", alias = "type", default, deserialize_with = "null_as_default")]
    pub vulnerability_type: String,

    #[serde(
        rename = "source_id",
        alias = "SourceID",
        alias = "sourceId",
        default,
        deserialize_with = "null_as_default"
    )]
    pub source_id: String,

    #[serde(
        rename = "Summary",
        alias = "summary",
        default,
        deserialize_with = "null_as_default"
    )]
    pub summary: String,

    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "null_as_default"
    )]
    pub description: String,

    #[serde(
        rename = "cvss_v2",
        alias = "CVSSV2",
        alias = "cvssV2",
        default,
        deserialize_with = "null_as_default"
    )]
    pub cvss_v2: String,

    #[serde(rename = "URL", alias = "url", default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(
        rename = "publish_date",
        alias = "PublishDate",
        alias = "publishDate",
        default,
        deserialize_with = "null_as_default"
    )]
    pub publish_date: String,

    #[serde(
        rename = "References",
        alias = "references",
        default,
        deserialize_with = "null_as_default"
    )]
    pub references: Vec<String>,
}

impl VulnerabilityEntry {
    /// Creates an entry with only the identifying fields set.
    pub fn new(cve: impl Into<String>, version_range: impl Into<String>) -> Self {
        Self {
            cve: cve.into(),
            version_range: version_range.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// ComponentRecord - stored license and vulnerability data for one component name
///
/// Records are keyed by the version-less component name
/// (e.g. `pypi://requests`) and never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(
        rename = "component_id",
        alias = "ComponentID",
        alias = "name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub name: String,

    #[serde(
        rename = "Licenses",
        alias = "licenses",
        default,
        deserialize_with = "null_as_default"
    )]
    pub license_entries: Vec<LicenseEntry>,

    #[serde(
        rename = "Vulnerabilities",
        alias = "vulnerabilities",
        default,
        deserialize_with = "null_as_default"
    )]
    pub vulnerability_entries: Vec<VulnerabilityEntry>,
}

impl ComponentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license_entries: Vec::new(),
            vulnerability_entries: Vec::new(),
        }
    }

    pub fn with_license(mut self, entry: LicenseEntry) -> Self {
        self.license_entries.push(entry);
        self
    }

    pub fn with_vulnerability(mut self, entry: VulnerabilityEntry) -> Self {
        self.vulnerability_entries.push(entry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_record_deserialize_store_format() {
        let json = r#"{
            "component_id": "pypi://requests",
            "Licenses": [{"Version": ">=2.0.0", "Licenses": ["Apache-2.0"]}],
            "Vulnerabilities": [{
                "CVE": "CVE-2023-32681",
                "Version": "<2.31.0",
                "Type": "security",
                "source_id": "GHSA-j8r2-6x86-q33q",
                "Summary": "Proxy-Authorization header leak",
                "Description": "Requests leaks proxy credentials on redirect",
                "cvss_v2": "6.1",
                "URL": "https://nvd.nist.gov/vuln/detail/CVE-2023-32681",
                "publish_date": "2023-05-26",
                "References": ["https://github.com/psf/requests/pull/6447"]
            }]
        }"#;

        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "pypi://requests");
        assert_eq!(record.license_entries.len(), 1);
        assert_eq!(record.license_entries[0].version_range, ">=2.0.0");
        assert_eq!(record.license_entries[0].licenses, vec!["Apache-2.0"]);

        let vuln = &record.vulnerability_entries[0];
        assert_eq!(vuln.cve, "CVE-2023-32681");
        assert_eq!(vuln.version_range, "<2.31.0");
        assert_eq!(vuln.vulnerability_type, "security");
        assert_eq!(vuln.source_id, "GHSA-j8r2-6x86-q33q");
        assert_eq!(vuln.cvss_v2, "6.1");
        assert_eq!(vuln.publish_date, "2023-05-26");
        assert_eq!(vuln.references.len(), 1);
    }

    #[test]
    fn test_component_record_missing_and_null_fields_default() {
        let json = r#"{"component_id": "npm://lodash", "Licenses": null}"#;
        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "npm://lodash");
        assert!(record.license_entries.is_empty());
        assert!(record.vulnerability_entries.is_empty());
    }

    #[test]
    fn test_component_record_lowercase_aliases() {
        let json = r#"{
            "name": "npm://lodash",
            "licenses": [{"version": "*", "licenses": ["MIT"]}],
            "vulnerabilities": [{"cve": "CVE-2021-23337", "version": "<4.17.21", "references": null}]
        }"#;
        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "npm://lodash");
        assert_eq!(record.license_entries[0].licenses, vec!["MIT"]);
        assert_eq!(record.vulnerability_entries[0].cve, "CVE-2021-23337");
        assert!(record.vulnerability_entries[0].references.is_empty());
    }

    #[test]
    fn test_vulnerability_entry_serializes_wire_names() {
        let entry = VulnerabilityEntry::new("CVE-2020-0001", "<1.0.0").with_summary("bad");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["CVE"], "CVE-2020-0001");
        assert_eq!(value["Version"], "<1.0.0");
        assert_eq!(value["Summary"], "bad");
        assert!(value.get("source_id").is_some());
        assert!(value.get("cvss_v2").is_some());
        assert!(value.get("publish_date").is_some());
    }
}
