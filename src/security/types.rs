//! Findings report types.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::models::HeaderCollection;

/// Verdict for one registry header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Finding {
    /// The response carried a field with this name (value not inspected)
    Present,
    /// No field with this name was received
    Missing,
}

/// Ordered mapping from registry header name to verdict.
///
/// Holds exactly one entry per registry entry, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    entries: Vec<(String, Finding)>,
}

impl Findings {
    pub(crate) fn from_entries(entries: Vec<(String, Finding)>) -> Self {
        Self { entries }
    }

    /// Verdict for `name` (case-insensitive), if it is in the registry.
    pub fn get(&self, name: &str) -> Option<Finding> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, f)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Finding)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), *f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Findings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, finding) in &self.entries {
            map.serialize_entry(name, finding)?;
        }
        map.end()
    }
}

/// Result of auditing one response.
///
/// Serializes to `{"url", "status", "headers", "findings"}` in that order.
/// Built only by [`evaluate`](crate::evaluate) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingsReport {
    url: String,
    status: u16,
    headers: HeaderCollection,
    findings: Findings,
}

impl FindingsReport {
    pub(crate) fn new(
        url: String,
        status: u16,
        headers: HeaderCollection,
        findings: Findings,
    ) -> Self {
        Self {
            url,
            status,
            headers,
            findings,
        }
    }

    /// Target URL exactly as supplied by the caller.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    /// Registry headers the response lacked, in registry order.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.with_verdict(Finding::Missing)
    }

    /// Registry headers the response carried, in registry order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.with_verdict(Finding::Present)
    }

    fn with_verdict(&self, verdict: Finding) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |(_, f)| *f == verdict)
            .map(|(n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_finding_wire_names() {
        assert_eq!(serde_json::to_string(&Finding::Present).unwrap(), "\"present\"");
        assert_eq!(serde_json::to_string(&Finding::Missing).unwrap(), "\"missing\"");
    }

    #[test]
    fn test_finding_display_matches_wire_name() {
        for finding in Finding::iter() {
            let wire = serde_json::to_string(&finding).unwrap();
            assert_eq!(wire, format!("\"{}\"", finding));
            let name: &str = finding.as_ref();
            assert_eq!(name, finding.to_string());
        }
    }

    #[test]
    fn test_findings_lookup_and_order() {
        let findings = Findings::from_entries(vec![
            ("x-frame-options".to_string(), Finding::Missing),
            ("referrer-policy".to_string(), Finding::Present),
        ]);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings.get("X-Frame-Options"), Some(Finding::Missing));
        assert_eq!(findings.get("server"), None);
        assert_eq!(
            serde_json::to_string(&findings).unwrap(),
            r#"{"x-frame-options":"missing","referrer-policy":"present"}"#
        );
    }

    #[test]
    fn test_report_partitions_by_verdict() {
        let report = FindingsReport::new(
            "https://example.com".to_string(),
            200,
            HeaderCollection::new(),
            Findings::from_entries(vec![
                ("strict-transport-security".to_string(), Finding::Present),
                ("content-security-policy".to_string(), Finding::Missing),
                ("x-frame-options".to_string(), Finding::Missing),
            ]),
        );
        assert_eq!(
            report.missing().collect::<Vec<_>>(),
            vec!["content-security-policy", "x-frame-options"]
        );
        assert_eq!(
            report.present().collect::<Vec<_>>(),
            vec!["strict-transport-security"]
        );
    }
}
