//! Security header evaluation.

use crate::config::HeaderRegistry;
use crate::models::HeaderCollection;

use super::types::{Finding, Findings, FindingsReport};

/// Classifies every registry header as present or missing and assembles the report.
///
/// A header is `present` when the response carried a field whose lower-cased
/// name equals the registry entry exactly. Values are never inspected, so an
/// empty or malformed value still counts as present. The report holds one
/// finding per registry entry, in registry order, no matter how many other
/// headers the server sent.
///
/// This is a pure function: no I/O, no failure modes, and identical inputs
/// always produce identical reports.
///
/// # Arguments
///
/// * `url` - Target URL, copied into the report as given
/// * `status` - HTTP status code, accepted as-is
/// * `headers` - Response headers (may be empty)
/// * `registry` - Headers to classify
///
/// # Examples
///
/// ```
/// use header_audit::{evaluate, Finding, HeaderCollection, HeaderRegistry};
///
/// let headers: HeaderCollection = [("X-Content-Type-Options", "nosniff")].into_iter().collect();
/// let report = evaluate("https://example.com", 200, &headers, &HeaderRegistry::default());
///
/// assert_eq!(report.findings().get("x-content-type-options"), Some(Finding::Present));
/// assert_eq!(report.findings().get("content-security-policy"), Some(Finding::Missing));
/// ```
pub fn evaluate(
    url: &str,
    status: u16,
    headers: &HeaderCollection,
    registry: &HeaderRegistry,
) -> FindingsReport {
    let findings = registry
        .iter()
        .map(|name| {
            let finding = if headers.iter().any(|(n, _)| n == name) {
                Finding::Present
            } else {
                Finding::Missing
            };
            (name.to_string(), finding)
        })
        .collect();

    FindingsReport::new(
        url.to_string(),
        status,
        headers.clone(),
        Findings::from_entries(findings),
    )
}
