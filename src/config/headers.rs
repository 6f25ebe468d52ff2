//! Security header registry.
//!
//! This module defines the canonical (lower-cased) names of the response headers
//! the audit looks for, and the [`HeaderRegistry`] value that carries an ordered
//! selection of them into the evaluator.

// Security header names
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";

// Deprecated headers, still reported by `--include-legacy`
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";
/// Expect-CT header
pub const HEADER_EXPECT_CT: &str = "expect-ct";
/// Public-Key-Pins header
pub const HEADER_PUBLIC_KEY_PINS: &str = "public-key-pins";

/// Default security headers, in report order.
pub const SECURITY_HEADERS: &[&str] = &[
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];

/// Deprecated security headers appended after [`SECURITY_HEADERS`] by
/// [`HeaderRegistry::with_legacy`].
pub const LEGACY_SECURITY_HEADERS: &[&str] = &[
    HEADER_X_XSS_PROTECTION,
    HEADER_EXPECT_CT,
    HEADER_PUBLIC_KEY_PINS,
];

/// Ordered, duplicate-free list of canonical security header names.
///
/// The registry is built once and never mutated. Its order is the order in
/// which findings appear in a report.
///
/// # Examples
///
/// ```
/// use header_audit::HeaderRegistry;
///
/// let registry = HeaderRegistry::default();
/// assert_eq!(registry.len(), 6);
/// assert!(registry.contains("X-Frame-Options"));
///
/// let custom = HeaderRegistry::new(["X-Frame-Options", "x-frame-options", "Server"]);
/// assert_eq!(custom.iter().collect::<Vec<_>>(), vec!["x-frame-options", "server"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRegistry {
    entries: Vec<String>,
}

impl HeaderRegistry {
    /// Builds a registry from arbitrary header names.
    ///
    /// Names are lower-cased; later duplicates (after lower-casing) are dropped
    /// so every entry stays unique while the first occurrence keeps its position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for name in names {
            let canonical = name.as_ref().to_ascii_lowercase();
            if !entries.contains(&canonical) {
                entries.push(canonical);
            }
        }
        Self { entries }
    }

    /// The six default headers followed by the deprecated ones.
    pub fn with_legacy() -> Self {
        Self::new(SECURITY_HEADERS.iter().chain(LEGACY_SECURITY_HEADERS))
    }

    /// Iterates over canonical names in report order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HeaderRegistry {
    fn default() -> Self {
        Self::new(SECURITY_HEADERS)
    }
}
