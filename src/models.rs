//! Response header collection.

use reqwest::header::{HeaderMap, SET_COOKIE};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered header fields with lower-case names.
///
/// Names are lower-cased on insertion, so lookups are case-insensitive and the
/// serialized form always uses canonical keys. Values are kept verbatim. Every
/// received field line is stored, in order; repeated names are not merged until
/// serialization.
///
/// # Examples
///
/// ```
/// use header_audit::HeaderCollection;
///
/// let headers: HeaderCollection = [("X-Frame-Options", "DENY")].into_iter().collect();
/// assert!(headers.contains("x-frame-options"));
/// assert_eq!(headers.get("X-FRAME-OPTIONS"), Some("DENY"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    fields: Vec<(String, String)>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field line, lower-casing its name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.push((name.to_ascii_lowercase(), value.into()));
    }

    /// Whether any field has this name (case-insensitive, exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// First value received for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values received for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Field lines in received order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of field lines (repeated names counted separately).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// One entry per distinct name, at the position of its first occurrence.
    /// Repeated field lines are joined with ", ", except `set-cookie`, whose
    /// values may contain commas and are joined with "\n" instead.
    fn combined(&self) -> Vec<(&str, String)> {
        let mut out: Vec<(&str, String)> = Vec::new();
        for (name, value) in &self.fields {
            match out.iter_mut().find(|(n, _)| *n == name.as_str()) {
                Some((_, existing)) => {
                    existing.push_str(field_separator(name));
                    existing.push_str(value);
                }
                None => out.push((name.as_str(), value.clone())),
            }
        }
        out
    }
}

// Header values never contain a line feed, so the joined form splits back exactly
fn field_separator(name: &str) -> &'static str {
    if name == SET_COOKIE.as_str() {
        "\n"
    } else {
        ", "
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderCollection
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

impl From<&HeaderMap> for HeaderCollection {
    /// Copies a reqwest header map. Values that are not valid UTF-8 are
    /// converted lossily rather than dropped.
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| {
                let text = match value.to_str() {
                    Ok(s) => s.to_string(),
                    Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
                };
                (name.as_str(), text)
            })
            .collect()
    }
}

impl Serialize for HeaderCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let combined = self.combined();
        let mut map = serializer.serialize_map(Some(combined.len()))?;
        for (name, value) in &combined {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
