//! Error categorization.
//!
//! This module maps transport errors onto the `FetchError` taxonomy.

use std::error::Error as StdError;
use std::io;

use super::types::FetchError;

// Lower-cased fragments of messages found in reqwest/hyper/rustls error chains
const DNS_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "no such host",
    "nodename nor servname",
    "temporary failure in name resolution",
];
const TLS_MARKERS: &[&str] = &[
    "certificate",
    "tls handshake",
    "handshake failure",
    "invalid peer",
    "unknownissuer",
    "received fatal alert",
    "invalid content type",
];
const MALFORMED_MARKERS: &[&str] = &[
    "invalid http",
    "message head",
    "parse error",
    "malformed",
    "connection closed before message completed",
    "incomplete message",
    "unexpected eof",
];

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// reqwest's own classification is checked first (timeouts, decode and body
/// errors). Connect and request errors are refined by walking the source chain,
/// since DNS, refused connections, and TLS failures all surface as connect
/// errors.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `FetchError`, carrying the full error chain as its message.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    let message = error_chain_message(error);
    let lowered = message.to_lowercase();

    if error.is_timeout() {
        return FetchError::Timeout(message);
    }
    if error.is_decode() || error.is_body() {
        return FetchError::MalformedResponse(message);
    }
    if chain_has_io_kind(error, io::ErrorKind::ConnectionRefused)
        || lowered.contains("connection refused")
    {
        return FetchError::ConnectionRefused(message);
    }
    if DNS_MARKERS.iter().any(|m| lowered.contains(m)) {
        return FetchError::Dns(message);
    }
    if TLS_MARKERS.iter().any(|m| lowered.contains(m)) {
        return FetchError::Tls(message);
    }
    if chain_has_io_kind(error, io::ErrorKind::TimedOut) || lowered.contains("timed out") {
        return FetchError::Timeout(message);
    }
    if MALFORMED_MARKERS.iter().any(|m| lowered.contains(m)) {
        return FetchError::MalformedResponse(message);
    }
    FetchError::Other(message)
}

/// Joins an error and all of its sources with `": "`.
fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(source) = current {
        let text = source.to_string();
        // hyper and reqwest sometimes repeat the inner message verbatim
        if parts.last().map_or(true, |last| !last.contains(&text)) {
            parts.push(text);
        }
        current = source.source();
    }
    parts.join(": ")
}

fn chain_has_io_kind(error: &(dyn StdError + 'static), kind: io::ErrorKind) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() == kind {
                return true;
            }
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapper {
        msg: &'static str,
        inner: Option<io::Error>,
    }

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.msg)
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.inner.as_ref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_error_chain_message_joins_sources() {
        let err = Wrapper {
            msg: "error sending request",
            inner: Some(io::Error::other("tcp connect error")),
        };
        assert_eq!(
            error_chain_message(&err),
            "error sending request: tcp connect error"
        );
    }

    #[test]
    fn test_error_chain_message_skips_repeated_text() {
        let err = Wrapper {
            msg: "client error (Connect): tcp connect error",
            inner: Some(io::Error::other("tcp connect error")),
        };
        assert_eq!(
            error_chain_message(&err),
            "client error (Connect): tcp connect error"
        );
    }

    #[test]
    fn test_chain_has_io_kind() {
        let err = Wrapper {
            msg: "error sending request",
            inner: Some(io::Error::from(io::ErrorKind::ConnectionRefused)),
        };
        assert!(chain_has_io_kind(&err, io::ErrorKind::ConnectionRefused));
        assert!(!chain_has_io_kind(&err, io::ErrorKind::TimedOut));

        let bare = Wrapper {
            msg: "no source",
            inner: None,
        };
        assert!(!chain_has_io_kind(&bare, io::ErrorKind::ConnectionRefused));
    }
}
