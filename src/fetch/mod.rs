//! Network fetch.
//!
//! Issues the single GET request an audit needs and captures the status code
//! and response headers. The body is never read.

use log::debug;

use crate::error_handling::{categorize_reqwest_error, FetchError};
use crate::models::HeaderCollection;

/// Status and headers of the fetched response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    /// HTTP status code of the final response (after redirects)
    pub status: u16,
    /// Response headers, lower-cased names, received order
    pub headers: HeaderCollection,
}

/// Fetches `url` once with the given client.
///
/// Any HTTP status (including 4xx and 5xx) is a successful fetch. Timeouts and
/// redirect limits come from the client configuration.
///
/// # Errors
///
/// Returns a `FetchError` for DNS, connection, TLS, timeout, or protocol
/// failures. Nothing is retried.
pub async fn fetch_response(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedResponse, FetchError> {
    debug!("Sending GET request to {url}");

    let response = client.get(url).send().await.map_err(|e| {
        let err = categorize_reqwest_error(&e);
        debug!("Request to {url} failed: {err}");
        err
    })?;

    let status = response.status().as_u16();
    let headers = HeaderCollection::from(response.headers());

    debug!(
        "Received status {} with {} header field(s) from {} (final URL {})",
        status,
        headers.len(),
        url,
        response.url()
    );

    Ok(FetchedResponse { status, headers })
}
