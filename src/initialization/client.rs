//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client used for the
//! audit request.

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECTS};
use crate::error_handling::{CheckError, InitializationError};

/// Initializes the HTTP client for an audit.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall and connect timeouts from the config
/// - Redirect following enabled (up to `MAX_REDIRECTS` hops)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `CheckError::Argument` if the configured timeout is invalid, or
/// `CheckError::Initialization` if the client cannot be built.
pub fn init_client(config: &Config) -> Result<reqwest::Client, CheckError> {
    let timeout = config.timeout()?;
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .use_rustls_tls()
        .build()
        .map_err(InitializationError::from)?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_bad_timeout() {
        let config = Config {
            url: "https://example.com".to_string(),
            timeout_secs: -3.0,
            ..Default::default()
        };
        assert!(matches!(init_client(&config), Err(CheckError::Argument(_))));
    }
}
