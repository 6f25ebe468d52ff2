//! Check orchestration.
//!
//! Validates the configuration, fetches the target once, and evaluates the
//! response against the selected header registry.

use log::info;

use crate::config::{Config, HeaderRegistry};
use crate::error_handling::CheckError;
use crate::fetch::fetch_response;
use crate::initialization::init_client;
use crate::security::{evaluate, FindingsReport};

/// Runs a complete check with the provided configuration.
///
/// This is the main entry point for the library. Either a complete report is
/// returned or an error; there is no partial report. Missing headers are not
/// an error.
///
/// # Errors
///
/// - `CheckError::Argument` if the URL or timeout is invalid
/// - `CheckError::Initialization` if the HTTP client cannot be built
/// - `CheckError::Fetch` if the target cannot be fetched
///
/// # Example
///
/// ```no_run
/// use header_audit::{run_check, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     url: "https://example.com".to_string(),
///     ..Default::default()
/// };
/// let report = run_check(&config).await?;
/// println!("{} headers missing", report.missing().count());
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: &Config) -> Result<FindingsReport, CheckError> {
    config.validate()?;
    let registry = config.registry();
    let client = init_client(config)?;
    check_url(&client, &config.url, &registry).await
}

/// Fetches `url` with an existing client and evaluates the response.
///
/// The URL is not validated here; callers that accept user input should go
/// through [`run_check`].
///
/// # Errors
///
/// Returns `CheckError::Fetch` if the target cannot be fetched.
pub async fn check_url(
    client: &reqwest::Client,
    url: &str,
    registry: &HeaderRegistry,
) -> Result<FindingsReport, CheckError> {
    info!("Checking {} for {} security headers", url, registry.len());

    let response = fetch_response(client, url).await?;
    let report = evaluate(url, response.status, &response.headers, registry);

    log_summary(&report);
    Ok(report)
}

fn log_summary(report: &FindingsReport) {
    let total = report.findings().len();
    let missing: Vec<&str> = report.missing().collect();
    if missing.is_empty() {
        info!("All {} security headers present (status {})", total, report.status());
    } else {
        info!(
            "{} of {} security headers missing: {}",
            missing.len(),
            total,
            missing.join(", ")
        );
    }
}
