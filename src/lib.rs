//! header_audit library: HTTP security header auditing
//!
//! This library fetches a single URL and reports which recognized security
//! headers (HSTS, CSP, X-Frame-Options, X-Content-Type-Options, Referrer-Policy,
//! Permissions-Policy) the response carries.
//!
//! # Example
//!
//! ```no_run
//! use header_audit::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     timeout_secs: 5.0,
//!     ..Default::default()
//! };
//!
//! let report = run_check(&config).await?;
//! for (header, finding) in report.findings().iter() {
//!     println!("{header}: {finding}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The evaluation step is available on its own and performs no I/O:
//!
//! ```
//! use header_audit::{evaluate, HeaderCollection, HeaderRegistry};
//!
//! let headers: HeaderCollection = [("Strict-Transport-Security", "max-age=31536000")]
//!     .into_iter()
//!     .collect();
//! let report = evaluate("https://example.com", 200, &headers, &HeaderRegistry::default());
//! assert_eq!(report.missing().count(), 5);
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod models;
mod run;
mod security;

pub use config::{Config, HeaderRegistry, LogFormat, LogLevel, Opt, OutputStyle};
pub use error_handling::{
    categorize_reqwest_error, ArgumentError, CheckError, ExportError, FetchError,
    InitializationError,
};
pub use export::{render_report, write_report};
pub use fetch::{fetch_response, FetchedResponse};
pub use models::HeaderCollection;
pub use run::{check_url, run_check};
pub use security::{evaluate, Finding, Findings, FindingsReport};
