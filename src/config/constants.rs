//! Configuration constants.
//!
//! This module defines the defaults and limits used by the CLI and the fetch layer.

/// Default request timeout in seconds (fractional values are allowed on the CLI)
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum number of redirects followed before the fetch fails
pub const MAX_REDIRECTS: usize = 10;

/// Default User-Agent string for the audit request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("header_audit/", env!("CARGO_PKG_VERSION"));

/// Notice printed to stderr before any request is made (suppressed by `--quiet`).
pub const AUTHORIZED_USE_NOTICE: &str =
    "⚠️  Authorized use only. Test only sites you own/control.";

// Process exit codes (0 means a report was produced, however many headers are missing)
/// The target could not be fetched
pub const EXIT_FETCH_FAILURE: i32 = 1;
/// Missing or malformed command-line input (clap uses the same code for usage errors)
pub const EXIT_INVALID_ARGUMENTS: i32 = 2;
/// Logger, HTTP client, or report output could not be set up or written
pub const EXIT_INTERNAL_FAILURE: i32 = 3;
