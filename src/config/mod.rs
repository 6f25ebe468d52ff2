//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, exit codes)
//! - The security header registry
//! - CLI option types and the library `Config`

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputStyle};
