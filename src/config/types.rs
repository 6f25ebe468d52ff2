//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_URL_LENGTH};
use crate::config::headers::HeaderRegistry;
use crate::error_handling::ArgumentError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Layout of the serialized findings report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Two-space indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Audit a site, report on stdout
/// header_audit https://example.com
///
/// # Longer timeout, save the report
/// header_audit --url https://example.com --timeout 2.5 --json-out report.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "header_audit",
    version,
    about = "Fetches a URL and reports which HTTP security headers are present or missing."
)]
pub struct Opt {
    /// Target URL (must be a site you own or are authorized to test)
    #[arg(value_name = "URL", required_unless_present = "url_flag")]
    pub target: Option<String>,

    /// Target URL, as a flag
    #[arg(long = "url", value_name = "URL", conflicts_with = "target")]
    pub url_flag: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Write the JSON report to this file instead of stdout
    #[arg(short = 'o', long = "json-out", visible_alias = "output", value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Also report deprecated headers (X-XSS-Protection, Expect-CT, Public-Key-Pins)
    #[arg(long)]
    pub include_legacy: bool,

    /// Emit single-line JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Do not print the authorized-use notice
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// The target URL, whichever way it was given.
    pub fn target_url(&self) -> Option<&str> {
        self.target.as_deref().or(self.url_flag.as_deref())
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```
/// use header_audit::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     timeout_secs: 2.5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL, reported exactly as given
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: f64,

    /// Report destination (stdout when `None`)
    pub output: Option<PathBuf>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Append deprecated headers to the registry
    pub include_legacy: bool,

    /// Report layout
    pub output_style: OutputStyle,

    /// Suppress the authorized-use notice
    pub quiet: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            include_legacy: false,
            output_style: OutputStyle::Pretty,
            quiet: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let url = opt.target_url().unwrap_or_default().to_string();
        Self {
            url,
            timeout_secs: opt.timeout,
            output: opt.json_out,
            user_agent: opt.user_agent,
            include_legacy: opt.include_legacy,
            output_style: if opt.compact {
                OutputStyle::Compact
            } else {
                OutputStyle::Pretty
            },
            quiet: opt.quiet,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

impl Config {
    /// Checks the target URL and timeout.
    ///
    /// The URL must be non-empty, at most `MAX_URL_LENGTH` characters, parseable,
    /// and use http or https. It is only inspected here; the report carries the
    /// string exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns the first `ArgumentError` found.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.url.trim().is_empty() {
            return Err(ArgumentError::EmptyUrl);
        }
        let length = self.url.chars().count();
        if length > MAX_URL_LENGTH {
            return Err(ArgumentError::UrlTooLong {
                length,
                max: MAX_URL_LENGTH,
            });
        }
        let parsed = url::Url::parse(&self.url).map_err(|e| ArgumentError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ArgumentError::UnsupportedScheme(other.to_string())),
        }
        self.timeout()?;
        Ok(())
    }

    /// The request timeout as a `Duration`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::InvalidTimeout` for zero, negative, NaN, or
    /// infinite values.
    pub fn timeout(&self) -> Result<Duration, ArgumentError> {
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(ArgumentError::InvalidTimeout(self.timeout_secs));
        }
        Duration::try_from_secs_f64(self.timeout_secs)
            .map_err(|_| ArgumentError::InvalidTimeout(self.timeout_secs))
    }

    /// The header registry selected by this configuration.
    pub fn registry(&self) -> HeaderRegistry {
        if self.include_legacy {
            HeaderRegistry::with_legacy()
        } else {
            HeaderRegistry::default()
        }
    }
}
