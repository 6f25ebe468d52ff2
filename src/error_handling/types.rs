//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::{EXIT_FETCH_FAILURE, EXIT_INTERNAL_FAILURE, EXIT_INVALID_ARGUMENTS};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Missing or malformed command-line input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("a target URL is required")]
    EmptyUrl,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("URL is {length} characters long (maximum {max})")]
    UrlTooLong { length: usize, max: usize },

    #[error("timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),
}

/// Failure to obtain a response from the target.
///
/// Each variant carries the underlying error message. A fetch error ends the
/// check for that URL; nothing is retried and no partial report is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("TLS handshake failed: {0}")]
    Tls(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("request failed: {0}")]
    Other(String),
}

/// Error types for writing the serialized report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The report could not be serialized.
    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The report could not be written to its destination.
    #[error("Failed to write report to {destination}: {source}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure that ends a check before a report is delivered.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("invalid arguments: {0}")]
    Argument(#[from] ArgumentError),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl CheckError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Argument(_) => EXIT_INVALID_ARGUMENTS,
            CheckError::Fetch(_) => EXIT_FETCH_FAILURE,
            CheckError::Initialization(_) | CheckError::Export(_) => EXIT_INTERNAL_FAILURE,
        }
    }
}
