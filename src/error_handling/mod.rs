//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`FetchError`, `ArgumentError`, initialization and export errors)
//! - `CheckError`, the union returned by a check, with its exit-code mapping
//! - Categorization of `reqwest` errors into `FetchError`
//!
//! The evaluator itself never fails; every error here comes from the edges
//! (arguments, network, logger/client setup, report output).

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ArgumentError, CheckError, ExportError, FetchError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EXIT_FETCH_FAILURE, EXIT_INTERNAL_FAILURE, EXIT_INVALID_ARGUMENTS};

    #[test]
    fn test_check_error_exit_codes() {
        assert_eq!(
            CheckError::from(ArgumentError::EmptyUrl).exit_code(),
            EXIT_INVALID_ARGUMENTS
        );
        assert_eq!(
            CheckError::from(FetchError::Timeout("deadline".into())).exit_code(),
            EXIT_FETCH_FAILURE
        );
        let io = std::io::Error::other("disk full");
        let export = ExportError::Write {
            destination: "report.json".into(),
            source: io,
        };
        assert_eq!(CheckError::from(export).exit_code(), EXIT_INTERNAL_FAILURE);
    }

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let codes = [EXIT_FETCH_FAILURE, EXIT_INVALID_ARGUMENTS, EXIT_INTERNAL_FAILURE];
        for code in codes {
            assert_ne!(code, 0);
        }
        assert_ne!(EXIT_FETCH_FAILURE, EXIT_INVALID_ARGUMENTS);
        assert_ne!(EXIT_FETCH_FAILURE, EXIT_INTERNAL_FAILURE);
        assert_ne!(EXIT_INVALID_ARGUMENTS, EXIT_INTERNAL_FAILURE);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArgumentError::UnsupportedScheme("ftp".into()).to_string(),
            "unsupported URL scheme 'ftp' (expected http or https)"
        );
        assert_eq!(
            FetchError::ConnectionRefused("tcp connect error".into()).to_string(),
            "connection refused: tcp connect error"
        );
        assert_eq!(
            CheckError::from(FetchError::Dns("no such host".into())).to_string(),
            "fetch failed: DNS resolution failed: no such host"
        );
    }
}
