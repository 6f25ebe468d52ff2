//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The authorized-use notice
//! - Report output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::Context;
use clap::Parser;
use std::process;

use header_audit::config::{AUTHORIZED_USE_NOTICE, EXIT_INTERNAL_FAILURE};
use header_audit::initialization::init_logger_with;
use header_audit::{run_check, write_report, CheckError, Config, Opt};

#[tokio::main]
async fn main() {
    // Usage errors exit with status 2 from inside clap
    let opt = Opt::parse();
    let config = Config::from(opt);

    if let Err(e) = init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")
    {
        eprintln!("header_audit error: {:#}", e);
        process::exit(EXIT_INTERNAL_FAILURE);
    }

    if !config.quiet {
        eprintln!("{AUTHORIZED_USE_NOTICE}");
    }

    let report = match run_check(&config).await {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if let Err(e) = write_report(&report, config.output.as_deref(), config.output_style) {
        fail(CheckError::from(e));
    }
}

/// Prints the error and exits with the code for its class.
fn fail(error: CheckError) -> ! {
    eprintln!("header_audit error: {}", error);
    process::exit(error.exit_code())
}
