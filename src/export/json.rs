//! JSON report output.
//!
//! The document has the top-level fields `url`, `status`, `headers`, and
//! `findings`, in that order. Downstream tools rely on both the field order
//! and the lower-case keys.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::config::OutputStyle;
use crate::error_handling::ExportError;
use crate::security::FindingsReport;

/// Serializes a report, with a trailing newline.
///
/// `Pretty` uses two-space indentation, `Compact` a single line.
///
/// # Errors
///
/// Returns `ExportError::Serialize` if serialization fails.
pub fn render_report(report: &FindingsReport, style: OutputStyle) -> Result<String, ExportError> {
    let mut text = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(report)?,
        OutputStyle::Compact => serde_json::to_string(report)?,
    };
    text.push('\n');
    Ok(text)
}

/// Writes a report to `output`, or to stdout when `output` is `None`.
///
/// An existing file is truncated. Parent directories are not created.
///
/// # Errors
///
/// Returns `ExportError` if serialization fails or the destination cannot be
/// created or written.
pub fn write_report(
    report: &FindingsReport,
    output: Option<&Path>,
    style: OutputStyle,
) -> Result<(), ExportError> {
    let text = render_report(report, style)?;

    let destination = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    let write_err = |source: io::Error| ExportError::Write {
        destination: destination.clone(),
        source,
    };

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(BufWriter::new(File::create(path).map_err(write_err)?))
    } else {
        Box::new(io::stdout().lock())
    };

    writer.write_all(text.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    if output.is_some() {
        info!("Report written to {destination}");
    }
    Ok(())
}
