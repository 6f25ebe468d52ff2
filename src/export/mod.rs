//! Report export.
//!
//! Serializes a findings report to JSON and writes it to stdout or a file.

mod json;

pub use json::{render_report, write_report};
