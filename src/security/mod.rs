//! Security header findings.
//!
//! This module turns a response (status code + headers) into a findings report:
//! each header in the registry is classified as present or missing.
//!
//! Reports are serialized by the `export` module.

mod analysis;
mod types;

pub use analysis::evaluate;
pub use types::{Finding, Findings, FindingsReport};
