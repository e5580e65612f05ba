//! CLI command implementations
//!
//! Each submodule implements one command group. Backend groups return the
//! response body untouched; `main` prints it.

pub mod analytics;
pub mod courses;
pub mod enrollments;
pub mod evaluations;
pub mod materials;
pub mod rag;
pub mod routes;
pub mod students;

use anyhow::Context;
use serde_json::Value;

/// Parse a `--data` argument as a JSON document
pub(crate) fn parse_json(raw: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("--data is not valid JSON: {raw}"))
}
