//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with the check metadata, a
//! per-kind summary, and every validation error.

use crate::finding::{CheckReport, ValidationError};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    target: &'a str,
    check_timestamp: &'a str,
    passed: bool,
    files_scanned: usize,
    checked: usize,
    summary: Summary,
    errors: &'a [ValidationError],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    io: usize,
    structural: usize,
    completeness: usize,
    format: usize,
}

/// Formats a [`CheckReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &CheckReport) -> String {
    let (io, structural, completeness, format) = report.count_by_kind();
    let output = JsonOutput {
        target: &report.target,
        check_timestamp: &report.check_timestamp,
        passed: report.passed,
        files_scanned: report.files_scanned,
        checked: report.checked,
        summary: Summary {
            errors: report.errors.len(),
            io,
            structural,
            completeness,
            format,
        },
        errors: &report.errors,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
