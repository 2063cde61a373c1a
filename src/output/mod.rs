//! Rendering of a [`CheckReport`].
//!
//! The pretty format is the default and its lines are a stable contract:
//! a `Checked <N> governed docs in <target>` summary, then either
//! `All frontmatter valid.` or an error count followed by one
//! `  <path>: <message>` line per error.  JSON carries the same data plus a
//! per-[`ErrorKind`](crate::finding::ErrorKind) summary, and SARIF maps each
//! error to an error-level result under its rule id so CI code-scanning
//! views can annotate the offending file.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::CheckReport;

/// Supported output formats for check reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain summary followed by one line per error.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`CheckReport`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_frontmatter::output::{format_report, OutputFormat};
/// # use oxidized_frontmatter::finding::CheckReport;
/// # fn example(report: &CheckReport) {
/// let json = format_report(report, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &CheckReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
