//! Human-readable text formatter.
//!
//! The line layout is stable and scripts match on it:
//!
//! ```text
//! Checked 2 governed docs in docs
//!
//! 1 errors found:
//!
//!   docs/b.md: missing required field 'id'
//! ```
//!
//! Only whole header lines are colored, so each `<path>: <message>` line is
//! plain text even on a terminal.

use crate::finding::CheckReport;
use colored::Colorize;

/// Formats a [`CheckReport`] as human-readable text.
pub fn format(report: &CheckReport) -> String {
    let mut out = String::new();

    if report.files_scanned == 0 {
        out.push_str(&format!("No markdown files found in {}\n", report.target));
        return out;
    }

    out.push_str(&format!(
        "Checked {} governed docs in {}\n",
        report.checked, report.target
    ));

    if report.errors.is_empty() {
        out.push_str(&format!("{}\n", "All frontmatter valid.".green()));
        return out;
    }

    out.push_str(&format!(
        "\n{}\n\n",
        format!("{} errors found:", report.errors.len()).red().bold()
    ));
    for error in &report.errors {
        out.push_str(&format!("  {error}\n"));
    }

    out
}
