//! Rule catalogue.
//!
//! Every [`ValidationError`](crate::finding::ValidationError) carries one of
//! these rule ids.  The catalogue feeds `--list-rules` and the SARIF driver.

use crate::finding::ErrorKind;

pub const UNREADABLE_FILE: &str = "frontmatter/unreadable-file";
pub const MISSING_FRONTMATTER: &str = "frontmatter/missing-frontmatter";
pub const MISSING_FIELD: &str = "frontmatter/missing-field";
pub const INVALID_VERSION: &str = "frontmatter/invalid-version";
pub const INVALID_STATUS: &str = "frontmatter/invalid-status";
pub const INVALID_DATE: &str = "frontmatter/invalid-date";

/// Metadata for a single rule.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"frontmatter/missing-field"`).
    pub id: &'static str,
    pub kind: ErrorKind,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns every rule, in the order checks run.
pub fn all_rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: UNREADABLE_FILE,
            kind: ErrorKind::Io,
            message: "File cannot be read as UTF-8 text",
            remediation: "Check file permissions and re-save the file as UTF-8",
        },
        RuleInfo {
            id: MISSING_FRONTMATTER,
            kind: ErrorKind::Structural,
            message: "Document does not start with a '---' delimited frontmatter block",
            remediation: "Add a frontmatter block opened and closed by '---' lines at the top of the file",
        },
        RuleInfo {
            id: MISSING_FIELD,
            kind: ErrorKind::Completeness,
            message: "A required frontmatter field is missing",
            remediation: "Add the field as a 'key: value' line inside the frontmatter block",
        },
        RuleInfo {
            id: INVALID_VERSION,
            kind: ErrorKind::Format,
            message: "Version is not MAJOR.MINOR or MAJOR.MINOR.PATCH",
            remediation: "Use numeric components, e.g. 'version: 1.2' or 'version: 1.2.3'",
        },
        RuleInfo {
            id: INVALID_STATUS,
            kind: ErrorKind::Format,
            message: "Status is not one of the accepted values",
            remediation: "Use an accepted status such as draft, active, or approved",
        },
        RuleInfo {
            id: INVALID_DATE,
            kind: ErrorKind::Format,
            message: "last_updated is not a YYYY-MM-DD date",
            remediation: "Write the date as four-digit year, month, and day, e.g. 2024-01-15",
        },
    ]
}
