//! Field validation.
//!
//! [`validate`] is a pure function of the extracted mapping, the file path,
//! and the [`Config`].  It runs two passes and concatenates their results:
//!
//! 1. **Required fields**: one error per configured field absent from the
//!    mapping, in the configured order.
//! 2. **Formats**: `version`, `status` and `last_updated` are checked only
//!    when present, so a missing field is never reported twice.
//!
//! | Rule | Field | Accepted shape |
//! |------|-------|----------------|
//! | `frontmatter/missing-field` | any required | present |
//! | `frontmatter/invalid-version` | `version` | `1.2` or `1.2.3` |
//! | `frontmatter/invalid-status` | `status` | configured set, any case |
//! | `frontmatter/invalid-date` | `last_updated` | `YYYY-MM-DD` |

use crate::config::Config;
use crate::finding::{ErrorKind, ValidationError};
use crate::frontmatter::Frontmatter;
use crate::rules;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").unwrap());

// Shape only: 2024-13-99 is accepted.
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Removes one matching layer of single or double quotes.
///
/// ```
/// use oxidized_frontmatter::validate::strip_quotes;
///
/// assert_eq!(strip_quotes("\"1.2\""), "1.2");
/// assert_eq!(strip_quotes("'draft'"), "draft");
/// assert_eq!(strip_quotes("\"'x'\""), "'x'");
/// assert_eq!(strip_quotes("\"unbalanced'"), "\"unbalanced'");
/// ```
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Validates an extracted frontmatter mapping.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use oxidized_frontmatter::{config::Config, frontmatter, validate};
///
/// let fm = frontmatter::extract(
///     "---\nid: D-1\ntitle: T\nversion: \"1.2.3\"\nstatus: Active\nlast_updated: 2024-01-15\n---\n",
/// )
/// .unwrap();
/// assert!(validate::validate(&fm, Path::new("doc.md"), &Config::default()).is_empty());
/// ```
pub fn validate(fm: &Frontmatter, path: &Path, config: &Config) -> Vec<ValidationError> {
    let mut errors = check_required_fields(fm, path, config);
    errors.extend(check_field_formats(fm, path, config));
    errors
}

/// One error per configured required field missing from `fm`.
pub fn check_required_fields(
    fm: &Frontmatter,
    path: &Path,
    config: &Config,
) -> Vec<ValidationError> {
    config
        .fields
        .required
        .iter()
        .filter(|field| !fm.contains_key(field.as_str()))
        .map(|field| {
            ValidationError::new(
                path,
                rules::MISSING_FIELD,
                ErrorKind::Completeness,
                format!("missing required field '{field}'"),
            )
        })
        .collect()
}

/// Format errors for the fields that are present.
pub fn check_field_formats(fm: &Frontmatter, path: &Path, config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(raw) = fm.get("version") {
        if !RE_VERSION.is_match(strip_quotes(raw)) {
            errors.push(ValidationError::new(
                path,
                rules::INVALID_VERSION,
                ErrorKind::Format,
                format!("invalid version format '{raw}'"),
            ));
        }
    }

    if let Some(raw) = fm.get("status") {
        if !config.is_valid_status(strip_quotes(raw)) {
            let valid = config.status.sorted().join(", ");
            errors.push(ValidationError::new(
                path,
                rules::INVALID_STATUS,
                ErrorKind::Format,
                format!("invalid status '{raw}' (expected: {valid})"),
            ));
        }
    }

    if let Some(raw) = fm.get("last_updated") {
        if !RE_DATE.is_match(strip_quotes(raw)) {
            errors.push(ValidationError::new(
                path,
                rules::INVALID_DATE,
                ErrorKind::Format,
                format!("invalid date '{raw}' (expected YYYY-MM-DD)"),
            ));
        }
    }

    errors
}
