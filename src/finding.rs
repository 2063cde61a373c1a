use std::fmt;
use std::path::{Path, PathBuf};

/// Broad category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The file could not be read.
    Io,
    /// The file has no frontmatter block at all.
    Structural,
    /// A required field is missing.
    Completeness,
    /// A field is present but its value is malformed.
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => write!(f, "io"),
            ErrorKind::Structural => write!(f, "structural"),
            ErrorKind::Completeness => write!(f, "completeness"),
            ErrorKind::Format => write!(f, "format"),
        }
    }
}

/// A single problem found in a single file.
///
/// The `message` is what users see; `rule_id` and `kind` exist for the
/// machine-readable output formats.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    pub file: PathBuf,
    pub rule_id: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(file: &Path, rule_id: &str, kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            file: file.to_path_buf(),
            rule_id: rule_id.to_string(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file: PathBuf,
    pub has_frontmatter: bool,
    pub errors: Vec<ValidationError>,
}

impl FileOutcome {
    /// A file counts as governed when it either carries frontmatter or
    /// produced errors.  Files with neither are scanned but not counted.
    pub fn is_governed(&self) -> bool {
        self.has_frontmatter || !self.errors.is_empty()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CheckReport {
    pub target: String,
    pub check_timestamp: String,
    pub files_scanned: usize,
    pub checked: usize,
    pub errors: Vec<ValidationError>,
    pub passed: bool,
}

impl CheckReport {
    pub fn from_outcomes(target: &Path, outcomes: Vec<FileOutcome>) -> Self {
        let files_scanned = outcomes.len();
        let checked = outcomes.iter().filter(|o| o.is_governed()).count();
        let errors: Vec<ValidationError> = outcomes.into_iter().flat_map(|o| o.errors).collect();
        let passed = errors.is_empty();

        CheckReport {
            target: target.display().to_string(),
            check_timestamp: chrono::Utc::now().to_rfc3339(),
            files_scanned,
            checked,
            errors,
            passed,
        }
    }

    /// Count errors per [`ErrorKind`] in a single pass.
    ///
    /// Returns `(io, structural, completeness, format)`.
    pub fn count_by_kind(&self) -> (usize, usize, usize, usize) {
        self.errors
            .iter()
            .fold((0, 0, 0, 0), |(i, s, c, f), e| match e.kind {
                ErrorKind::Io => (i + 1, s, c, f),
                ErrorKind::Structural => (i, s + 1, c, f),
                ErrorKind::Completeness => (i, s, c + 1, f),
                ErrorKind::Format => (i, s, c, f + 1),
            })
    }
}
