//! Check orchestration.
//!
//! [`run_check`] is the main entry-point: it collects the markdown files
//! under a target, runs [`check_file`] on each one in path order, and
//! assembles a [`CheckReport`].

use crate::config::Config;
use crate::finding::{CheckReport, ErrorKind, FileOutcome, ValidationError};
use crate::{frontmatter, rules, validate};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Normalizes a target path the way it is displayed and walked: `.`
/// components and trailing separators are dropped, so `./docs/` becomes
/// `docs`.  A path made only of `.` components becomes `.`.
///
/// ```
/// use std::path::Path;
/// use oxidized_frontmatter::check::normalize_target;
///
/// assert_eq!(normalize_target(Path::new("./docs/")), Path::new("docs"));
/// assert_eq!(normalize_target(Path::new("./")), Path::new("."));
/// ```
pub fn normalize_target(target: &Path) -> PathBuf {
    let normalized: PathBuf = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Returns `true` if a file name is excluded from checking: templates
/// (case-insensitive) and dotfiles.
pub fn is_excluded(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.starts_with('.') || name.to_lowercase().contains("template")
}

/// Collects the markdown files to check under `target`.
///
/// A file target yields itself; a directory is walked recursively for `.md`
/// files.  Excluded names (see [`is_excluded`]) are dropped in both cases.
/// The result is sorted by path so output is reproducible.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_frontmatter::check::collect_files;
///
/// for file in collect_files(Path::new("docs")) {
///     println!("{}", file.display());
/// }
/// ```
pub fn collect_files(target: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if target.is_file() {
        vec![target.to_path_buf()]
    } else {
        WalkDir::new(target)
            .into_iter()
            .filter_map(|e| e.ok())
            // Path::is_file follows symlinks, so linked documents are kept.
            .filter(|e| e.path().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
            .collect()
    };

    files.retain(|f| !is_excluded(f));
    files.sort();
    files
}

/// Reads and validates a single file.
///
/// An unreadable file yields a single `cannot read file` error and is not
/// parsed.  A file without frontmatter yields a single `missing YAML
/// frontmatter` error.
pub fn check_file(path: &Path, config: &Config) -> FileOutcome {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            return FileOutcome {
                file: path.to_path_buf(),
                has_frontmatter: false,
                errors: vec![ValidationError::new(
                    path,
                    rules::UNREADABLE_FILE,
                    ErrorKind::Io,
                    format!("cannot read file: {e}"),
                )],
            };
        }
    };

    match frontmatter::extract(&text) {
        Some(fm) => FileOutcome {
            file: path.to_path_buf(),
            has_frontmatter: true,
            errors: validate::validate(&fm, path, config),
        },
        None => FileOutcome {
            file: path.to_path_buf(),
            has_frontmatter: false,
            errors: vec![ValidationError::new(
                path,
                rules::MISSING_FRONTMATTER,
                ErrorKind::Structural,
                "missing YAML frontmatter",
            )],
        },
    }
}

/// Checks every markdown file under `target`.
///
/// The target is normalized first (see [`normalize_target`]), so reported
/// paths never carry a `./` prefix or a doubled separator.
///
/// The caller is expected to have verified that `target` exists; a missing
/// target simply produces a report with no files.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_frontmatter::{check, config::Config};
///
/// let config = Config::load(None).unwrap();
/// let report = check::run_check(Path::new("docs"), &config);
///
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_check(target: &Path, config: &Config) -> CheckReport {
    let target = normalize_target(target);
    let outcomes: Vec<FileOutcome> = collect_files(&target)
        .iter()
        .map(|file| check_file(file, config))
        .collect();

    CheckReport::from_outcomes(&target, outcomes)
}
