use std::path::{Path, PathBuf};

use oxidized_frontmatter::check::{
    check_file, collect_files, is_excluded, normalize_target, run_check,
};
use oxidized_frontmatter::config::Config;
use oxidized_frontmatter::finding::ErrorKind;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const VALID: &str = "---\nid: DOC-1\ntitle: T\nversion: 1.0\nstatus: draft\nlast_updated: 2024-01-15\n---\n# Body\n";

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

// ---------------------------------------------------------------------------
// collect_files
// ---------------------------------------------------------------------------

#[test]
fn collects_markdown_recursively_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.md", VALID);
    write(dir.path(), "a/z.md", VALID);
    write(dir.path(), "a.md", VALID);
    write(dir.path(), "notes.txt", "x");
    write(dir.path(), "upper.MD", VALID);

    let files = collect_files(dir.path());
    assert_eq!(names(&files, dir.path()), vec!["a/z.md", "a.md", "b.md"]);
}

#[test]
fn skips_templates_and_dotfiles() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "doc.md", VALID);
    write(dir.path(), "ADR-TEMPLATE.md", "");
    write(dir.path(), "sub/my_template_v2.md", "");
    write(dir.path(), ".draft.md", "");

    let files = collect_files(dir.path());
    assert_eq!(names(&files, dir.path()), vec!["doc.md"]);
}

#[test]
fn dot_directories_are_still_walked() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".github/guide.md", VALID);

    let files = collect_files(dir.path());
    assert_eq!(names(&files, dir.path()), vec![".github/guide.md"]);
}

#[test]
fn directory_named_md_is_not_collected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("folder.md")).unwrap();
    assert!(collect_files(dir.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_markdown_is_collected() {
    let dir = tempfile::tempdir().unwrap();
    let real = write(dir.path(), "store/real.txt", VALID);
    std::fs::create_dir_all(dir.path().join("docs")).unwrap();
    std::os::unix::fs::symlink(&real, dir.path().join("docs/link.md")).unwrap();

    let docs = dir.path().join("docs");
    let files = collect_files(&docs);
    assert_eq!(names(&files, &docs), vec!["link.md"]);

    let report = run_check(&docs, &Config::default());
    assert_eq!(report.checked, 1);
    assert!(report.passed, "unexpected errors: {:?}", report.errors);
}

#[test]
fn single_file_target_is_collected_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "README.markdown", VALID);
    assert_eq!(collect_files(&file), vec![file]);
}

#[test]
fn single_template_file_target_is_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "doc-template.md", VALID);
    assert!(collect_files(&file).is_empty());
}

#[test]
fn exclusion_is_by_file_name_only() {
    assert!(is_excluded(Path::new("docs/Template.md")));
    assert!(is_excluded(Path::new("docs/.hidden.md")));
    assert!(!is_excluded(Path::new("templates/guide.md")));
}

// ---------------------------------------------------------------------------
// check_file
// ---------------------------------------------------------------------------

#[test]
fn valid_file_has_frontmatter_and_no_errors() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "doc.md", VALID);
    let outcome = check_file(&file, &Config::default());
    assert!(outcome.has_frontmatter);
    assert!(outcome.errors.is_empty());
    assert!(outcome.is_governed());
}

#[test]
fn file_without_frontmatter_reports_structural_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "doc.md", "# Just a heading\n");
    let outcome = check_file(&file, &Config::default());
    assert!(!outcome.has_frontmatter);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::Structural);
    assert_eq!(outcome.errors[0].message, "missing YAML frontmatter");
}

#[test]
fn unreadable_file_reports_single_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("binary.md");
    // Frontmatter-looking prefix followed by invalid UTF-8: the read fails
    // before any parsing happens.
    std::fs::write(&file, b"---\nid: x\n---\n\xff\xfe\n").unwrap();

    let outcome = check_file(&file, &Config::default());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::Io);
    assert!(outcome.errors[0].message.starts_with("cannot read file: "));
    assert!(!outcome.has_frontmatter);
}

#[test]
fn empty_block_counts_as_frontmatter() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "doc.md", "---\n---\n");
    let outcome = check_file(&file, &Config::default());
    assert!(outcome.has_frontmatter);
    assert_eq!(outcome.errors.len(), 5);
}

// ---------------------------------------------------------------------------
// run_check
// ---------------------------------------------------------------------------

#[test]
fn one_valid_one_missing_id() {
    let report = run_check(Path::new("tests/fixtures/mixed"), &Config::default());
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.checked, 2);
    assert!(!report.passed);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].file.ends_with("b-missing-id.md"));
    assert_eq!(report.errors[0].message, "missing required field 'id'");
}

#[test]
fn target_is_normalized_before_walking() {
    assert_eq!(
        normalize_target(Path::new("tests/fixtures/mixed/")),
        Path::new("tests/fixtures/mixed")
    );
    assert_eq!(normalize_target(Path::new("./docs")), Path::new("docs"));
    assert_eq!(normalize_target(Path::new(".")), Path::new("."));

    let report = run_check(Path::new("./tests/fixtures/mixed/"), &Config::default());
    assert_eq!(report.target, "tests/fixtures/mixed");
    assert_eq!(
        report.errors[0].to_string(),
        "tests/fixtures/mixed/b-missing-id.md: missing required field 'id'"
    );
}

#[test]
fn clean_tree_passes() {
    let report = run_check(Path::new("tests/fixtures/clean"), &Config::default());
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.checked, 2);
    assert!(report.passed, "unexpected errors: {:?}", report.errors);
}

#[test]
fn errors_are_aggregated_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.md", "no frontmatter\n");
    write(dir.path(), "a.md", "---\nid: x\n---\n");

    let report = run_check(dir.path(), &Config::default());
    assert_eq!(report.errors.len(), 5);
    assert!(report.errors[..4].iter().all(|e| e.file.ends_with("a.md")));
    assert!(report.errors[4].file.ends_with("b.md"));
    assert_eq!(report.checked, 2);
}

#[test]
fn empty_directory_scans_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_check(dir.path(), &Config::default());
    assert_eq!(report.files_scanned, 0);
    assert_eq!(report.checked, 0);
    assert!(report.passed);
}

#[test]
fn report_counts_errors_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", "plain\n");
    write(
        dir.path(),
        "b.md",
        "---\ntitle: T\nversion: 1\nstatus: draft\nlast_updated: 2024-01-01\n---\n",
    );

    let report = run_check(dir.path(), &Config::default());
    assert_eq!(report.count_by_kind(), (0, 1, 1, 1));
}
