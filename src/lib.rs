//! # oxidized-frontmatter
//!
//! Frontmatter linting for governed markdown documents.
//!
//! `oxidized-frontmatter` walks a directory of markdown files, extracts the
//! flat `key: value` block at the top of each one, and checks that the
//! required fields are present and that `version`, `status` and
//! `last_updated` are well-formed.  Reports are rendered as plain text,
//! JSON, or [SARIF].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_frontmatter::{check, config::Config, output};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = check::run_check(Path::new("docs"), &config);
//!
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — required fields and accepted statuses, from TOML.
//! 2. **[`frontmatter`]** — extract the `---` delimited block.
//! 3. **[`validate`]** — required-field and format checks.
//! 4. **[`check`]** — collect files, run the checks, build a report.
//! 5. **[`finding`]** — core data types ([`finding::ValidationError`], [`finding::CheckReport`]).
//! 6. **[`output`]** — format reports as pretty text, JSON, or SARIF.
//! 7. **[`rules`]** — catalogue of rule ids.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod check;
pub mod config;
pub mod finding;
pub mod frontmatter;
pub mod output;
pub mod rules;
pub mod validate;
