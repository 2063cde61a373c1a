//! Frontmatter extraction.
//!
//! A governed document starts with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! id: DOC-001
//! title: Storage design
//! ---
//! # Body
//! ```
//!
//! Only flat `key: value` lines are understood.  Anything else between the
//! delimiters (blank lines, comments, list items, indented continuation
//! lines) is skipped without complaint.  This is deliberately not a YAML
//! parser.

use std::collections::BTreeMap;

/// Field name to raw (trimmed, still quoted) value.
///
/// Later occurrences of a key overwrite earlier ones.
pub type Frontmatter = BTreeMap<String, String>;

/// Scanner position relative to the delimited block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
}

/// Returns `true` if `line` is a `---` delimiter, allowing trailing
/// whitespace (including the `\r` of a CRLF line ending).
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a single frontmatter line into `(key, value)`.
///
/// The key must start at column 0 and consist of word characters.  It may be
/// followed by whitespace before the colon; the value is the rest of the
/// line, trimmed.  A colon with nothing at all after it is not a value, so
/// `tags:` is skipped while `tags:  ` yields an empty value.  Returns `None`
/// for lines of any other shape.
///
/// ```
/// use oxidized_frontmatter::frontmatter::parse_kv;
///
/// assert_eq!(parse_kv("title :  Storage  "), Some(("title", "Storage")));
/// assert_eq!(parse_kv("  nested: value"), None);
/// assert_eq!(parse_kv("allowed-tools: Bash"), None);
/// assert_eq!(parse_kv("tags:"), None);
/// ```
pub fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let key_end = line
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    if key_end == 0 {
        return None;
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start().strip_prefix(':')?;
    if rest.is_empty() {
        return None;
    }
    Some((key, rest.trim()))
}

/// Extracts the frontmatter mapping from the start of `text`.
///
/// Returns `None` when the document does not open with a `---` line, or when
/// the block is never closed by a `---` line followed by a newline.  An empty
/// block yields an empty mapping.
///
/// # Examples
///
/// ```
/// use oxidized_frontmatter::frontmatter::extract;
///
/// let fm = extract("---\nid: DOC-1\n---\nbody\n").unwrap();
/// assert_eq!(fm["id"], "DOC-1");
///
/// assert!(extract("# no frontmatter\n").is_none());
/// assert!(extract("---\n---\n").unwrap().is_empty());
/// ```
pub fn extract(text: &str) -> Option<Frontmatter> {
    let mut state = State::Outside;
    let mut fields = Frontmatter::new();

    // split_inclusive keeps the terminator so we can tell whether the
    // closing delimiter actually ends with a newline.
    for line in text.split_inclusive('\n') {
        let terminated = line.ends_with('\n');
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        match state {
            State::Outside => {
                if !(terminated && is_delimiter(content)) {
                    return None;
                }
                state = State::Inside;
            }
            State::Inside => {
                if is_delimiter(content) {
                    return terminated.then_some(fields);
                }
                if let Some((key, value)) = parse_kv(content) {
                    fields.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    None
}
