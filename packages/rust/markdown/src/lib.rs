//! Best-effort title and description extraction from markdown.
//!
//! Handles both ATX (`# Title`) and setext (`Title\n===`) level-1 headings,
//! and picks the first prose paragraph after the heading as the description.
//! Extraction never fails: the worst case is `None` for a title and an empty
//! string for a description.

mod frontmatter;

use std::sync::LazyLock;

use regex::Regex;

pub use frontmatter::{FrontMatter, split_front_matter};

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Matches an ATX level-1 heading: `# Title`.
static ATX_H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("ATX H1 regex"));

/// Matches a setext level-1 heading: a text line underlined with `=`.
static SETEXT_H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.+)\n=+\s*$").expect("setext H1 regex"));

/// Splits text into blocks on one or more blank lines.
static PARAGRAPH_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph split regex"));

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the first level-1 heading from markdown content.
///
/// ATX form takes precedence over setext form regardless of position in the
/// document; the first occurrence of the winning form is returned.
pub fn extract_title(content: &str) -> Option<String> {
    if let Some(caps) = ATX_H1_RE.captures(content) {
        return Some(caps[1].trim().to_string());
    }

    SETEXT_H1_RE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the first prose paragraph after the heading as the description.
///
/// The first ATX H1 and the first setext H1 are removed, the remainder is
/// split on blank-line boundaries, and the first block that is neither a
/// heading nor a blockquote wins, with internal newlines collapsed to
/// spaces. Returns an empty string when no block qualifies.
pub fn extract_description(content: &str) -> String {
    // Strip the first occurrence of each heading form
    let without_atx = ATX_H1_RE.replace(content, "");
    let without_headings = SETEXT_H1_RE.replace(&without_atx, "");

    PARAGRAPH_SPLIT_RE
        .split(&without_headings)
        .map(str::trim)
        .find(|block| !block.is_empty() && !block.starts_with('#') && !block.starts_with('>'))
        .map(|block| block.replace('\n', " ").trim().to_string())
        .unwrap_or_default()
}
