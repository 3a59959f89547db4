//! Markdown file enumeration and path-based section classification.
//!
//! Both operations share the same glob semantics: `*` matches within a path
//! segment, `**` matches across segments, and patterns are tested against
//! `/`-separated paths.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use llmstxt_shared::{DEFAULT_SECTION, SectionMapping};

/// Markdown file extensions recognized by the scanner.
const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "mdx", "markdown"];

/// Glob options: `*` must not cross `/`, so `docs/*` and `docs/**` differ.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Recursively scan `root` for markdown files.
///
/// Returns `/`-separated paths relative to `root`, sorted ascending so that
/// repeated runs over an unchanged tree enumerate identically. Hidden files
/// and directories are skipped, as is any path matching one of
/// `exclude_patterns`. A missing or unreadable root yields an empty list.
pub fn scan_markdown_files(root: &Path, exclude_patterns: &[String]) -> Vec<String> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !has_markdown_extension(path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let relative = to_forward_slashes(relative);

        if is_excluded(&relative, exclude_patterns) {
            debug!(path = %relative, "excluded by pattern");
            continue;
        }

        files.push(relative);
    }

    files.sort();
    files
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_excluded(relative: &str, exclude_patterns: &[String]) -> bool {
    exclude_patterns.iter().any(|pattern| {
        Pattern::new(pattern)
            .map(|p| p.matches_with(relative, GLOB_OPTIONS))
            .unwrap_or(false)
    })
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a relative path into a section.
///
/// Patterns are tested in mapping order and the first match wins; a path
/// matching no pattern falls back to [`DEFAULT_SECTION`]. Classification
/// depends only on the path text and the mapping order.
pub fn categorize_file(path: &str, sections: &SectionMapping) -> String {
    let normalized = path.replace('\\', "/");

    for (name, pattern) in sections.iter() {
        let matched = match Pattern::new(pattern) {
            Ok(p) => p.matches_with(&normalized, GLOB_OPTIONS),
            Err(e) => {
                warn!(section = name, pattern, error = %e, "invalid section pattern");
                false
            }
        };

        if matched {
            return name.to_string();
        }
    }

    DEFAULT_SECTION.to_string()
}
