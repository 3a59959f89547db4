//! Renderers for the two output artifacts.
//!
//! `llms.txt` is the concise index per the format specified by
//! <https://llmstxt.org/>: an H1 project title, an optional blockquote
//! summary, then H2 sections of Markdown link lists. `llms-full.txt` is the
//! flat full-content dump, one `Source:`-prefixed block per file in exactly
//! the same merged order as the index.

use std::cmp::Ordering;

use tracing::debug;

use llmstxt_shared::FileRecord;

/// Section name that always sorts last regardless of alphabetical position.
const OPTIONAL_SECTION: &str = "Optional";

// ---------------------------------------------------------------------------
// Shared grouping/ordering
// ---------------------------------------------------------------------------

/// Group records by section and order the groups for rendering.
///
/// Records keep their input order within a group. Groups are sorted by name,
/// case-sensitive ascending, except `"Optional"` which always comes last.
/// Both artifacts use this exact order.
fn grouped_in_render_order(records: &[FileRecord]) -> Vec<(&str, Vec<&FileRecord>)> {
    let mut groups: Vec<(&str, Vec<&FileRecord>)> = Vec::new();

    for record in records {
        match groups.iter().position(|(name, _)| *name == record.section) {
            Some(idx) => groups[idx].1.push(record),
            None => groups.push((record.section.as_str(), vec![record])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| compare_sections(a, b));
    groups
}

fn compare_sections(a: &str, b: &str) -> Ordering {
    match (a == OPTIONAL_SECTION, b == OPTIONAL_SECTION) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

// ---------------------------------------------------------------------------
// llms.txt
// ---------------------------------------------------------------------------

/// Render the concise index document.
pub fn generate_llms_txt(
    records: &[FileRecord],
    project_name: &str,
    project_description: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {project_name}"));
    lines.push(String::new());

    if !project_description.trim().is_empty() {
        lines.push(format!("> {project_description}"));
        lines.push(String::new());
    }

    for (section, members) in grouped_in_render_order(records) {
        lines.push(format!("## {section}"));
        lines.push(String::new());

        for record in &members {
            lines.push(format_entry(record));
        }

        lines.push(String::new());
    }

    debug!(records = records.len(), "rendered index document");
    format!("{}\n", lines.join("\n").trim())
}

/// Format one index entry: `- [Title](url): Description`, with the colon
/// and description omitted entirely when the description is blank.
fn format_entry(record: &FileRecord) -> String {
    if record.description.trim().is_empty() {
        format!("- [{}]({})", record.title, record.url)
    } else {
        format!("- [{}]({}): {}", record.title, record.url, record.description)
    }
}

// ---------------------------------------------------------------------------
// llms-full.txt
// ---------------------------------------------------------------------------

/// Render the full-content document.
///
/// Grouping is used only to establish the index's merged order; the output
/// itself is a flat sequence of `Source:` line, blank line, verbatim file
/// content, blank separator. An empty record set yields exactly `"\n"`.
pub fn generate_llms_full_txt(records: &[FileRecord]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (_, members) in grouped_in_render_order(records) {
        for record in members {
            parts.push(format!("Source: {}", record.url));
            parts.push(String::new());
            parts.push(record.content.clone());
            parts.push(String::new());
        }
    }

    debug!(records = records.len(), "rendered full-content document");
    format!("{}\n", parts.join("\n").trim())
}
