//! Builds one normalized [`FileRecord`] per input file.

use llmstxt_markdown::{extract_description, extract_title, split_front_matter};
use llmstxt_scanner::categorize_file;
use llmstxt_shared::{FileRecord, SectionMapping};

/// Markdown extensions stripped from URLs and filename stems, in priority order.
const MARKDOWN_SUFFIXES: [&str; 3] = [".md", ".mdx", ".markdown"];

/// Build a record from a file's relative path and loaded content.
///
/// Front matter influences only metadata extraction: the `title` and
/// `description` overrides are honored when present and non-empty, while the
/// record's `content` keeps the original full text and classification sees
/// the original relative path.
pub fn build_record(
    relative_path: &str,
    content: String,
    base_url: &str,
    sections: &SectionMapping,
) -> FileRecord {
    let (front_matter, body) = split_front_matter(&content);

    let title = front_matter
        .get("title")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| extract_title(body))
        .unwrap_or_else(|| filename_stem(relative_path));

    let description = front_matter
        .get("description")
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| extract_description(body));

    let section = categorize_file(relative_path, sections);
    let url = derive_url(relative_path, base_url);

    FileRecord {
        relative_path: relative_path.to_string(),
        title,
        description,
        content,
        url,
        section,
    }
}

/// Derive the absolute URL for a file: base URL without its trailing slash,
/// plus the `/`-normalized relative path without a leading slash or a
/// trailing markdown extension.
fn derive_url(relative_path: &str, base_url: &str) -> String {
    let normalized = relative_path.replace('\\', "/");
    let path = strip_markdown_suffix(&normalized);
    let path = path.strip_prefix('/').unwrap_or(path);
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    format!("{base}/{path}")
}

/// The filename without its markdown extension, used as the last-resort
/// title. Suffixes are stripped sequentially so the result is never empty
/// for a non-empty filename.
fn filename_stem(relative_path: &str) -> String {
    let filename = relative_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(relative_path);

    let mut stem = filename;
    for suffix in MARKDOWN_SUFFIXES {
        stem = stem.strip_suffix(suffix).unwrap_or(stem);
    }
    stem.to_string()
}

fn strip_markdown_suffix(path: &str) -> &str {
    for suffix in MARKDOWN_SUFFIXES {
        if let Some(stripped) = path.strip_suffix(suffix) {
            return stripped;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_sections() -> SectionMapping {
        let mut sections = SectionMapping::default();
        sections.push("Docs", "docs/**");
        sections
    }

    fn build(path: &str, content: &str) -> FileRecord {
        build_record(
            path,
            content.to_string(),
            "https://example.com",
            &docs_sections(),
        )
    }

    #[test]
    fn title_prefers_front_matter_over_heading() {
        let record = build(
            "docs/a.md",
            "---\ntitle: Override\n---\n# Heading Title\n\nBody.",
        );
        assert_eq!(record.title, "Override");
    }

    #[test]
    fn title_falls_back_to_heading_then_stem() {
        let record = build("docs/a.md", "# Heading Title\n\nBody.");
        assert_eq!(record.title, "Heading Title");

        let record = build("docs/reference-guide.md", "No heading at all.");
        assert_eq!(record.title, "reference-guide");
    }

    #[test]
    fn empty_front_matter_title_falls_through() {
        let record = build("docs/a.md", "---\ntitle:\n---\n# Real Title\n\nBody.");
        assert_eq!(record.title, "Real Title");
    }

    #[test]
    fn stem_strips_each_markdown_extension() {
        assert_eq!(filename_stem("docs/guide.md"), "guide");
        assert_eq!(filename_stem("guide.mdx"), "guide");
        assert_eq!(filename_stem("a/b/guide.markdown"), "guide");
        assert_eq!(filename_stem("notes.txt"), "notes.txt");
    }

    #[test]
    fn description_prefers_front_matter() {
        let record = build(
            "docs/a.md",
            "---\ndescription: From front matter\n---\n# T\n\nFrom body.",
        );
        assert_eq!(record.description, "From front matter");

        let record = build("docs/a.md", "# T\n\nFrom body.");
        assert_eq!(record.description, "From body.");
    }

    #[test]
    fn content_keeps_front_matter_verbatim() {
        let source = "---\ntitle: T\n---\n# T\n\nBody.";
        let record = build("docs/a.md", source);
        assert_eq!(record.content, source);
    }

    #[test]
    fn url_strips_extension_and_normalizes_slashes() {
        assert_eq!(
            derive_url("docs/guide.md", "https://example.com"),
            "https://example.com/docs/guide"
        );
        assert_eq!(
            derive_url("docs\\guide.mdx", "https://example.com/"),
            "https://example.com/docs/guide"
        );
        assert_eq!(
            derive_url("/intro.markdown", "https://example.com"),
            "https://example.com/intro"
        );
    }

    #[test]
    fn url_keeps_non_markdown_suffix() {
        assert_eq!(
            derive_url("docs/data.json", "https://example.com"),
            "https://example.com/docs/data.json"
        );
    }

    #[test]
    fn classification_sees_the_path_with_its_extension() {
        // URL derivation strips `.md`, classification must not
        let mut sections = SectionMapping::default();
        sections.push("Markdown", "**/*.md");
        let record = build_record(
            "docs/guide.md",
            "# G\n\nBody.".to_string(),
            "https://example.com",
            &sections,
        );
        assert_eq!(record.section, "Markdown");
        assert_eq!(record.url, "https://example.com/docs/guide");
    }

    #[test]
    fn unmatched_path_gets_default_section() {
        let record = build("elsewhere/guide.md", "# G\n\nBody.");
        assert_eq!(record.section, "Docs");
    }
}
