//! Minimal front-matter handling.
//!
//! Only a leading block delimited by `---` lines is recognized, and only
//! single-line scalar `key: value` entries are parsed. Multi-line values and
//! nested structures are left unparsed; full YAML is out of scope.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a leading front-matter block and captures (body, remainder).
static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)\z").expect("front matter regex"));

/// Matches a scalar `key: value` line, with optional surrounding quotes.
static SCALAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(\w+):\s*["']?(.+?)["']?\s*$"#).expect("scalar regex"));

/// Parsed scalar front-matter fields.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Look up a scalar field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split an optional leading front-matter block off the content.
///
/// Returns the parsed scalar fields and the content with the block removed.
/// Content without a front-matter block comes back unchanged with an empty
/// field set.
pub fn split_front_matter(content: &str) -> (FrontMatter, &str) {
    let Some(caps) = FRONT_MATTER_RE.captures(content) else {
        return (FrontMatter::default(), content);
    };

    let body = caps.get(1).map_or("", |m| m.as_str());
    let remainder = caps.get(2).map_or("", |m| m.as_str());

    let mut fields = HashMap::new();
    for line in body.lines() {
        if let Some(line_caps) = SCALAR_RE.captures(line) {
            fields.insert(line_caps[1].to_string(), line_caps[2].to_string());
        }
    }

    (FrontMatter { fields }, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalar_fields() {
        let content = "---\ntitle: My Title\ndescription: A short summary\n---\n# Body\n";
        let (fm, rest) = split_front_matter(content);

        assert_eq!(fm.get("title"), Some("My Title"));
        assert_eq!(fm.get("description"), Some("A short summary"));
        assert_eq!(rest, "# Body\n");
    }

    #[test]
    fn strips_quotes_from_values() {
        let content = "---\ntitle: \"Quoted Title\"\nauthor: 'Someone'\n---\nbody";
        let (fm, _) = split_front_matter(content);

        assert_eq!(fm.get("title"), Some("Quoted Title"));
        assert_eq!(fm.get("author"), Some("Someone"));
    }

    #[test]
    fn content_without_front_matter_is_unchanged() {
        let content = "# Just a doc\n\nNo front matter here.";
        let (fm, rest) = split_front_matter(content);

        assert!(fm.is_empty());
        assert_eq!(rest, content);
    }

    #[test]
    fn unterminated_block_is_not_front_matter() {
        let content = "---\ntitle: Dangling\n\n# Body";
        let (fm, rest) = split_front_matter(content);

        assert!(fm.is_empty());
        assert_eq!(rest, content);
    }

    #[test]
    fn non_scalar_lines_are_ignored() {
        let content = "---\ntitle: Real\ntags:\n  - one\n  - two\n---\nbody";
        let (fm, rest) = split_front_matter(content);

        assert_eq!(fm.get("title"), Some("Real"));
        assert_eq!(fm.get("tags"), None);
        assert_eq!(rest, "body");
    }

    #[test]
    fn delimiter_must_open_the_file() {
        let content = "intro\n---\ntitle: Nope\n---\nbody";
        let (fm, rest) = split_front_matter(content);

        assert!(fm.is_empty());
        assert_eq!(rest, content);
    }
}
