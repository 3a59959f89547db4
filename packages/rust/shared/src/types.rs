//! Core domain types for the llmstxt aggregation pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{LlmsTxtError, Result};

/// Default section name for files matching no configured pattern.
pub const DEFAULT_SECTION: &str = "Docs";

// ---------------------------------------------------------------------------
// FileRecord
// ---------------------------------------------------------------------------

/// One normalized record per input markdown file.
///
/// `relative_path` is the identifying key within a run. `content` holds the
/// complete source text including any front-matter block; it is never
/// transformed before the full-content render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the input directory, `/`-separated.
    pub relative_path: String,
    /// Extracted or derived title. Never empty.
    pub title: String,
    /// Extracted description. May be empty.
    pub description: String,
    /// Verbatim file content, front matter included.
    pub content: String,
    /// Absolute URL derived from the base URL and the relative path.
    pub url: String,
    /// Section name from classification. Never empty.
    pub section: String,
}

// ---------------------------------------------------------------------------
// SectionMapping
// ---------------------------------------------------------------------------

/// Ordered mapping of section name to glob pattern.
///
/// Order is significant: classification tests patterns in insertion order
/// and the first match wins. The mapping need not be exhaustive; unmatched
/// paths fall back to [`DEFAULT_SECTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMapping {
    entries: Vec<(String, String)>,
}

impl SectionMapping {
    /// Append a section entry, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.entries.push((name.into(), pattern.into()));
    }

    /// Iterate `(name, pattern)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Parse the sections input: a JSON object mapping section names to
    /// glob pattern strings. Key order in the input is preserved.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| LlmsTxtError::config(format!("invalid sections JSON: {e}")))?;

        let object = value.as_object().ok_or_else(|| {
            LlmsTxtError::config("sections must be a JSON object mapping names to glob patterns")
        })?;

        let mut mapping = Self::default();
        for (name, pattern) in object {
            let pattern = pattern.as_str().ok_or_else(|| {
                LlmsTxtError::config(format!(
                    "sections entry {name:?} must be a string glob pattern"
                ))
            })?;
            mapping.push(name, pattern);
        }

        Ok(mapping)
    }
}
