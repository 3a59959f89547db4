//! End-to-end `generate` pipeline: scan → parse → render → write → commit.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};
use url::Url;

use llmstxt_shared::{FileRecord, LlmsTxtError, Result, SectionMapping};

use crate::record::build_record;
use crate::writer;

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory scanned for markdown files.
    pub input_dir: PathBuf,
    /// Directory receiving `llms.txt` and `llms-full.txt`.
    pub output_dir: PathBuf,
    /// Base URL for per-file links. Must be a valid URL.
    pub base_url: String,
    /// Project name for the index H1 header.
    pub project_name: String,
    /// Project summary for the index blockquote. May be empty.
    pub project_description: String,
    /// Exclusion glob patterns, already split and trimmed.
    pub exclude_patterns: Vec<String>,
    /// Ordered section mapping.
    pub sections: SectionMapping,
    /// Whether to git-commit the artifacts afterwards.
    pub commit: bool,
    /// Commit message for the optional commit step.
    pub commit_message: String,
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerationResult {
    /// Number of files successfully parsed into records.
    pub files_processed: usize,
    /// Number of files that failed to load or parse and were skipped.
    pub files_failed: usize,
    /// Path of the written index artifact.
    pub llms_txt_path: PathBuf,
    /// Path of the written full-content artifact.
    pub llms_full_txt_path: PathBuf,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each file is parsed.
    fn file_parsed(&self, path: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerationResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_parsed(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerationResult) {}
}

/// Run the full generation pipeline.
///
/// Fails before writing anything when a precondition is violated: missing or
/// invalid base URL, missing project name, missing input directory, zero
/// markdown files discovered, or zero files parsed. A single unreadable file
/// is warned about and skipped; it never aborts the batch.
pub fn generate(
    config: &GenerateConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerationResult> {
    let start = Instant::now();

    validate_config(config)?;

    // --- Phase 1: enumerate ---
    progress.phase("Scanning for markdown files");
    let paths = llmstxt_scanner::scan_markdown_files(&config.input_dir, &config.exclude_patterns);

    if paths.is_empty() {
        let exclude_note = if config.exclude_patterns.is_empty() {
            String::new()
        } else {
            format!(" (exclude patterns: {})", config.exclude_patterns.join(", "))
        };
        return Err(LlmsTxtError::validation(format!(
            "no markdown files found in directory: {}{exclude_note}",
            config.input_dir.display()
        )));
    }

    info!(count = paths.len(), dir = %config.input_dir.display(), "markdown files discovered");

    // --- Phase 2: build records, tolerating per-file failure ---
    progress.phase("Parsing markdown files");
    let total = paths.len();
    let mut records: Vec<FileRecord> = Vec::with_capacity(total);
    let mut failed = 0usize;

    for (i, relative_path) in paths.iter().enumerate() {
        let full_path = config.input_dir.join(relative_path);

        match std::fs::read_to_string(&full_path) {
            Ok(content) => {
                let record =
                    build_record(relative_path, content, &config.base_url, &config.sections);
                progress.file_parsed(relative_path, i + 1, total);
                records.push(record);
            }
            Err(e) => {
                failed += 1;
                warn!(path = %relative_path, error = %e, "failed to read file, skipping");
            }
        }
    }

    if records.is_empty() {
        return Err(LlmsTxtError::validation(format!(
            "no markdown files could be parsed; all {total} file(s) failed"
        )));
    }

    if failed > 0 {
        warn!(
            parsed = records.len(),
            failed, total, "some files were skipped"
        );
    } else {
        info!(parsed = records.len(), "all files parsed");
    }

    // --- Phase 3: render ---
    progress.phase("Rendering artifacts");
    let llms_txt = llmstxt_artifacts::generate_llms_txt(
        &records,
        &config.project_name,
        &config.project_description,
    );
    let llms_full_txt = llmstxt_artifacts::generate_llms_full_txt(&records);

    // --- Phase 4: persist ---
    progress.phase("Writing artifacts");
    let metas = writer::write_artifacts(&config.output_dir, &llms_txt, &llms_full_txt)?;
    let llms_txt_path = metas[0].path.clone();
    let llms_full_txt_path = metas[1].path.clone();

    // --- Phase 5: optional commit ---
    if config.commit {
        progress.phase("Committing artifacts");
        crate::commit::commit_artifacts(
            &[llms_txt_path.clone(), llms_full_txt_path.clone()],
            &config.commit_message,
        );
    }

    let result = GenerationResult {
        files_processed: records.len(),
        files_failed: failed,
        llms_txt_path,
        llms_full_txt_path,
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        files_processed = result.files_processed,
        files_failed = result.files_failed,
        elapsed_ms = result.elapsed.as_millis(),
        "generation complete"
    );

    Ok(result)
}

/// Check the fatal preconditions before touching the filesystem.
fn validate_config(config: &GenerateConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(LlmsTxtError::config(
            "base-url is required and cannot be empty",
        ));
    }

    Url::parse(&config.base_url).map_err(|e| {
        LlmsTxtError::config(format!(
            "invalid base-url '{}': {e} (expected e.g. https://example.com)",
            config.base_url
        ))
    })?;

    if config.project_name.trim().is_empty() {
        return Err(LlmsTxtError::config(
            "project-name is required and cannot be empty",
        ));
    }

    if !config.input_dir.is_dir() {
        return Err(LlmsTxtError::validation(format!(
            "input directory does not exist or is not a directory: {}",
            config.input_dir.display()
        )));
    }

    Ok(())
}
