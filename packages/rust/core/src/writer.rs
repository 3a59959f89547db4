//! Persists the rendered artifacts to the output directory.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use llmstxt_shared::{LlmsTxtError, Result};

/// Index artifact filename.
pub const LLMS_TXT: &str = "llms.txt";
/// Full-content artifact filename.
pub const LLMS_FULL_TXT: &str = "llms-full.txt";

/// Metadata for one written artifact.
#[derive(Debug, Clone)]
pub struct ArtifactMeta {
    pub filename: String,
    /// Final path of the written file.
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Write `llms.txt` and `llms-full.txt` into `output_dir`.
///
/// The directory (and intermediates) is created if absent and existing files
/// are overwritten. Each file is written atomically: write to a temp file,
/// then rename. Any failure here is fatal to the run and carries the failing
/// path.
pub fn write_artifacts(
    output_dir: &Path,
    llms_txt: &str,
    llms_full_txt: &str,
) -> Result<Vec<ArtifactMeta>> {
    std::fs::create_dir_all(output_dir).map_err(|e| LlmsTxtError::io(output_dir, e))?;

    let artifacts = [(LLMS_TXT, llms_txt), (LLMS_FULL_TXT, llms_full_txt)];
    let mut metas = Vec::with_capacity(artifacts.len());

    for (filename, content) in artifacts {
        let target = output_dir.join(filename);
        let temp = output_dir.join(format!(".{filename}.tmp"));

        std::fs::write(&temp, content).map_err(|e| LlmsTxtError::io(&temp, e))?;
        std::fs::rename(&temp, &target).map_err(|e| LlmsTxtError::io(&target, e))?;

        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let hash = format!("{:x}", hasher.finalize());

        debug!(file = %filename, size = content.len(), sha256 = %hash, "wrote artifact");

        metas.push(ArtifactMeta {
            filename: filename.to_string(),
            path: target,
            sha256: hash,
            size_bytes: content.len(),
        });
    }

    info!(
        count = metas.len(),
        dir = %output_dir.display(),
        "artifacts written"
    );

    Ok(metas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_artifacts() {
        let tmp = tempfile::tempdir().unwrap();

        let metas = write_artifacts(tmp.path(), "index content\n", "full content\n").unwrap();

        assert_eq!(metas.len(), 2);
        assert_eq!(metas[0].filename, LLMS_TXT);
        assert_eq!(metas[1].filename, LLMS_FULL_TXT);
        assert_eq!(metas[0].sha256.len(), 64);
        assert_eq!(metas[0].size_bytes, "index content\n".len());

        let index = std::fs::read_to_string(tmp.path().join(LLMS_TXT)).unwrap();
        assert_eq!(index, "index content\n");
        let full = std::fs::read_to_string(tmp.path().join(LLMS_FULL_TXT)).unwrap();
        assert_eq!(full, "full content\n");
    }

    #[test]
    fn creates_missing_output_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("out/sub/dir");

        write_artifacts(&nested, "a\n", "b\n").unwrap();

        assert!(nested.join(LLMS_TXT).exists());
        assert!(nested.join(LLMS_FULL_TXT).exists());
    }

    #[test]
    fn overwrites_existing_artifacts() {
        let tmp = tempfile::tempdir().unwrap();

        write_artifacts(tmp.path(), "old index\n", "old full\n").unwrap();
        write_artifacts(tmp.path(), "new index\n", "new full\n").unwrap();

        let index = std::fs::read_to_string(tmp.path().join(LLMS_TXT)).unwrap();
        assert_eq!(index, "new index\n");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let tmp = tempfile::tempdir().unwrap();

        write_artifacts(tmp.path(), "a\n", "b\n").unwrap();

        for entry in std::fs::read_dir(tmp.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
    }

    #[test]
    fn write_failure_reports_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocked = tmp.path().join("blocked");
        std::fs::write(&blocked, "i am a file, not a directory").unwrap();

        let err = write_artifacts(&blocked.join("out"), "a\n", "b\n").unwrap_err();
        assert!(matches!(err, LlmsTxtError::Io { .. }));
    }
}
