//! Optional git commit step for the generated artifacts.
//!
//! Runs after a successful generation when enabled. Every failure in here is
//! downgraded to a warning: the artifacts are already on disk and a commit
//! problem must never fail the run.

use std::path::PathBuf;
use std::process::Command;

use tracing::{info, warn};

use llmstxt_shared::{LlmsTxtError, Result};

/// CI bot identity used for the commit.
const GIT_USER_NAME: &str = "github-actions[bot]";
const GIT_USER_EMAIL: &str = "github-actions[bot]@users.noreply.github.com";

/// Stage and commit the artifact files, skipping the commit when the working
/// tree reports no changes. Failures are logged and swallowed.
pub fn commit_artifacts(paths: &[PathBuf], message: &str) {
    if let Err(e) = try_commit(paths, message) {
        warn!(error = %e, "commit step failed, continuing");
    }
}

fn try_commit(paths: &[PathBuf], message: &str) -> Result<()> {
    run_git(&["config", "user.name", GIT_USER_NAME])?;
    run_git(&["config", "user.email", GIT_USER_EMAIL])?;

    for path in paths {
        run_git(&["add", &path.to_string_lossy()])?;
    }

    let status = run_git(&["status", "--porcelain"])?;
    if status.trim().is_empty() {
        info!("no changes detected, skipping commit");
        return Ok(());
    }

    run_git(&["commit", "-m", message])?;
    info!(message, "committed generated artifacts");

    Ok(())
}

fn run_git(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| LlmsTxtError::config(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LlmsTxtError::validation(format!(
            "git {} failed: {}",
            args.first().unwrap_or(&""),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
