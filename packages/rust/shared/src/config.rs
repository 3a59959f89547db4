//! Application configuration for llmstxt.
//!
//! User config lives at `~/.llmstxt/llmstxt.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LlmsTxtError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "llmstxt.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".llmstxt";

// ---------------------------------------------------------------------------
// Config structs (matching llmstxt.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Git commit step settings.
    #[serde(default)]
    pub commit: CommitConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory scanned for markdown files.
    #[serde(default = "default_dir")]
    pub input_dir: String,

    /// Directory where llms.txt and llms-full.txt are written.
    #[serde(default = "default_dir")]
    pub output_dir: String,

    /// Base URL used to derive per-file links.
    #[serde(default)]
    pub base_url: String,

    /// Project name for the index H1 header.
    #[serde(default)]
    pub project_name: String,

    /// Project summary for the index blockquote.
    #[serde(default)]
    pub project_description: String,

    /// Comma-separated exclusion glob patterns.
    #[serde(default)]
    pub exclude: String,

    /// Section mapping as a JSON object string.
    #[serde(default = "default_sections")]
    pub sections: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_dir(),
            output_dir: default_dir(),
            base_url: String::new(),
            project_name: String::new(),
            project_description: String::new(),
            exclude: String::new(),
            sections: default_sections(),
        }
    }
}

fn default_dir() -> String {
    ".".into()
}
fn default_sections() -> String {
    r#"{"Docs": "**"}"#.into()
}

/// `[commit]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Whether to commit the generated artifacts after a successful run.
    #[serde(default)]
    pub enabled: bool,

    /// Commit message for the generated artifacts.
    #[serde(default = "default_commit_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            message: default_commit_message(),
        }
    }
}

fn default_commit_message() -> String {
    "chore: update llms.txt files".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.llmstxt/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LlmsTxtError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.llmstxt/llmstxt.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LlmsTxtError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| LlmsTxtError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LlmsTxtError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LlmsTxtError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LlmsTxtError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("input_dir"));
        assert!(toml_str.contains("chore: update llms.txt files"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.input_dir, ".");
        assert_eq!(parsed.defaults.sections, r#"{"Docs": "**"}"#);
        assert!(!parsed.commit.enabled);
    }

    #[test]
    fn config_with_overrides() {
        let toml_str = r#"
[defaults]
input_dir = "docs"
base_url = "https://example.com"
project_name = "My Project"
exclude = "drafts/**, internal/**"

[commit]
enabled = true
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.input_dir, "docs");
        assert_eq!(config.defaults.project_name, "My Project");
        // Unset fields keep their defaults
        assert_eq!(config.defaults.output_dir, ".");
        assert!(config.commit.enabled);
        assert_eq!(config.commit.message, "chore: update llms.txt files");
    }
}
