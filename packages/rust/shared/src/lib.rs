//! Shared types, configuration, and error handling for llmstxt.

mod config;
mod error;
mod types;

pub use config::{
    AppConfig, CommitConfig, DefaultsConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{LlmsTxtError, Result};
pub use types::{DEFAULT_SECTION, FileRecord, SectionMapping};
