//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use llmstxt_core::pipeline::{GenerateConfig, GenerationResult, ProgressReporter};
use llmstxt_shared::{AppConfig, SectionMapping, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// llmstxt: generate llms.txt artifacts from a markdown tree.
#[derive(Parser)]
#[command(
    name = "llmstxt",
    version,
    about = "Generate spec-compliant llms.txt and llms-full.txt from markdown documentation.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Scan for markdown files and generate both artifacts.
    Generate {
        /// Directory containing markdown files.
        #[arg(long, env = "LLMSTXT_INPUT_DIR")]
        input_dir: Option<String>,

        /// Directory where the artifacts are written.
        #[arg(long, env = "LLMSTXT_OUTPUT_DIR")]
        output_dir: Option<String>,

        /// Base URL for generating links (e.g. https://example.com).
        #[arg(long, env = "LLMSTXT_BASE_URL")]
        base_url: Option<String>,

        /// Project name for the index H1 header.
        #[arg(long, env = "LLMSTXT_PROJECT_NAME")]
        project_name: Option<String>,

        /// Short summary for the index blockquote.
        #[arg(long, env = "LLMSTXT_PROJECT_DESCRIPTION")]
        project_description: Option<String>,

        /// Comma-separated glob patterns for files to exclude.
        #[arg(long, env = "LLMSTXT_EXCLUDE")]
        exclude: Option<String>,

        /// Section mapping as a JSON object, e.g. '{"Docs": "docs/**"}'.
        #[arg(long, env = "LLMSTXT_SECTIONS")]
        sections: Option<String>,

        /// Commit the generated artifacts with git afterwards.
        #[arg(long)]
        commit: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            input_dir,
            output_dir,
            base_url,
            project_name,
            project_description,
            exclude,
            sections,
            commit,
        } => cmd_generate(GenerateArgs {
            input_dir,
            output_dir,
            base_url,
            project_name,
            project_description,
            exclude,
            sections,
            commit,
        }),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Flag values for `generate`, prior to merging with the config file.
struct GenerateArgs {
    input_dir: Option<String>,
    output_dir: Option<String>,
    base_url: Option<String>,
    project_name: Option<String>,
    project_description: Option<String>,
    exclude: Option<String>,
    sections: Option<String>,
    commit: bool,
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config()?;
    let pipeline_config = merge_config(args, &config)?;

    info!(
        input = %pipeline_config.input_dir.display(),
        output = %pipeline_config.output_dir.display(),
        project = %pipeline_config.project_name,
        "generating artifacts"
    );

    let reporter = CliProgress::new();
    let result = llmstxt_core::pipeline::generate(&pipeline_config, &reporter)?;

    println!();
    println!("  Artifacts generated successfully!");
    println!("  Processed: {} file(s)", result.files_processed);
    if result.files_failed > 0 {
        println!("  Skipped:   {} file(s)", result.files_failed);
    }
    println!("  Index:     {}", result.llms_txt_path.display());
    println!("  Full:      {}", result.llms_full_txt_path.display());
    println!("  Time:      {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

/// Merge CLI flags over config file values over built-in defaults.
fn merge_config(args: GenerateArgs, config: &AppConfig) -> Result<GenerateConfig> {
    let defaults = &config.defaults;

    let pick = |flag: Option<String>, fallback: &str| {
        flag.unwrap_or_else(|| fallback.to_string())
    };

    let base_url = pick(args.base_url, &defaults.base_url);
    let project_name = pick(args.project_name, &defaults.project_name);
    if base_url.trim().is_empty() {
        return Err(eyre!(
            "base-url is required: pass --base-url or set defaults.base_url in the config file"
        ));
    }
    if project_name.trim().is_empty() {
        return Err(eyre!(
            "project-name is required: pass --project-name or set defaults.project_name in the config file"
        ));
    }

    let exclude = pick(args.exclude, &defaults.exclude);
    let exclude_patterns: Vec<String> = exclude
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    let sections_json = pick(args.sections, &defaults.sections);
    let sections = SectionMapping::from_json(&sections_json)?;

    Ok(GenerateConfig {
        input_dir: PathBuf::from(pick(args.input_dir, &defaults.input_dir)),
        output_dir: PathBuf::from(pick(args.output_dir, &defaults.output_dir)),
        base_url,
        project_name,
        project_description: pick(args.project_description, &defaults.project_description),
        exclude_patterns,
        sections,
        commit: args.commit || config.commit.enabled,
        commit_message: config.commit.message.clone(),
    })
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_parsed(&self, path: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Parsing [{current}/{total}] {path}"));
    }

    fn done(&self, _result: &GenerationResult) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Created config file: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let rendered = toml::to_string_pretty(&config)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> GenerateArgs {
        GenerateArgs {
            input_dir: None,
            output_dir: None,
            base_url: None,
            project_name: None,
            project_description: None,
            exclude: None,
            sections: None,
            commit: false,
        }
    }

    #[test]
    fn flags_override_config_values() {
        let mut config = AppConfig::default();
        config.defaults.base_url = "https://config.example".into();
        config.defaults.project_name = "From Config".into();

        let mut args = empty_args();
        args.base_url = Some("https://flag.example".into());

        let merged = merge_config(args, &config).unwrap();
        assert_eq!(merged.base_url, "https://flag.example");
        assert_eq!(merged.project_name, "From Config");
    }

    #[test]
    fn missing_required_inputs_error() {
        let err = merge_config(empty_args(), &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("base-url"));

        let mut args = empty_args();
        args.base_url = Some("https://example.com".into());
        let err = merge_config(args, &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("project-name"));
    }

    #[test]
    fn exclude_string_is_split_and_trimmed() {
        let mut args = empty_args();
        args.base_url = Some("https://example.com".into());
        args.project_name = Some("P".into());
        args.exclude = Some(" drafts/** , internal/** ,, ".into());

        let merged = merge_config(args, &AppConfig::default()).unwrap();
        assert_eq!(merged.exclude_patterns, vec!["drafts/**", "internal/**"]);
    }

    #[test]
    fn default_sections_parse() {
        let mut args = empty_args();
        args.base_url = Some("https://example.com".into());
        args.project_name = Some("P".into());

        let merged = merge_config(args, &AppConfig::default()).unwrap();
        assert_eq!(merged.sections.len(), 1);
        let entries: Vec<(&str, &str)> = merged.sections.iter().collect();
        assert_eq!(entries[0], ("Docs", "**"));
    }

    #[test]
    fn invalid_sections_json_errors() {
        let mut args = empty_args();
        args.base_url = Some("https://example.com".into());
        args.project_name = Some("P".into());
        args.sections = Some("[1, 2]".into());

        assert!(merge_config(args, &AppConfig::default()).is_err());
    }
}
