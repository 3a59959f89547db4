//! llmstxt CLI: one-shot llms.txt generator.
//!
//! Scans a directory tree for markdown files and emits spec-compliant
//! llms.txt and llms-full.txt artifacts, optionally committing them.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
