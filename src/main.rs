//! Wikitree - path taxonomy for wiki-style content trees.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use wikitree::cli::{Cli, Commands, classify::run_classify, index::run_index};
use wikitree::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Classify { path, args } => run_classify(path.as_deref(), args),
        Commands::Index { virtual_only, args } => run_index(*virtual_only, args),
    }
}
