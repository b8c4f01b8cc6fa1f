//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Wikitree path taxonomy CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify pages relative to a path (siblings, children, parent)
    #[command(visible_alias = "c")]
    Classify {
        /// Path to classify against. If omitted, classifies every page
        /// in the snapshot.
        path: Option<String>,

        #[command(flatten)]
        args: OutputArgs,
    },

    /// Build the page-and-directory index for a snapshot
    #[command(visible_alias = "i")]
    Index {
        /// Emit only the virtual directory paths (the listing pages a
        /// build must synthesize)
        #[arg(long)]
        virtual_only: bool,

        #[command(flatten)]
        args: OutputArgs,
    },
}

/// Shared snapshot/output arguments for both subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Snapshot file: a JSON array of {id, title} documents
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub snapshot: PathBuf,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_classify(&self) -> bool {
        matches!(self.command, Commands::Classify { .. })
    }
    pub const fn is_index(&self) -> bool {
        matches!(self.command, Commands::Index { .. })
    }
}
