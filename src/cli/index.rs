//! Index subcommand implementation.

use anyhow::Result;

use super::args::OutputArgs;
use super::{snapshot, write_output};
use crate::log;
use crate::taxonomy::PathIndex;

/// Execute the index command.
pub fn run_index(virtual_only: bool, args: &OutputArgs) -> Result<()> {
    let entries = snapshot::load(&args.snapshot)?;
    let index = PathIndex::build(&entries);

    log!("index"; "{} paths ({} virtual directories) from {} pages",
        index.len(), index.virtual_directories().count(), entries.len());

    let value = if virtual_only {
        serde_json::to_value(index.virtual_directories().collect::<Vec<_>>())?
    } else {
        serde_json::to_value(&index)?
    };

    write_output(&value, args)
}
