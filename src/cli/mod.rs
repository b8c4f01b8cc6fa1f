//! CLI layer: argument parsing, snapshot loading, output formatting.

mod args;
pub mod classify;
pub mod index;
pub mod snapshot;

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::log;

pub use args::{Cli, Commands, OutputArgs};
pub use snapshot::SnapshotError;

/// Write a JSON result to stdout or the configured output file.
fn write_output(value: &JsonValue, args: &OutputArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{formatted}")?;
        log!("output"; "wrote result to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}
