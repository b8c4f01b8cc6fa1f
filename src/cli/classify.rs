//! Classify subcommand implementation.

use anyhow::Result;
use rayon::prelude::*;
use serde_json::Value as JsonValue;

use super::args::OutputArgs;
use super::{snapshot, write_output};
use crate::taxonomy::relative_paths;
use crate::{debug, log};

/// Execute the classify command.
///
/// With a path, classifies once against it. Without, classifies every page
/// of the snapshot in parallel - the access pattern of a full site build -
/// and emits an id -> buckets map.
pub fn run_classify(path: Option<&str>, args: &OutputArgs) -> Result<()> {
    let entries = snapshot::load(&args.snapshot)?;
    log!("classify"; "loaded {} pages from {}", entries.len(), args.snapshot.display());

    let value = match path {
        Some(current) => serde_json::to_value(relative_paths(&entries, current))?,
        None => {
            debug!("classify"; "classifying {} pages in parallel", entries.len());
            let results: Vec<(String, JsonValue)> = entries
                .par_iter()
                .map(|entry| {
                    let paths = relative_paths(&entries, &entry.id);
                    serde_json::to_value(paths).map(|value| (entry.id.clone(), value))
                })
                .collect::<Result<_, _>>()?;

            let mut map = serde_json::Map::new();
            for (id, value) in results {
                map.insert(id, value);
            }
            JsonValue::Object(map)
        }
    };

    write_output(&value, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn snapshot_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn output_args(snapshot: &tempfile::NamedTempFile) -> (OutputArgs, tempfile::NamedTempFile) {
        let out = tempfile::NamedTempFile::new().unwrap();
        let args = OutputArgs {
            snapshot: snapshot.path().to_path_buf(),
            pretty: false,
            output: Some(out.path().to_path_buf()),
        };
        (args, out)
    }

    #[test]
    fn test_classify_single_path_to_file() {
        let snap = snapshot_file(
            r#"[
                {"id": "guides/setup.md", "title": "Setup"},
                {"id": "guides/install.md", "title": "Install"}
            ]"#,
        );
        let (args, out) = output_args(&snap);

        run_classify(Some("guides/setup.md"), &args).unwrap();

        let written: JsonValue =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(written["current_page"]["title"], "Setup");
        assert_eq!(written["sibling_pages"][0]["title"], "Install");
    }

    #[test]
    fn test_classify_all_pages() {
        let snap = snapshot_file(
            r#"[
                {"id": "a.md", "title": "A"},
                {"id": "b.md", "title": "B"}
            ]"#,
        );
        let (args, out) = output_args(&snap);

        run_classify(None, &args).unwrap();

        let written: JsonValue =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        let map = written.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("a.md"));
        assert_eq!(written["a.md"]["sibling_pages"][0]["title"], "B");
    }
}
