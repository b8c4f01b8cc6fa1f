//! Snapshot loading - the document list supplied by the content loader.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::PageLink;

/// Errors reading a page snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("snapshot parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// Load a snapshot file: a JSON array of `{id, title}` objects.
///
/// Duplicate ids are not rejected here; the taxonomy passes resolve them
/// with last-write-wins semantics.
pub fn load(path: &Path) -> Result<Vec<PageLink>, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| SnapshotError::Json(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "guides/setup.md", "title": "Setup"}}, {{"id": "index.md", "title": "Home"}}]"#
        )
        .unwrap();

        let entries = load(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], PageLink::new("guides/setup.md", "Setup"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/pages.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(..)));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(..)));
    }
}
