//! Page-and-directory index - every addressable path in the tree.
//!
//! Downstream routing consumes this to decide which directory-listing pages
//! must be synthesized (virtual directories) and which paths already carry
//! authored content (documents).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::PageLink;
use crate::core::path;

/// Index over every path implied by a snapshot.
///
/// Keys are real document ids (raw, as they appear in the snapshot) plus
/// every ancestor directory any id implies. A `Some` value is the document
/// at that path; `None` marks a pure virtual directory. Sorted by path for
/// deterministic iteration and serialization.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct PathIndex {
    paths: BTreeMap<String, Option<PageLink>>,
}

impl PathIndex {
    /// Build the index from the full document list.
    ///
    /// Every document registers its own id (last write wins for duplicate
    /// ids), then its directory chain is walked up to the root, registering
    /// each ancestor once as virtual. A document is never masked by a
    /// directory marker, whichever order the walk discovers the paths in.
    pub fn build(entries: &[PageLink]) -> Self {
        let mut paths: BTreeMap<String, Option<PageLink>> = BTreeMap::new();

        for entry in entries {
            paths.insert(entry.id.clone(), Some(entry.clone()));

            let mut dir = path::parse(&entry.id).dir;
            while !dir.is_empty() {
                paths.entry(dir.to_string()).or_insert(None);
                dir = path::parse(dir).dir;
            }
        }

        Self { paths }
    }

    /// The document at `path`, if one exists there.
    pub fn page(&self, path: &str) -> Option<&PageLink> {
        self.paths.get(path).and_then(|entry| entry.as_ref())
    }

    /// Whether `path` is known at all (document or directory).
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    /// Whether `path` is a directory with no document of its own.
    pub fn is_virtual_directory(&self, path: &str) -> bool {
        matches!(self.paths.get(path), Some(None))
    }

    /// All virtual directory paths, sorted. Each of these implies a listing
    /// page the site build has to generate.
    pub fn virtual_directories(&self) -> impl Iterator<Item = &str> {
        self.paths
            .iter()
            .filter(|(_, entry)| entry.is_none())
            .map(|(path, _)| path.as_str())
    }

    /// Iterate all paths with their optional document, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&PageLink>)> {
        self.paths
            .iter()
            .map(|(path, entry)| (path.as_str(), entry.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
