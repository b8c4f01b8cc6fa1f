//! Relative path classification - the per-page taxonomy pass.
//!
//! Buckets every known page relative to one current path:
//! - `sibling_pages` / `sibling_directories`: one level below the current
//!   page's parent directory
//! - `child_pages` / `child_directories`: one level below the current page
//!   treated as a directory
//! - `parent_directory`: the containing directory, `None` at root
//!
//! Directories deeper than one level are collapsed to their first segment
//! below the reference path, so arbitrarily nested subtrees surface as a
//! single directory entry.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::core::PageLink;
use crate::core::path::{self, SEP};

/// The relationship buckets computed for one page of a content tree.
///
/// The four collections carry no guaranteed order. `current_page` and
/// `parent_directory` fall back to synthesized placeholders when no
/// document exists at the computed path.
#[derive(Debug, Clone, Serialize)]
pub struct RelativePaths {
    pub sibling_pages: Vec<PageLink>,
    pub sibling_directories: Vec<PageLink>,
    pub child_pages: Vec<PageLink>,
    pub child_directories: Vec<PageLink>,
    pub parent_directory: Option<PageLink>,
    pub current_page: PageLink,
}

/// Classify every entry of a snapshot relative to `current_path`.
///
/// Pure, single pass, O(n). `current_path` need not appear in the snapshot;
/// comparisons are extension-normalized throughout, while entries drawn from
/// real documents keep their raw id for linking. Duplicate ids collapse by
/// normalized path, last write wins.
pub fn relative_paths(entries: &[PageLink], current_path: &str) -> RelativePaths {
    let current = path::parse(current_path);
    let current_xless = current.extensionless();

    let mut current_page: Option<PageLink> = None;
    let mut parent_directory: Option<PageLink> = None;
    let mut sibling_pages: FxHashMap<String, PageLink> = FxHashMap::default();
    let mut child_pages: FxHashMap<String, PageLink> = FxHashMap::default();
    let mut child_dir_paths: FxHashSet<String> = FxHashSet::default();
    let mut sibling_dir_paths: FxHashSet<String> = FxHashSet::default();

    for entry in entries {
        let page = path::parse(&entry.id);
        let page_xless = page.extensionless();

        // Ordered decision list: a path can textually satisfy more than one
        // of these predicates, so the first match wins. Keep the order:
        // exact, same-directory, direct-child, descendant-of-path,
        // descendant-of-parent, parent.
        if page_xless == current_xless {
            current_page = Some(entry.clone());
            continue;
        }

        if page.dir == current.dir {
            sibling_pages.insert(page_xless, entry.clone());
            continue;
        }

        if page.dir == current_xless {
            child_pages.insert(page_xless, entry.clone());
            continue;
        }

        if is_below(page.dir, &current_xless) {
            child_dir_paths.insert(collapse(page.dir, current_xless.len()).to_string());
            continue;
        }

        // At root every remaining subdirectory page is an indirect sibling;
        // pages with an empty directory were already taken as siblings above.
        if current.dir.is_empty() || is_below(page.dir, current.dir) {
            sibling_dir_paths.insert(collapse(page.dir, current.dir.len()).to_string());
            continue;
        }

        if page_xless == current.dir {
            parent_directory = Some(entry.clone());
        }
    }

    let child_directories = resolve_directories(child_dir_paths, &mut child_pages);
    let sibling_directories = resolve_directories(sibling_dir_paths, &mut sibling_pages);

    let current_page = current_page.unwrap_or_else(|| PageLink {
        id: current_xless,
        title: current.name.to_string(),
    });

    let parent_directory = parent_directory.or_else(|| {
        (!current.dir.is_empty()).then(|| PageLink {
            id: current.dir.to_string(),
            title: path::parse(current.dir).name.to_string(),
        })
    });

    RelativePaths {
        sibling_pages: sibling_pages.into_values().collect(),
        sibling_directories,
        child_pages: child_pages.into_values().collect(),
        child_directories,
        parent_directory,
        current_page,
    }
}

/// Whether `dir` is a strict descendant of `prefix` (prefix plus separator).
///
/// The root prefix never matches here; callers special-case it.
fn is_below(dir: &str, prefix: &str) -> bool {
    dir.len() > prefix.len()
        && dir.starts_with(prefix)
        && dir.as_bytes()[prefix.len()] == SEP as u8
}

/// Truncate a descendant directory down to its first segment below a prefix
/// of the given length.
fn collapse(dir: &str, prefix_len: usize) -> &str {
    // Skip the separator that follows the prefix (absent at root).
    let start = if prefix_len == 0 { 0 } else { prefix_len + 1 };
    match dir[start..].find(SEP) {
        Some(idx) => &dir[..start + idx],
        None => dir,
    }
}

/// Resolve collapsed directory candidates against the page bucket.
///
/// A page sitting exactly at a collapsed path takes the directory slot,
/// keeping its own id and title, and leaves the page bucket so it cannot
/// appear twice. Everything else becomes a synthesized entry titled after
/// the path's final segment.
fn resolve_directories(
    candidates: FxHashSet<String>,
    pages: &mut FxHashMap<String, PageLink>,
) -> Vec<PageLink> {
    candidates
        .into_iter()
        .map(|dir_path| match pages.remove(&dir_path) {
            Some(page) => page,
            None => {
                let title = path::parse(&dir_path).name.to_string();
                PageLink { id: dir_path, title }
            }
        })
        .collect()
}
