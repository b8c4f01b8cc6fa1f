//! Path taxonomy for wiki-style content trees.
//!
//! A content tree addresses documents by slash-separated ids, optionally
//! carrying a file extension (`guides/setup.md` and `guides/setup` are the
//! same logical location). This crate answers two questions about such a
//! tree, both as pure functions over a snapshot of `(id, title)` pairs:
//!
//! - [`relative_paths`]: how does every other document relate to one
//!   current path? Siblings, children, collapsed sibling/child directories,
//!   and the parent directory, ready to render as navigation links.
//! - [`PathIndex`]: which paths exist at all? Every document id plus every
//!   implied ancestor directory, with virtual directories (no page of their
//!   own) marked so a build knows which listing pages to synthesize.
//!
//! # Example
//!
//! ```
//! use wikitree::{PageLink, relative_paths};
//!
//! let pages = vec![
//!     PageLink::new("guides/setup.md", "Setup"),
//!     PageLink::new("guides/advanced/tuning.md", "Tuning"),
//! ];
//!
//! let result = relative_paths(&pages, "guides/setup");
//! assert_eq!(result.current_page.title, "Setup");
//! assert_eq!(result.sibling_directories[0].id, "guides/advanced");
//! ```

pub mod cli;
pub mod core;
pub mod logger;
pub mod taxonomy;

pub use crate::core::PageLink;
pub use taxonomy::{PathIndex, RelativePaths, relative_paths};
