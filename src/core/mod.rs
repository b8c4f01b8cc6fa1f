//! Core types - pure abstractions shared across the codebase.

mod entry;
pub mod path;

pub use entry::PageLink;
