//! The two taxonomy passes over a document snapshot.
//!
//! [`relative_paths`] buckets every page relative to one current path
//! (invoked once per page render); [`PathIndex::build`] maps out every
//! document and implied directory path (invoked once per full rebuild).
//! Both are pure functions over a caller-owned snapshot and can run
//! concurrently without coordination.

mod index;
mod relatives;

pub use index::PathIndex;
pub use relatives::{RelativePaths, relative_paths};
