//! Hash collections used across TabSwipe.
//!
//! Re-exports of the AHash-backed collections so every crate hashes pane
//! identities the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
