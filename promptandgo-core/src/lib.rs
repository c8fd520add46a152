//! Core domain types for the PromptAndGo personalisation engine.
//!
//! These models describe the inputs and outputs of relevance scoring: the
//! visitor's [`UserContext`], the [`CandidateItem`] prompts being ranked, the
//! per-prompt [`Preference`] flags, and the resulting [`ScoredResult`]. The
//! [`store`] module defines the read-only seams used to fetch them.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod context;
pub mod preference;
pub mod result;
pub mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{CandidateItem, CandidateItemError};
pub use context::UserContext;
pub use preference::{Preference, PreferenceMap};
pub use result::{MAX_MATCH_REASONS, ScoredResult};
pub use scorer::RelevanceScorer;
pub use store::{ContentStore, PreferenceStore, ProfileStore, StoreError};
#[cfg(feature = "store-sqlite")]
pub use store::{CATALOGUE_SCHEMA, SqliteCatalogue, SqliteCatalogueError};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::MemoryCatalogue;
#[cfg(all(any(test, feature = "test-support"), feature = "store-sqlite"))]
pub use test_support::write_sqlite_catalogue;
