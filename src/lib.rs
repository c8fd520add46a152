//! Facade crate for the PromptAndGo personalisation engine.
//!
//! This crate re-exports the core domain types and the keyword relevance
//! scorer, and exposes store implementations behind feature flags.
//!
//! ```
//! use promptandgo::{
//!     CandidateItem, DEFAULT_FEED_LIMIT, KeywordRelevanceScorer, PreferenceMap, UserContext,
//!     rank_candidates,
//! };
//!
//! # fn main() -> Result<(), promptandgo::CandidateItemError> {
//! let context = UserContext::new().with_industry("Finance");
//! let candidates = [CandidateItem::new("p-1", "Quarterly budget review")?];
//! let feed = rank_candidates(
//!     &KeywordRelevanceScorer::default(),
//!     &context,
//!     &candidates,
//!     &PreferenceMap::new(),
//!     DEFAULT_FEED_LIMIT,
//! );
//! assert_eq!(feed.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use promptandgo_core::{
    CandidateItem, CandidateItemError, ContentStore, MAX_MATCH_REASONS, Preference,
    PreferenceMap, PreferenceStore, ProfileStore, RelevanceScorer, ScoredResult, StoreError,
    UserContext,
};
pub use promptandgo_scorer::{
    DEFAULT_FEED_LIMIT, FeedError, KeywordCategory, KeywordRelevanceScorer, KeywordTaxonomy,
    LIKED_REASON, PersonalisedFeed, RELEVANT_CATEGORIES, ScoreBreakdown, ScoreWeights,
    ScorerConfigError, outcome_tokens, rank_candidates, relevance_percentage,
};

#[cfg(feature = "store-sqlite")]
pub use promptandgo_core::{CATALOGUE_SCHEMA, SqliteCatalogue, SqliteCatalogueError};

#[cfg(feature = "test-support")]
pub use promptandgo_core::MemoryCatalogue;
