//! Relevance scoring for the PromptAndGo prompt library.
//!
//! The crate turns a visitor's [`UserContext`](promptandgo_core::UserContext)
//! into a ranked, personalised feed of prompts:
//! - **Keyword scoring** resolves each populated context field through a
//!   [`KeywordTaxonomy`], counts case-insensitive keyword hits in a prompt's
//!   searchable text, adds small quality bonuses, adjusts for liked or
//!   disliked feedback, and maps the raw points onto a `0..=100` percentage
//!   with [`relevance_percentage`]. [`KeywordRelevanceScorer`] implements the
//!   [`RelevanceScorer`](promptandgo_core::RelevanceScorer) trait.
//! - **Ranking** via [`rank_candidates`] drops unusable and zero-score
//!   results, sorts the rest by score (ties keep input order) and keeps the
//!   top entries.
//! - **Feeds** via [`PersonalisedFeed`] gather the inputs from stores first,
//!   then hand them to the pure scoring stage.
//!
//! # Examples
//!
//! ```
//! use promptandgo_core::{CandidateItem, PreferenceMap, UserContext};
//! use promptandgo_scorer::{DEFAULT_FEED_LIMIT, KeywordRelevanceScorer, rank_candidates};
//!
//! # fn main() -> Result<(), promptandgo_core::CandidateItemError> {
//! let scorer = KeywordRelevanceScorer::default();
//! let context = UserContext::new()
//!     .with_industry("Technology")
//!     .with_project_type("Content Creation");
//! let candidates = vec![
//!     CandidateItem::new("p-1", "Guide")?
//!         .with_tags(["tech", "content"])
//!         .with_body("A writing guide"),
//!     CandidateItem::new("p-2", "Recipe card")?,
//! ];
//!
//! let feed = rank_candidates(
//!     &scorer,
//!     &context,
//!     &candidates,
//!     &PreferenceMap::new(),
//!     DEFAULT_FEED_LIMIT,
//! );
//! assert_eq!(feed.len(), 1);
//! assert_eq!(feed[0].relevance_score, 60);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod feed;
mod keyword;
mod rank;
mod scale;
mod taxonomy;
mod weights;

pub use error::{FeedError, ScorerConfigError};
pub use feed::PersonalisedFeed;
pub use keyword::{
    KeywordRelevanceScorer, LIKED_REASON, RELEVANT_CATEGORIES, ScoreBreakdown, outcome_tokens,
};
pub use rank::{DEFAULT_FEED_LIMIT, rank_candidates};
pub use scale::relevance_percentage;
pub use taxonomy::{KeywordCategory, KeywordTaxonomy};
pub use weights::ScoreWeights;
