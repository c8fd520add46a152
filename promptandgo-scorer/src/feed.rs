//! Fetch-then-score assembly of a visitor's personalised feed.
#![forbid(unsafe_code)]

use log::debug;
use promptandgo_core::{ContentStore, PreferenceStore, ProfileStore, RelevanceScorer, ScoredResult};

use crate::{FeedError, rank_candidates};

/// Builds personalised feeds from stores and a scorer.
///
/// All store reads happen before scoring starts, so the scoring stage stays
/// a pure function of the gathered inputs.
///
/// # Examples
/// ```
/// use promptandgo_core::{CandidateItem, MemoryCatalogue, Preference, UserContext};
/// use promptandgo_scorer::{DEFAULT_FEED_LIMIT, KeywordRelevanceScorer, PersonalisedFeed};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalogue = MemoryCatalogue::default()
///     .with_profile("u-1", UserContext::new().with_industry("Technology"))
///     .with_candidate(CandidateItem::new("p-1", "SaaS launch plan")?)
///     .with_preference("u-1", "p-1", Preference::Liked);
/// let feed = PersonalisedFeed::new(
///     &catalogue,
///     &catalogue,
///     &catalogue,
///     KeywordRelevanceScorer::default(),
/// );
///
/// let results = feed.for_user("u-1", DEFAULT_FEED_LIMIT)?;
/// assert_eq!(results.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PersonalisedFeed<P, C, R, S> {
    profiles: P,
    content: C,
    preferences: R,
    scorer: S,
}

impl<P, C, R, S> PersonalisedFeed<P, C, R, S>
where
    P: ProfileStore,
    C: ContentStore,
    R: PreferenceStore,
    S: RelevanceScorer,
{
    /// Combine stores and a scorer into a feed builder.
    pub const fn new(profiles: P, content: C, preferences: R, scorer: S) -> Self {
        Self {
            profiles,
            content,
            preferences,
            scorer,
        }
    }

    /// Build the top `limit` results for `user_id`.
    ///
    /// Visitors without a profile, or with an empty one, get an empty feed
    /// and no candidates are loaded.
    ///
    /// # Errors
    /// Returns [`FeedError::Store`] when any store read fails.
    pub fn for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ScoredResult>, FeedError> {
        let Some(context) = self.profiles.user_context(user_id)? else {
            debug!("no profile for user {user_id}; returning empty feed");
            return Ok(Vec::new());
        };
        if context.is_empty() {
            debug!("profile for user {user_id} is empty; returning empty feed");
            return Ok(Vec::new());
        }

        let candidates = self.content.candidates()?;
        let preferences = self.preferences.preferences(user_id)?;
        Ok(rank_candidates(
            &self.scorer,
            &context,
            &candidates,
            &preferences,
            limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{DEFAULT_FEED_LIMIT, KeywordRelevanceScorer};
    use promptandgo_core::{
        CandidateItem, MemoryCatalogue, Preference, StoreError, UserContext,
    };
    use rstest::rstest;

    /// Content store that records whether it was consulted.
    #[derive(Default)]
    struct CountingContent {
        calls: Cell<u32>,
    }

    impl ContentStore for CountingContent {
        fn candidates(&self) -> Result<Vec<CandidateItem>, StoreError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }
    }

    struct FailingPreferences;

    impl PreferenceStore for FailingPreferences {
        fn preferences(&self, _user_id: &str) -> Result<promptandgo_core::PreferenceMap, StoreError> {
            Err(StoreError::Backend("preferences offline".into()))
        }
    }

    #[rstest]
    #[case::missing_profile(MemoryCatalogue::default())]
    #[case::empty_profile(MemoryCatalogue::default().with_profile("u-1", UserContext::new()))]
    fn empty_context_never_loads_candidates(#[case] profiles: MemoryCatalogue) {
        let content = CountingContent::default();
        let feed = PersonalisedFeed::new(
            &profiles,
            &content,
            &profiles,
            KeywordRelevanceScorer::default(),
        );

        let results = feed.for_user("u-1", DEFAULT_FEED_LIMIT).expect("feed");

        assert!(results.is_empty());
        assert_eq!(content.calls.get(), 0);
    }

    #[rstest]
    fn liked_prompt_leads_the_feed() {
        let catalogue = MemoryCatalogue::with_candidates([
            CandidateItem::new("p-1", "Software blog plan")
                .expect("valid")
                .with_tags(["tech", "content"]),
            CandidateItem::new("p-2", "Tech tips").expect("valid"),
        ])
        .with_profile(
            "u-1",
            UserContext::new()
                .with_industry("Technology")
                .with_project_type("Content Creation"),
        )
        .with_preference("u-1", "p-2", Preference::Liked);
        let feed = PersonalisedFeed::new(
            &catalogue,
            &catalogue,
            &catalogue,
            KeywordRelevanceScorer::default(),
        );

        let results = feed.for_user("u-1", DEFAULT_FEED_LIMIT).expect("feed");

        let ids: Vec<_> = results.iter().map(ScoredResult::id).collect();
        assert_eq!(ids, ["p-2", "p-1"]);
    }

    #[rstest]
    fn store_failures_propagate() {
        let catalogue = MemoryCatalogue::default()
            .with_profile("u-1", UserContext::new().with_industry("Finance"));
        let feed = PersonalisedFeed::new(
            &catalogue,
            &catalogue,
            FailingPreferences,
            KeywordRelevanceScorer::default(),
        );

        let err = feed
            .for_user("u-1", DEFAULT_FEED_LIMIT)
            .expect_err("preference store is offline");
        assert!(matches!(err, FeedError::Store(StoreError::Backend(_))));
    }
}
