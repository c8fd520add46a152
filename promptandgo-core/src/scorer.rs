//! Score candidates for a visitor's context.
//!
//! The `RelevanceScorer` trait assigns a relevance percentage to a
//! [`CandidateItem`](crate::CandidateItem) given a visitor's
//! [`UserContext`](crate::UserContext) and any recorded
//! [`Preference`](crate::Preference).

use crate::{CandidateItem, CandidateItemError, Preference, ScoredResult, UserContext};

/// Calculate a relevance percentage for a candidate.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a scorer can be
/// shared by concurrent requests. Scoring is pure: the same inputs always
/// yield the same [`ScoredResult`].
///
/// Implementations must:
/// - Return `Ok(None)` when [`UserContext::is_empty`] holds, signalling that
///   personalisation does not apply.
/// - Reject candidates failing [`CandidateItem::validate`].
/// - Produce scores in `0..=100`; [`ScoredResult::new`] clamps larger values.
///
/// # Examples
///
/// ```rust
/// use promptandgo_core::{
///     CandidateItem, CandidateItemError, Preference, RelevanceScorer, ScoredResult, UserContext,
/// };
///
/// struct FlatScorer;
///
/// impl RelevanceScorer for FlatScorer {
///     fn score(
///         &self,
///         context: &UserContext,
///         item: &CandidateItem,
///         _preference: Option<Preference>,
///     ) -> Result<Option<ScoredResult>, CandidateItemError> {
///         if context.is_empty() {
///             return Ok(None);
///         }
///         item.validate()?;
///         Ok(Some(ScoredResult::new(item.clone(), 50, Vec::new())))
///     }
/// }
///
/// # fn main() -> Result<(), CandidateItemError> {
/// let item = CandidateItem::new("p-1", "Blog outline")?;
/// let context = UserContext::new().with_industry("Technology");
/// let scored = FlatScorer.score(&context, &item, None)?;
/// assert_eq!(scored.map(|result| result.relevance_score), Some(50));
/// assert!(FlatScorer.score(&UserContext::new(), &item, None)?.is_none());
/// # Ok(())
/// # }
/// ```
pub trait RelevanceScorer: Send + Sync {
    /// Score `item` for `context`, adjusting for `preference` when present.
    ///
    /// # Errors
    /// Returns [`CandidateItemError`] when the candidate is malformed.
    fn score(
        &self,
        context: &UserContext,
        item: &CandidateItem,
        preference: Option<Preference>,
    ) -> Result<Option<ScoredResult>, CandidateItemError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Noop;

    impl RelevanceScorer for Noop {
        fn score(
            &self,
            _context: &UserContext,
            _item: &CandidateItem,
            _preference: Option<Preference>,
        ) -> Result<Option<ScoredResult>, CandidateItemError> {
            Ok(None)
        }
    }

    #[rstest]
    fn scorers_are_usable_as_shared_trait_objects() {
        let scorer: std::sync::Arc<dyn RelevanceScorer> = std::sync::Arc::new(Noop);
        let item = CandidateItem::new("p-1", "Title").expect("valid candidate");
        let context = UserContext::new().with_industry("Technology");
        let result = std::thread::scope(|scope| {
            scope
                .spawn(|| scorer.score(&context, &item, None))
                .join()
                .expect("scoring thread completes")
        });
        assert_eq!(result, Ok(None));
    }
}
