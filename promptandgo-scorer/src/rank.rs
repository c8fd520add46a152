//! Rank scored candidates into a feed.

use log::{debug, warn};
use promptandgo_core::{CandidateItem, PreferenceMap, RelevanceScorer, ScoredResult, UserContext};

/// Number of prompts shown in a personalised feed.
pub const DEFAULT_FEED_LIMIT: usize = 6;

/// Score every candidate and keep the `limit` most relevant.
///
/// Returns an empty feed when `context` has no populated field. Candidates
/// that fail validation are skipped with a warning, and zero-score results
/// are dropped. Remaining results are ordered by descending score; equal
/// scores keep their input order.
pub fn rank_candidates<S>(
    scorer: &S,
    context: &UserContext,
    candidates: &[CandidateItem],
    preferences: &PreferenceMap,
    limit: usize,
) -> Vec<ScoredResult>
where
    S: RelevanceScorer + ?Sized,
{
    if context.is_empty() {
        debug!("skipping personalisation: profile context is empty");
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = candidates
        .iter()
        .filter_map(|item| match scorer.score(context, item, preferences.get(&item.id)) {
            Ok(scored) => scored,
            Err(err) => {
                warn!("skipping candidate {:?}: {err}", item.id);
                None
            }
        })
        .filter(|result| result.relevance_score > 0)
        .collect();

    // `sort_by` is stable, so ties keep catalogue order.
    results.sort_by(|left, right| right.relevance_score.cmp(&left.relevance_score));
    let matched = results.len();
    results.truncate(limit);
    debug!(
        "ranked {} candidates: {matched} matched, kept {}",
        candidates.len(),
        results.len()
    );
    results
}
