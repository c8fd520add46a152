//! Output of a single scoring pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CandidateItem;

/// Upper bound on the reasons attached to a [`ScoredResult`].
pub const MAX_MATCH_REASONS: usize = 3;

/// A candidate paired with its relevance percentage and match reasons.
///
/// The constructor enforces the invariants: the score never exceeds `100`
/// and at most [`MAX_MATCH_REASONS`] reasons are kept, in the order given.
///
/// # Examples
/// ```
/// use promptandgo_core::{CandidateItem, ScoredResult};
///
/// # fn main() -> Result<(), promptandgo_core::CandidateItemError> {
/// let item = CandidateItem::new("p-1", "Blog outline")?;
/// let reasons = ["a", "b", "c", "d"].map(String::from).to_vec();
/// let result = ScoredResult::new(item, 140, reasons);
/// assert_eq!(result.relevance_score, 100);
/// assert_eq!(result.match_reasons.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredResult {
    /// The scored candidate.
    pub item: CandidateItem,
    /// Relevance percentage in `0..=100`.
    pub relevance_score: u8,
    /// Human-readable reasons, most important first.
    pub match_reasons: Vec<String>,
}

impl ScoredResult {
    /// Build a result, clamping the score and truncating the reasons.
    #[must_use]
    pub fn new(item: CandidateItem, relevance_score: u8, mut match_reasons: Vec<String>) -> Self {
        match_reasons.truncate(MAX_MATCH_REASONS);
        Self {
            item,
            relevance_score: relevance_score.min(100),
            match_reasons,
        }
    }

    /// Identifier of the scored candidate.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(60, 60)]
    #[case(100, 100)]
    #[case(255, 100)]
    fn score_is_clamped(#[case] input: u8, #[case] expected: u8) {
        let item = CandidateItem::new("p-1", "Title").expect("valid candidate");
        let result = ScoredResult::new(item, input, Vec::new());
        assert_eq!(result.relevance_score, expected);
    }

    #[rstest]
    fn reasons_keep_leading_entries() {
        let item = CandidateItem::new("p-1", "Title").expect("valid candidate");
        let reasons = vec!["first".to_owned(), "second".to_owned()];
        let result = ScoredResult::new(item, 10, reasons.clone());
        assert_eq!(result.match_reasons, reasons);
        assert_eq!(result.id(), "p-1");
    }
}
