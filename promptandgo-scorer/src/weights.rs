//! Point weights applied while scoring.
#![forbid(unsafe_code)]

use crate::ScorerConfigError;

/// Points awarded per keyword match, per quality signal, and per preference.
///
/// The defaults are the product's published scoring constants; changing
/// them shifts every visitor's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Points per industry keyword found.
    pub industry_match: u32,
    /// Points per project type keyword found.
    pub project_type_match: u32,
    /// Points per tone keyword found.
    pub tone_match: u32,
    /// Points per desired outcome token found.
    pub outcome_match: u32,
    /// Bonus when the prompt sits in one of the relevant categories.
    pub category_bonus: u32,
    /// Bonus for a substantial excerpt.
    pub excerpt_bonus: u32,
    /// Bonus for a well-tagged prompt.
    pub tag_bonus: u32,
    /// Bonus for a substantial "what for" description.
    pub description_bonus: u32,
    /// Raw points added for a liked prompt.
    pub liked_bonus: u32,
    /// Raw points removed for a disliked prompt.
    pub disliked_penalty: u32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when either preference
    /// adjustment is zero, since liking or disliking must always move the
    /// score.
    pub const fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.liked_bonus == 0 || self.disliked_penalty == 0 {
            return Err(ScorerConfigError::InvalidWeights);
        }
        Ok(self)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            industry_match: 5,
            project_type_match: 5,
            tone_match: 3,
            outcome_match: 3,
            category_bonus: 5,
            excerpt_bonus: 2,
            tag_bonus: 3,
            description_bonus: 2,
            liked_bonus: 20,
            disliked_penalty: 10,
        }
    }
}
