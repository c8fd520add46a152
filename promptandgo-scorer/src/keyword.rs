//! Keyword relevance scoring.
//!
//! The scorer resolves each populated [`UserContext`] field to keywords via a
//! [`KeywordTaxonomy`], counts how many appear in the candidate's searchable
//! text, adds quality bonuses and the visitor's liked/disliked adjustment,
//! and maps the resulting raw points through [`relevance_percentage`].

#![forbid(unsafe_code)]

use promptandgo_core::{
    CandidateItem, CandidateItemError, Preference, RelevanceScorer, ScoredResult, UserContext,
};

use crate::{KeywordCategory, KeywordTaxonomy, ScoreWeights, ScorerConfigError, relevance_percentage};

/// Reason shown first for prompts the visitor liked.
pub const LIKED_REASON: &str = "✨ you liked this prompt";

/// Category fragments that earn the category bonus.
pub const RELEVANT_CATEGORIES: [&str; 4] = ["marketing", "business", "productivity", "strategy"];

const OUTCOME_REASON: &str = "Aligned with your goals";
const MIN_OUTCOME_TOKEN_CHARS: usize = 3;
const EXCERPT_BONUS_MIN_CHARS: usize = 51;
const DESCRIPTION_BONUS_MIN_CHARS: usize = 21;
const TAG_BONUS_MIN_TAGS: usize = 3;

/// Per-category detail behind a relevance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Industry keywords found.
    pub industry_matches: u32,
    /// Project type keywords found.
    pub project_type_matches: u32,
    /// Tone keywords found.
    pub tone_matches: u32,
    /// Desired outcome tokens found.
    pub outcome_matches: u32,
    /// Sum of the quality bonuses.
    pub quality_bonus: u32,
    /// Raw points after the preference adjustment.
    pub raw: u32,
}

impl ScoreBreakdown {
    /// Percentage derived from [`ScoreBreakdown::raw`].
    #[must_use]
    pub fn percentage(&self) -> u8 {
        relevance_percentage(self.raw)
    }
}

/// Split free-text goals into lower-case match tokens.
///
/// Tokens are separated by whitespace or commas; tokens shorter than three
/// characters are dropped, as are repeats.
///
/// # Examples
/// ```
/// use promptandgo_scorer::outcome_tokens;
///
/// assert_eq!(
///     outcome_tokens("Grow my Newsletter, grow sales"),
///     ["grow", "newsletter", "sales"]
/// );
/// ```
#[must_use]
pub fn outcome_tokens(outcome: &str) -> Vec<String> {
    let lowered = outcome.to_lowercase();
    let mut tokens: Vec<String> = Vec::new();
    for token in lowered.split(|c: char| c.is_whitespace() || c == ',') {
        if token.chars().count() < MIN_OUTCOME_TOKEN_CHARS {
            continue;
        }
        if !tokens.iter().any(|seen| seen == token) {
            tokens.push(token.to_owned());
        }
    }
    tokens
}

/// Scorer matching profile keywords against prompt text.
///
/// # Examples
/// ```
/// use promptandgo_core::{CandidateItem, Preference, RelevanceScorer, UserContext};
/// use promptandgo_scorer::{KeywordRelevanceScorer, LIKED_REASON};
///
/// # fn main() -> Result<(), promptandgo_core::CandidateItemError> {
/// let scorer = KeywordRelevanceScorer::default();
/// let context = UserContext::new()
///     .with_industry("Technology")
///     .with_project_type("Content Creation");
/// let item = CandidateItem::new("p-1", "Guide")?
///     .with_tags(["tech", "content"])
///     .with_body("A writing guide");
///
/// let liked = scorer
///     .score(&context, &item, Some(Preference::Liked))?
///     .expect("context is populated");
/// assert_eq!(liked.relevance_score, 95);
/// assert_eq!(liked.match_reasons.first().map(String::as_str), Some(LIKED_REASON));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordRelevanceScorer {
    taxonomy: KeywordTaxonomy,
    weights: ScoreWeights,
}

impl KeywordRelevanceScorer {
    /// Construct a scorer from a taxonomy and weights.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(taxonomy: KeywordTaxonomy, weights: ScoreWeights) -> Result<Self, ScorerConfigError> {
        Ok(Self {
            taxonomy,
            weights: weights.validate()?,
        })
    }

    /// Construct a scorer using `taxonomy` and the default weights.
    #[must_use]
    pub fn with_taxonomy(taxonomy: KeywordTaxonomy) -> Self {
        Self {
            taxonomy,
            weights: ScoreWeights::default(),
        }
    }

    /// Explain how `item` scores for `context`.
    ///
    /// Returns `None` when the context has no populated field.
    #[must_use]
    pub fn breakdown(
        &self,
        context: &UserContext,
        item: &CandidateItem,
        preference: Option<Preference>,
    ) -> Option<ScoreBreakdown> {
        if context.is_empty() {
            return None;
        }
        let text = item.searchable_text();
        let mut breakdown = ScoreBreakdown {
            industry_matches: self.label_matches(KeywordCategory::Industry, context.industry(), &text),
            project_type_matches: self.label_matches(
                KeywordCategory::ProjectType,
                context.project_type(),
                &text,
            ),
            tone_matches: self.label_matches(KeywordCategory::Tone, context.preferred_tone(), &text),
            outcome_matches: context
                .desired_outcome()
                .map_or(0, |outcome| count_matches(&outcome_tokens(outcome), &text)),
            quality_bonus: self.quality_bonus(item),
            raw: 0,
        };

        let weights = &self.weights;
        let base = [
            breakdown.industry_matches.saturating_mul(weights.industry_match),
            breakdown.project_type_matches.saturating_mul(weights.project_type_match),
            breakdown.tone_matches.saturating_mul(weights.tone_match),
            breakdown.outcome_matches.saturating_mul(weights.outcome_match),
            breakdown.quality_bonus,
        ]
        .into_iter()
        .fold(0_u32, u32::saturating_add);
        breakdown.raw = match preference {
            Some(Preference::Liked) => base.saturating_add(weights.liked_bonus),
            Some(Preference::Disliked) => base.saturating_sub(weights.disliked_penalty),
            None => base,
        };
        Some(breakdown)
    }

    fn label_matches(&self, category: KeywordCategory, label: Option<&str>, text: &str) -> u32 {
        label.map_or(0, |value| count_matches(self.taxonomy.keywords(category, value), text))
    }

    fn quality_bonus(&self, item: &CandidateItem) -> u32 {
        let weights = &self.weights;
        [
            (
                item.category.as_deref().is_some_and(is_relevant_category),
                weights.category_bonus,
            ),
            (
                has_min_chars(item.excerpt.as_deref(), EXCERPT_BONUS_MIN_CHARS),
                weights.excerpt_bonus,
            ),
            (item.tags.len() >= TAG_BONUS_MIN_TAGS, weights.tag_bonus),
            (
                has_min_chars(item.description.as_deref(), DESCRIPTION_BONUS_MIN_CHARS),
                weights.description_bonus,
            ),
        ]
        .into_iter()
        .filter(|(earned, _)| *earned)
        .fold(0_u32, |bonus, (_, points)| bonus.saturating_add(points))
    }
}

impl RelevanceScorer for KeywordRelevanceScorer {
    fn score(
        &self,
        context: &UserContext,
        item: &CandidateItem,
        preference: Option<Preference>,
    ) -> Result<Option<ScoredResult>, CandidateItemError> {
        item.validate()?;
        let Some(breakdown) = self.breakdown(context, item, preference) else {
            return Ok(None);
        };
        log::trace!("scored {} with {breakdown:?}", item.id);
        let reasons = match_reasons(context, &breakdown, preference);
        Ok(Some(ScoredResult::new(
            item.clone(),
            breakdown.percentage(),
            reasons,
        )))
    }
}

fn match_reasons(
    context: &UserContext,
    breakdown: &ScoreBreakdown,
    preference: Option<Preference>,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if preference == Some(Preference::Liked) {
        reasons.push(LIKED_REASON.to_owned());
    }
    if let Some(industry) = context.industry().filter(|_| breakdown.industry_matches > 0) {
        reasons.push(format!("{industry} industry focus"));
    }
    if let Some(project) = context
        .project_type()
        .filter(|_| breakdown.project_type_matches > 0)
    {
        reasons.push(format!("Perfect for {project}"));
    }
    if let Some(tone) = context.preferred_tone().filter(|_| breakdown.tone_matches > 0) {
        reasons.push(format!("Matches your {} tone", tone.to_lowercase()));
    }
    if breakdown.outcome_matches > 0 {
        reasons.push(OUTCOME_REASON.to_owned());
    }
    reasons
}

fn count_matches(keywords: &[String], text: &str) -> u32 {
    let hits = keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .count();
    u32::try_from(hits).unwrap_or(u32::MAX)
}

fn is_relevant_category(category: &str) -> bool {
    let lowered = category.to_lowercase();
    RELEVANT_CATEGORIES
        .iter()
        .any(|fragment| lowered.contains(fragment))
}

fn has_min_chars(value: Option<&str>, min_chars: usize) -> bool {
    value.is_some_and(|text| text.chars().count() >= min_chars)
}
