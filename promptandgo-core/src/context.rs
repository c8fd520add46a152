//! Profile context describing what a visitor is working on.
//!
//! Each field is optional. Blank strings are treated as absent so that
//! half-completed onboarding forms never contribute to scoring.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visitor profile fields consulted by relevance scoring.
///
/// # Examples
/// ```
/// use promptandgo_core::UserContext;
///
/// let context = UserContext::new()
///     .with_industry("Technology")
///     .with_project_type("Content Creation");
/// assert_eq!(context.industry(), Some("Technology"));
/// assert!(context.preferred_tone().is_none());
/// assert!(!context.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct UserContext {
    industry: Option<String>,
    project_type: Option<String>,
    preferred_tone: Option<String>,
    desired_outcome: Option<String>,
}

impl UserContext {
    /// Construct a context with no populated fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the industry while returning `self` for chaining.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the project type while returning `self` for chaining.
    #[must_use]
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Set the preferred tone while returning `self` for chaining.
    #[must_use]
    pub fn with_preferred_tone(mut self, tone: impl Into<String>) -> Self {
        self.preferred_tone = Some(tone.into());
        self
    }

    /// Set the free-text desired outcome while returning `self` for chaining.
    #[must_use]
    pub fn with_desired_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.desired_outcome = Some(outcome.into());
        self
    }

    /// Industry label, if populated.
    #[must_use]
    pub fn industry(&self) -> Option<&str> {
        populated(self.industry.as_deref())
    }

    /// Project type label, if populated.
    #[must_use]
    pub fn project_type(&self) -> Option<&str> {
        populated(self.project_type.as_deref())
    }

    /// Preferred tone label, if populated.
    #[must_use]
    pub fn preferred_tone(&self) -> Option<&str> {
        populated(self.preferred_tone.as_deref())
    }

    /// Desired outcome text, if populated.
    #[must_use]
    pub fn desired_outcome(&self) -> Option<&str> {
        populated(self.desired_outcome.as_deref())
    }

    /// Report whether no field is populated.
    ///
    /// Scoring is skipped entirely for an empty context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.industry().is_none()
            && self.project_type().is_none()
            && self.preferred_tone().is_none()
            && self.desired_outcome().is_none()
    }
}

fn populated(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
