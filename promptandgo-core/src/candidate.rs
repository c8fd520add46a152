//! Prompts offered to a visitor as personalisation candidates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A prompt from the library that may be recommended.
///
/// `description` holds the "what for" summary shown on prompt cards, while
/// `excerpt` is the longer teaser. Both feed the searchable text alongside the
/// title, body and tags.
///
/// # Examples
/// ```
/// use promptandgo_core::CandidateItem;
///
/// # fn main() -> Result<(), promptandgo_core::CandidateItemError> {
/// let item = CandidateItem::new("p-1", "Blog outline")?
///     .with_tags(["Content", "Writing"])
///     .with_body("Draft an outline for a long-form post.");
/// assert!(item.searchable_text().starts_with("content writing blog outline"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CandidateItem {
    /// Stable identifier, also the key for preference lookups.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short "what for" description.
    #[cfg_attr(feature = "serde", serde(default, alias = "whatFor"))]
    pub description: Option<String>,
    /// Teaser text shown in listings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub excerpt: Option<String>,
    /// Full prompt body.
    #[cfg_attr(feature = "serde", serde(default, alias = "prompt"))]
    pub body: String,
    /// Library category name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Free-form tags in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

/// Errors returned when a candidate lacks its identifying fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CandidateItemError {
    /// The identifier was blank.
    #[error("candidate must have a non-empty id")]
    MissingId,
    /// The title was blank.
    #[error("candidate {id} must have a non-empty title")]
    MissingTitle {
        /// Identifier of the offending candidate.
        id: String,
    },
}

impl CandidateItem {
    /// Validate and construct a candidate with no optional content.
    ///
    /// # Errors
    /// Returns [`CandidateItemError`] when `id` or `title` is blank.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Result<Self, CandidateItemError> {
        let item = Self {
            id: id.into(),
            title: title.into(),
            description: None,
            excerpt: None,
            body: String::new(),
            category: None,
            tags: Vec::new(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the identifying fields of a candidate built by hand or
    /// deserialised from storage.
    ///
    /// # Errors
    /// Returns [`CandidateItemError`] when `id` or `title` is blank.
    pub fn validate(&self) -> Result<(), CandidateItemError> {
        if self.id.trim().is_empty() {
            return Err(CandidateItemError::MissingId);
        }
        if self.title.trim().is_empty() {
            return Err(CandidateItemError::MissingTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Set the "what for" description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the prompt body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the library category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Lower-cased text searched for keyword matches.
    ///
    /// Tags come first, joined by spaces, followed by the title, description,
    /// excerpt and body. Absent or empty parts are skipped.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let tags = self.tags.join(" ");
        [
            Some(tags.as_str()),
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.excerpt.as_deref(),
            Some(self.body.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}
