//! Data access traits for personalisation inputs.
//!
//! Scoring itself performs no I/O. These read-only seams gather the three
//! inputs it needs: the visitor's [`UserContext`], the candidate prompts, and
//! the visitor's [`PreferenceMap`]. Integrations implement them over whatever
//! backend holds the data.

use thiserror::Error;

use crate::{CandidateItem, PreferenceMap, UserContext};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{CATALOGUE_SCHEMA, SqliteCatalogue, SqliteCatalogueError};

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored preference flag was neither `liked` nor `disliked`.
    #[error("preference {value:?} for prompt {item_id} is not recognised")]
    InvalidPreference {
        /// Candidate the flag belongs to.
        item_id: String,
        /// Raw stored value.
        value: String,
    },
    /// The backing store failed.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Read-only access to visitor profiles.
///
/// # Examples
///
/// ```rust
/// use promptandgo_core::{ProfileStore, StoreError, UserContext};
///
/// struct SingleProfile(UserContext);
///
/// impl ProfileStore for SingleProfile {
///     fn user_context(&self, _user_id: &str) -> Result<Option<UserContext>, StoreError> {
///         Ok(Some(self.0.clone()))
///     }
/// }
///
/// let store = SingleProfile(UserContext::new().with_industry("Finance"));
/// let context = store.user_context("u-1").expect("in-memory lookup");
/// assert_eq!(context.and_then(|c| c.industry().map(str::to_owned)), Some("Finance".into()));
/// ```
pub trait ProfileStore {
    /// Return the profile context for `user_id`, or `None` when the visitor
    /// has no profile.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn user_context(&self, user_id: &str) -> Result<Option<UserContext>, StoreError>;
}

/// Read-only access to the prompt library.
pub trait ContentStore {
    /// Return the candidate prompts in the store's natural order.
    ///
    /// Ranking ties keep this order.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn candidates(&self) -> Result<Vec<CandidateItem>, StoreError>;
}

/// Read-only access to per-visitor prompt feedback.
pub trait PreferenceStore {
    /// Return every preference recorded by `user_id`.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read or holds an
    /// unrecognised flag.
    fn preferences(&self, user_id: &str) -> Result<PreferenceMap, StoreError>;
}

impl<T: ProfileStore + ?Sized> ProfileStore for &T {
    fn user_context(&self, user_id: &str) -> Result<Option<UserContext>, StoreError> {
        (**self).user_context(user_id)
    }
}

impl<T: ContentStore + ?Sized> ContentStore for &T {
    fn candidates(&self) -> Result<Vec<CandidateItem>, StoreError> {
        (**self).candidates()
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn preferences(&self, user_id: &str) -> Result<PreferenceMap, StoreError> {
        (**self).preferences(user_id)
    }
}
