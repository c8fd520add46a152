//! Test-only, in-memory store implementation used by unit and behaviour
//! tests.

use std::collections::HashMap;

use crate::{
    CandidateItem, ContentStore, Preference, PreferenceMap, PreferenceStore, ProfileStore,
    StoreError, UserContext,
};

/// In-memory catalogue implementing every store trait.
///
/// Candidates are returned in insertion order.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalogue {
    profiles: HashMap<String, UserContext>,
    candidates: Vec<CandidateItem>,
    preferences: HashMap<String, PreferenceMap>,
}

impl MemoryCatalogue {
    /// Create a catalogue from a collection of candidates.
    pub fn with_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = CandidateItem>,
    {
        Self {
            candidates: candidates.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Register a profile while returning `self` for chaining.
    #[must_use]
    pub fn with_profile(mut self, user_id: impl Into<String>, context: UserContext) -> Self {
        self.profiles.insert(user_id.into(), context);
        self
    }

    /// Append a candidate while returning `self` for chaining.
    #[must_use]
    pub fn with_candidate(mut self, candidate: CandidateItem) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Record a preference for `user_id` while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(
        mut self,
        user_id: impl Into<String>,
        item_id: impl Into<String>,
        preference: Preference,
    ) -> Self {
        self.preferences
            .entry(user_id.into())
            .or_default()
            .insert(item_id, preference);
        self
    }
}

/// Persist `catalogue` into a fresh SQLite database at `path`.
///
/// Prompts receive descending `created_at` stamps so that
/// [`SqliteCatalogue`](crate::SqliteCatalogue) reads them back in insertion
/// order.
///
/// # Errors
/// Returns the underlying `rusqlite` error when the database cannot be
/// created or written, including tag encoding failures.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_catalogue(
    path: &std::path::Path,
    catalogue: &MemoryCatalogue,
) -> Result<(), rusqlite::Error> {
    let mut connection = rusqlite::Connection::open(path)?;
    connection.execute_batch(crate::CATALOGUE_SCHEMA)?;
    let tx = connection.transaction()?;
    for (user_id, context) in &catalogue.profiles {
        tx.execute(
            "INSERT INTO profiles (user_id, industry, project_type, preferred_tone, desired_outcome)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                user_id,
                context.industry(),
                context.project_type(),
                context.preferred_tone(),
                context.desired_outcome(),
            ),
        )?;
    }
    let total = catalogue.candidates.len();
    for (index, item) in catalogue.candidates.iter().enumerate() {
        let tags = serde_json::to_string(&item.tags)
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
        tx.execute(
            "INSERT INTO prompts (id, title, what_for, excerpt, prompt, category, tags, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                &item.id,
                &item.title,
                &item.description,
                &item.excerpt,
                &item.body,
                &item.category,
                tags,
                format!("{:08}", total - index),
            ),
        )?;
    }
    for (user_id, preferences) in &catalogue.preferences {
        for (item_id, preference) in preferences.iter() {
            tx.execute(
                "INSERT INTO prompt_preferences (user_id, prompt_id, preference) VALUES (?1, ?2, ?3)",
                (user_id, item_id, preference.as_str()),
            )?;
        }
    }
    tx.commit()
}

impl ProfileStore for MemoryCatalogue {
    fn user_context(&self, user_id: &str) -> Result<Option<UserContext>, StoreError> {
        Ok(self.profiles.get(user_id).cloned())
    }
}

impl ContentStore for MemoryCatalogue {
    fn candidates(&self) -> Result<Vec<CandidateItem>, StoreError> {
        Ok(self.candidates.clone())
    }
}

impl PreferenceStore for MemoryCatalogue {
    fn preferences(&self, user_id: &str) -> Result<PreferenceMap, StoreError> {
        Ok(self.preferences.get(user_id).cloned().unwrap_or_default())
    }
}
