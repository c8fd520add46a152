//! SQLite-backed catalogue mirroring the hosted prompt library tables.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Mutex,
};

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use thiserror::Error;

use crate::{
    CandidateItem, ContentStore, Preference, PreferenceMap, PreferenceStore, ProfileStore,
    StoreError, UserContext,
};

/// Schema understood by [`SqliteCatalogue`].
///
/// `prompts.tags` stores a JSON array of strings.
pub const CATALOGUE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS profiles (
    user_id TEXT PRIMARY KEY,
    industry TEXT,
    project_type TEXT,
    preferred_tone TEXT,
    desired_outcome TEXT
);
CREATE TABLE IF NOT EXISTS prompts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    what_for TEXT,
    excerpt TEXT,
    prompt TEXT NOT NULL DEFAULT '',
    category TEXT,
    tags TEXT NOT NULL DEFAULT '[]',
    created_at TEXT
);
CREATE TABLE IF NOT EXISTS prompt_preferences (
    user_id TEXT NOT NULL,
    prompt_id TEXT NOT NULL,
    preference TEXT NOT NULL
);
";

const PROFILE_SQL: &str = "SELECT industry, project_type, preferred_tone, desired_outcome \
     FROM profiles WHERE user_id = ?1 LIMIT 1";
const PROMPTS_SQL: &str = "SELECT id, title, what_for, excerpt, prompt, category, tags \
     FROM prompts ORDER BY created_at DESC, id";
const PREFERENCES_SQL: &str =
    "SELECT prompt_id, preference FROM prompt_preferences WHERE user_id = ?1 ORDER BY rowid";

/// Errors raised while reading the SQLite catalogue.
#[derive(Debug, Error)]
pub enum SqliteCatalogueError {
    /// Opening the SQLite database failed.
    #[error("failed to open read-only SQLite database at {path}")]
    OpenDatabase {
        /// Requested database path.
        path: PathBuf,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a query failed.
    #[error("failed to query {operation}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A previous panic poisoned the connection lock.
    #[error("SQLite connection lock was poisoned")]
    Poisoned,
}

impl From<SqliteCatalogueError> for StoreError {
    fn from(err: SqliteCatalogueError) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Read-only catalogue backed by a SQLite database following
/// [`CATALOGUE_SCHEMA`].
pub struct SqliteCatalogue {
    connection: Mutex<Connection>,
    path: PathBuf,
}

impl fmt::Debug for SqliteCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalogue")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteCatalogue {
    /// Open an existing catalogue database read-only.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogueError::OpenDatabase`] when the file cannot be
    /// opened.
    pub fn open<P: AsRef<Path>>(database_path: P) -> Result<Self, SqliteCatalogueError> {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteCatalogueError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            connection: Mutex::new(connection),
            path: path.to_path_buf(),
        })
    }

    fn with_connection<T>(
        &self,
        read: impl FnOnce(&Connection) -> Result<T, SqliteCatalogueError>,
    ) -> Result<T, SqliteCatalogueError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| SqliteCatalogueError::Poisoned)?;
        read(&connection)
    }
}

impl ProfileStore for SqliteCatalogue {
    fn user_context(&self, user_id: &str) -> Result<Option<UserContext>, StoreError> {
        let row = self.with_connection(|connection| {
            connection
                .query_row(PROFILE_SQL, [user_id], |row| {
                    Ok((
                        row.get::<_, Option<String>>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                })
                .optional()
                .map_err(|source| SqliteCatalogueError::Query {
                    operation: "profile lookup",
                    source,
                })
        })?;

        Ok(row.map(|(industry, project_type, tone, outcome)| {
            let mut context = UserContext::new();
            if let Some(value) = industry {
                context = context.with_industry(value);
            }
            if let Some(value) = project_type {
                context = context.with_project_type(value);
            }
            if let Some(value) = tone {
                context = context.with_preferred_tone(value);
            }
            if let Some(value) = outcome {
                context = context.with_desired_outcome(value);
            }
            context
        }))
    }
}

impl ContentStore for SqliteCatalogue {
    fn candidates(&self) -> Result<Vec<CandidateItem>, StoreError> {
        let items = self.with_connection(read_prompts)?;
        log::debug!(
            "loaded {} prompts from {}",
            items.len(),
            self.path.display()
        );
        Ok(items)
    }
}

impl PreferenceStore for SqliteCatalogue {
    fn preferences(&self, user_id: &str) -> Result<PreferenceMap, StoreError> {
        let rows = self.with_connection(|connection| read_preference_rows(connection, user_id))?;
        let mut preferences = PreferenceMap::new();
        for (item_id, raw) in rows {
            let preference = Preference::from_str(&raw)
                .map_err(|_| StoreError::InvalidPreference {
                    item_id: item_id.clone(),
                    value: raw.clone(),
                })?;
            preferences.insert(item_id, preference);
        }
        Ok(preferences)
    }
}

fn read_prompts(connection: &Connection) -> Result<Vec<CandidateItem>, SqliteCatalogueError> {
    let mut statement =
        connection
            .prepare_cached(PROMPTS_SQL)
            .map_err(|source| SqliteCatalogueError::Query {
                operation: "prepare prompt selection",
                source,
            })?;
    let mut rows = statement
        .query([])
        .map_err(|source| SqliteCatalogueError::Query {
            operation: "query prompts",
            source,
        })?;

    let mut items = Vec::new();
    while let Some(row) = rows.next().map_err(|source| SqliteCatalogueError::Query {
        operation: "read prompt row",
        source,
    })? {
        let read = |source: rusqlite::Error| SqliteCatalogueError::Query {
            operation: "decode prompt row",
            source,
        };
        let id: String = row.get(0).map_err(read)?;
        let tags_json: String = row.get(6).map_err(read)?;
        let tags: Vec<String> = match serde_json::from_str(&tags_json) {
            Ok(tags) => tags,
            Err(err) => {
                log::warn!("skipping prompt {id}: tags are not a JSON string array: {err}");
                continue;
            }
        };
        items.push(CandidateItem {
            title: row.get(1).map_err(read)?,
            description: row.get(2).map_err(read)?,
            excerpt: row.get(3).map_err(read)?,
            body: row.get(4).map_err(read)?,
            category: row.get(5).map_err(read)?,
            tags,
            id,
        });
    }
    Ok(items)
}

fn read_preference_rows(
    connection: &Connection,
    user_id: &str,
) -> Result<Vec<(String, String)>, SqliteCatalogueError> {
    let mut statement =
        connection
            .prepare_cached(PREFERENCES_SQL)
            .map_err(|source| SqliteCatalogueError::Query {
                operation: "prepare preference selection",
                source,
            })?;
    let rows = statement
        .query_map([user_id], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|source| SqliteCatalogueError::Query {
            operation: "query preferences",
            source,
        })?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|source| SqliteCatalogueError::Query {
            operation: "read preference row",
            source,
        })
}
