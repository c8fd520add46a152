//! Per-prompt feedback recorded by a visitor.
//!
//! # Examples
//! ```
//! use promptandgo_core::{Preference, PreferenceMap};
//!
//! let preferences = PreferenceMap::new().with_preference("p-1", Preference::Liked);
//! assert_eq!(preferences.get("p-1"), Some(Preference::Liked));
//! assert_eq!(Preference::Disliked.to_string(), "disliked");
//! ```

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the visitor liked or disliked a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preference {
    /// The visitor marked the prompt as liked.
    Liked,
    /// The visitor marked the prompt as disliked.
    Disliked,
}

impl Preference {
    /// Return the preference as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Disliked => "disliked",
        }
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Preference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liked" | "like" => Ok(Self::Liked),
            "disliked" | "dislike" => Ok(Self::Disliked),
            _ => Err(format!("unknown preference '{s}'")),
        }
    }
}

/// Preferences for one visitor keyed by candidate id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PreferenceMap {
    entries: HashMap<String, Preference>,
}

impl PreferenceMap {
    /// Construct an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the preference recorded for `item_id`, if any.
    #[must_use]
    pub fn get(&self, item_id: &str) -> Option<Preference> {
        self.entries.get(item_id).copied()
    }

    /// Record a preference, replacing any earlier one for the same id.
    pub fn insert(&mut self, item_id: impl Into<String>, preference: Preference) {
        self.entries.insert(item_id.into(), preference);
    }

    /// Record a preference while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(mut self, item_id: impl Into<String>, preference: Preference) -> Self {
        self.insert(item_id, preference);
        self
    }

    /// Number of recorded preferences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no preference is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded preferences in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Preference)> {
        self.entries
            .iter()
            .map(|(id, preference)| (id.as_str(), *preference))
    }
}

impl<K: Into<String>> FromIterator<(K, Preference)> for PreferenceMap {
    fn from_iter<I: IntoIterator<Item = (K, Preference)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, preference)| (id.into(), preference))
                .collect(),
        }
    }
}
