//! Keyword lookup tables for profile labels.
//!
//! Each profile dropdown value (industry, project type, preferred tone)
//! resolves to a fixed set of lower-case keywords. Labels are matched
//! case-insensitively; unknown labels resolve to no keywords.

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::ScorerConfigError;

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["tech", "software", "development", "coding", "digital", "startup", "saas"],
    ),
    (
        "Marketing",
        &["marketing", "advertising", "campaign", "brand", "seo", "promotion", "social media"],
    ),
    (
        "Healthcare",
        &["health", "medical", "patient", "wellness", "clinical", "healthcare"],
    ),
    (
        "Finance",
        &["finance", "financial", "investment", "banking", "budget", "accounting", "money"],
    ),
    (
        "Education",
        &["education", "learning", "teaching", "student", "course", "training", "curriculum"],
    ),
    (
        "E-commerce",
        &["ecommerce", "e-commerce", "online store", "product", "shopping", "retail", "sales"],
    ),
    (
        "Real Estate",
        &["real estate", "property", "housing", "listing", "realtor"],
    ),
    (
        "Consulting",
        &["consulting", "strategy", "advisory", "client", "business"],
    ),
    (
        "Non-profit",
        &["nonprofit", "non-profit", "charity", "fundraising", "volunteer", "community"],
    ),
];

const PROJECT_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Content Creation",
        &["content", "writing", "blog", "article", "copy", "creative"],
    ),
    (
        "Marketing Campaign",
        &["campaign", "marketing", "ads", "promotion", "launch"],
    ),
    (
        "Business Strategy",
        &["strategy", "planning", "business", "growth", "analysis"],
    ),
    (
        "Product Development",
        &["product", "development", "feature", "roadmap", "design"],
    ),
    (
        "Customer Support",
        &["support", "customer", "service", "help", "faq"],
    ),
    (
        "Research & Analysis",
        &["research", "analysis", "data", "insights", "report"],
    ),
    (
        "Social Media",
        &["social", "instagram", "linkedin", "twitter", "post"],
    ),
];

const TONE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Professional",
        &["professional", "business", "formal", "corporate"],
    ),
    ("Casual", &["casual", "friendly", "conversational", "relaxed"]),
    ("Creative", &["creative", "imaginative", "playful", "innovative"]),
    ("Persuasive", &["persuasive", "compelling", "convincing", "sales"]),
    ("Educational", &["educational", "informative", "explain", "teach"]),
];

/// Profile field a keyword table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// The visitor's industry.
    Industry,
    /// The kind of project the visitor is working on.
    ProjectType,
    /// The visitor's preferred writing tone.
    Tone,
}

/// Lookup from profile labels to the keywords they imply.
///
/// # Examples
/// ```
/// use promptandgo_scorer::{KeywordCategory, KeywordTaxonomy};
///
/// let taxonomy = KeywordTaxonomy::default()
///     .with_industry("Hospitality", ["hotel", "travel", "booking", "guest", "tourism"]);
/// let keywords = taxonomy.keywords(KeywordCategory::Industry, "hospitality");
/// assert_eq!(keywords.first().map(String::as_str), Some("hotel"));
/// assert!(taxonomy.keywords(KeywordCategory::Tone, "Gothic").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaxonomyTables")]
pub struct KeywordTaxonomy {
    industries: BTreeMap<String, Vec<String>>,
    project_types: BTreeMap<String, Vec<String>>,
    tones: BTreeMap<String, Vec<String>>,
}

/// Serialised shape of a taxonomy before labels and keywords are normalised.
#[derive(Deserialize)]
struct TaxonomyTables {
    #[serde(default)]
    industries: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    project_types: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    tones: BTreeMap<String, Vec<String>>,
}

impl From<TaxonomyTables> for KeywordTaxonomy {
    fn from(tables: TaxonomyTables) -> Self {
        let mut taxonomy = Self::empty();
        for (label, keywords) in tables.industries {
            taxonomy.insert(KeywordCategory::Industry, &label, keywords);
        }
        for (label, keywords) in tables.project_types {
            taxonomy.insert(KeywordCategory::ProjectType, &label, keywords);
        }
        for (label, keywords) in tables.tones {
            taxonomy.insert(KeywordCategory::Tone, &label, keywords);
        }
        taxonomy
    }
}

impl KeywordTaxonomy {
    /// Create a taxonomy with no labels.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            industries: BTreeMap::new(),
            project_types: BTreeMap::new(),
            tones: BTreeMap::new(),
        }
    }

    /// Load a taxonomy from a JSON file.
    ///
    /// The file holds up to three objects, `industries`, `project_types` and
    /// `tones`, each mapping a label to its keyword list.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::ReadTaxonomy`] when the file is
    /// unreadable and [`ScorerConfigError::DecodeTaxonomy`] when it is not a
    /// valid taxonomy document.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ScorerConfigError> {
        let contents = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            ScorerConfigError::ReadTaxonomy {
                path: path.to_path_buf(),
                source,
            }
        })?;
        serde_json::from_str(&contents).map_err(|source| ScorerConfigError::DecodeTaxonomy {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace the keywords for a label.
    ///
    /// Labels and keywords are lower-cased and trimmed; blank keywords are
    /// discarded.
    pub fn insert<I, T>(&mut self, category: KeywordCategory, label: &str, keywords: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let normalised = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        self.table_mut(category)
            .insert(normalise_label(label), normalised);
    }

    /// Add an industry label while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_industry<I, T>(mut self, label: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.insert(KeywordCategory::Industry, label, keywords);
        self
    }

    /// Add a project type label while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_project_type<I, T>(mut self, label: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.insert(KeywordCategory::ProjectType, label, keywords);
        self
    }

    /// Add a tone label while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_tone<I, T>(mut self, label: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.insert(KeywordCategory::Tone, label, keywords);
        self
    }

    /// Keywords for `label`, or an empty slice for unknown labels.
    #[must_use]
    pub fn keywords(&self, category: KeywordCategory, label: &str) -> &[String] {
        self.table(category)
            .get(&normalise_label(label))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of labels known for a category.
    #[must_use]
    pub fn label_count(&self, category: KeywordCategory) -> usize {
        self.table(category).len()
    }

    const fn table(&self, category: KeywordCategory) -> &BTreeMap<String, Vec<String>> {
        match category {
            KeywordCategory::Industry => &self.industries,
            KeywordCategory::ProjectType => &self.project_types,
            KeywordCategory::Tone => &self.tones,
        }
    }

    const fn table_mut(&mut self, category: KeywordCategory) -> &mut BTreeMap<String, Vec<String>> {
        match category {
            KeywordCategory::Industry => &mut self.industries,
            KeywordCategory::ProjectType => &mut self.project_types,
            KeywordCategory::Tone => &mut self.tones,
        }
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        let mut taxonomy = Self::empty();
        for (category, rows) in [
            (KeywordCategory::Industry, INDUSTRY_KEYWORDS),
            (KeywordCategory::ProjectType, PROJECT_TYPE_KEYWORDS),
            (KeywordCategory::Tone, TONE_KEYWORDS),
        ] {
            for (label, keywords) in rows {
                taxonomy.insert(category, label, keywords.iter());
            }
        }
        taxonomy
    }
}

fn normalise_label(label: &str) -> String {
    label.trim().to_lowercase()
}
