//! Error types raised while configuring scorers and building feeds.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use promptandgo_core::StoreError;
use thiserror::Error;

/// Errors raised when configuring a [`KeywordRelevanceScorer`](crate::KeywordRelevanceScorer).
#[derive(Debug, Error)]
pub enum ScorerConfigError {
    /// Provided weights were unusable.
    #[error("liked bonus and disliked penalty must both be positive")]
    InvalidWeights,
    /// Reading a taxonomy file failed.
    #[error("failed to read keyword taxonomy at {path}")]
    ReadTaxonomy {
        /// Path to the taxonomy file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding a taxonomy file failed.
    #[error("failed to decode keyword taxonomy at {path}")]
    DecodeTaxonomy {
        /// Path to the taxonomy file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while assembling a personalised feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// One of the backing stores failed.
    #[error("failed to load personalisation inputs")]
    Store(#[from] StoreError),
}
