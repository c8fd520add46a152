//! Error types emitted by the PromptAndGo CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use promptandgo_scorer::{FeedError, ScorerConfigError};
use thiserror::Error;

/// Errors emitted by the PromptAndGo CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingPositional {
        /// Positional argument name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The feed limit was zero.
    #[error("--{field} must be at least 1")]
    ZeroLimit {
        /// Flag name without the leading dashes.
        field: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that must be enabled.
        feature: &'static str,
        /// Operation that was attempted.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the score request file failed.
    #[error("failed to open score request at {path:?}: {source}")]
    OpenScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Score request JSON could not be decoded.
    #[error("failed to parse score request JSON at {path:?}: {source}")]
    ParseScoreRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Building the scorer failed, usually because the taxonomy file is bad.
    #[error(transparent)]
    BuildScorer(#[from] ScorerConfigError),
    /// Opening the SQLite catalogue failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenCatalogue(#[from] promptandgo_core::SqliteCatalogueError),
    /// Assembling the personalised feed failed.
    #[error("failed to build feed: {0}")]
    Feed(#[from] FeedError),
    /// Serialising the ranked feed failed.
    #[error("failed to serialise feed: {0}")]
    SerialiseFeed(#[source] serde_json::Error),
    /// Writing the ranked feed failed.
    #[error("failed to write feed: {0}")]
    WriteFeed(#[source] std::io::Error),
}
