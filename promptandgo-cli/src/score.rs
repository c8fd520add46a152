//! `score` command: rank the candidates supplied in a JSON request.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use promptandgo_core::{CandidateItem, PreferenceMap, ScoredResult, UserContext};
use promptandgo_scorer::rank_candidates;
use serde::{Deserialize, Serialize};

use crate::fs::{open_utf8_file, require_existing};
use crate::{
    ARG_LIMIT, ARG_REQUEST, ARG_TAXONOMY, CliError, ENV_SCORE_REQUEST, build_scorer,
    resolve_limit, write_feed,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the prompts listed in a JSON request for the visitor \
                 context it carries. The request holds `context`, \
                 `candidates` and an optional `preferences` map of prompt id \
                 to \"liked\" or \"disliked\".",
    about = "Rank prompts from a JSON request"
)]
#[ortho_config(prefix = "PROMPTANDGO")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a score request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Maximum number of prompts to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// JSON keyword taxonomy replacing the built-in tables.
    #[arg(long = ARG_TAXONOMY, value_name = "path")]
    #[serde(default)]
    pub(crate) taxonomy: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) limit: usize,
    pub(crate) taxonomy: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        if let Some(taxonomy) = &self.taxonomy {
            require_existing(taxonomy, ARG_TAXONOMY)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingPositional {
            field: ARG_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            limit: resolve_limit(args.limit)?,
            taxonomy: args.taxonomy,
        })
    }
}

/// Inputs for one scoring pass, as read from disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct ScoreRequest {
    pub(crate) context: UserContext,
    pub(crate) candidates: Vec<CandidateItem>,
    pub(crate) preferences: PreferenceMap,
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let feed = execute_score(args)?;
    write_feed(writer, &feed)
}

fn execute_score(args: ScoreArgs) -> Result<Vec<ScoredResult>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let scorer = build_scorer(config.taxonomy.as_deref())?;
    let request = load_score_request(&config.request_path)?;
    info!(
        "scoring {} candidates from {}",
        request.candidates.len(),
        config.request_path
    );
    Ok(rank_candidates(
        &scorer,
        &request.context,
        &request.candidates,
        &request.preferences,
        config.limit,
    ))
}

/// Loads a JSON-encoded [`ScoreRequest`] from disk.
pub(crate) fn load_score_request(path: &Utf8Path) -> Result<ScoreRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScoreRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScoreRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
