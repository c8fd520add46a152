//! Command-line interface for the PromptAndGo personalisation engine.
//!
//! `score` ranks the prompts described in a JSON request; `recommend` reads
//! a visitor's inputs from a SQLite catalogue. Both print the ranked feed as
//! pretty JSON on stdout. Options layer through `ortho_config`: CLI flags
//! override `PROMPTANDGO_*` environment variables, which override
//! configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use promptandgo_core::ScoredResult;
use promptandgo_scorer::{DEFAULT_FEED_LIMIT, KeywordRelevanceScorer, KeywordTaxonomy};

mod error;
mod fs;
mod recommend;
mod score;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend_with};
use score::{ScoreArgs, run_score_with};

const ARG_REQUEST: &str = "request";
const ARG_LIMIT: &str = "limit";
const ARG_TAXONOMY: &str = "taxonomy";
const ARG_DATABASE: &str = "database";
const ARG_USER_ID: &str = "user-id";
const ENV_SCORE_REQUEST: &str = "PROMPTANDGO_CMDS_SCORE_REQUEST_PATH";
const ENV_RECOMMEND_DATABASE: &str = "PROMPTANDGO_CMDS_RECOMMEND_DATABASE";
const ENV_RECOMMEND_USER_ID: &str = "PROMPTANDGO_CMDS_RECOMMEND_USER_ID";

/// Run the PromptAndGo CLI with the current process arguments and
/// environment, writing results to stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs cannot be read,
/// or the feed cannot be built or written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "promptandgo",
    about = "Personalised prompt ranking for the PromptAndGo library",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank prompts supplied in a JSON request.
    Score(ScoreArgs),
    /// Rank the prompt library for a visitor stored in SQLite.
    Recommend(RecommendArgs),
}

fn resolve_limit(limit: Option<usize>) -> Result<usize, CliError> {
    match limit {
        Some(0) => Err(CliError::ZeroLimit { field: ARG_LIMIT }),
        Some(count) => Ok(count),
        None => Ok(DEFAULT_FEED_LIMIT),
    }
}

fn build_scorer(taxonomy: Option<&Utf8Path>) -> Result<KeywordRelevanceScorer, CliError> {
    let Some(path) = taxonomy else {
        return Ok(KeywordRelevanceScorer::default());
    };
    let loaded = KeywordTaxonomy::from_json_file(path)?;
    log::debug!("loaded keyword taxonomy from {path}");
    Ok(KeywordRelevanceScorer::with_taxonomy(loaded))
}

fn write_feed(writer: &mut dyn Write, feed: &[ScoredResult]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(feed).map_err(CliError::SerialiseFeed)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteFeed)?;
    writer.write_all(b"\n").map_err(CliError::WriteFeed)?;
    Ok(())
}

#[cfg(test)]
mod tests;
