//! `recommend` command: build a visitor's feed from a SQLite catalogue.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::{
    ARG_DATABASE, ARG_LIMIT, ARG_TAXONOMY, ARG_USER_ID, CliError, ENV_RECOMMEND_DATABASE,
    ENV_RECOMMEND_USER_ID, resolve_limit,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a visitor's profile, the prompt library and the \
                 visitor's liked or disliked prompts from a SQLite catalogue, \
                 then print the personalised feed.",
    about = "Recommend prompts for a stored visitor"
)]
#[ortho_config(prefix = "PROMPTANDGO")]
pub(crate) struct RecommendArgs {
    /// Path to the SQLite catalogue database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Identifier of the visitor to recommend for.
    #[arg(long = ARG_USER_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    /// Maximum number of prompts to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// JSON keyword taxonomy replacing the built-in tables.
    #[arg(long = ARG_TAXONOMY, value_name = "path")]
    #[serde(default)]
    pub(crate) taxonomy: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) database: Utf8PathBuf,
    pub(crate) user_id: String,
    pub(crate) limit: usize,
    pub(crate) taxonomy: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.database, ARG_DATABASE)?;
        if let Some(taxonomy) = &self.taxonomy {
            require_existing(taxonomy, ARG_TAXONOMY)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let database = args.database.ok_or(CliError::MissingArgument {
            field: ARG_DATABASE,
            env: ENV_RECOMMEND_DATABASE,
        })?;
        let user_id = args
            .user_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_USER_ID,
                env: ENV_RECOMMEND_USER_ID,
            })?;
        Ok(Self {
            database,
            user_id,
            limit: resolve_limit(args.limit)?,
            taxonomy: args.taxonomy,
        })
    }
}

#[cfg(feature = "store-sqlite")]
pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    use promptandgo_core::SqliteCatalogue;
    use promptandgo_scorer::PersonalisedFeed;

    let config = args.into_config()?;
    config.validate_sources()?;
    let scorer = crate::build_scorer(config.taxonomy.as_deref())?;
    let catalogue = SqliteCatalogue::open(config.database.as_std_path())?;
    log::info!(
        "recommending up to {} prompts for {} from {}",
        config.limit,
        config.user_id,
        config.database
    );
    let feed = PersonalisedFeed::new(&catalogue, &catalogue, &catalogue, scorer)
        .for_user(&config.user_id, config.limit)?;
    crate::write_feed(writer, &feed)
}

#[cfg(not(feature = "store-sqlite"))]
pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    _writer: &mut dyn Write,
) -> Result<(), CliError> {
    let _config = args.into_config()?;
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "recommend",
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
