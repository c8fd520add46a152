//! Focused unit tests covering recommend CLI configuration and execution.

use super::helpers::{
    feed_ids, parse_feed, sample_candidates, technology_writer, utf8_temp_root, write_utf8,
};
use super::*;
use crate::recommend::RecommendConfig;
use camino::Utf8PathBuf;
use promptandgo_core::{MemoryCatalogue, Preference, write_sqlite_catalogue};
use rstest::rstest;
use tempfile::TempDir;

fn args_with(database: Option<Utf8PathBuf>, user_id: Option<&str>) -> RecommendArgs {
    RecommendArgs {
        database,
        user_id: user_id.map(str::to_owned),
        limit: None,
        taxonomy: None,
    }
}

fn seeded_database(root: &camino::Utf8Path) -> Utf8PathBuf {
    let catalogue = MemoryCatalogue::with_candidates(sample_candidates())
        .with_profile("writer", technology_writer())
        .with_preference("writer", "p-tips", Preference::Liked)
        .with_preference("writer", "p-guide", Preference::Disliked);
    let path = root.join("catalogue.db");
    write_sqlite_catalogue(path.as_std_path(), &catalogue).expect("persist catalogue");
    path
}

#[rstest]
#[case::missing_database(None, Some("writer"), ARG_DATABASE, ENV_RECOMMEND_DATABASE)]
#[case::missing_user(Some("catalogue.db"), None, ARG_USER_ID, ENV_RECOMMEND_USER_ID)]
#[case::blank_user(Some("catalogue.db"), Some("  "), ARG_USER_ID, ENV_RECOMMEND_USER_ID)]
fn converting_without_required_fields_errors(
    #[case] database: Option<&str>,
    #[case] user_id: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = args_with(database.map(Utf8PathBuf::from), user_id);
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_database() {
    let tmp = TempDir::new().expect("tempdir");
    let config = RecommendConfig {
        database: utf8_temp_root(&tmp).join("absent.db"),
        user_id: "writer".to_owned(),
        limit: DEFAULT_FEED_LIMIT,
        taxonomy: None,
    };
    let err = config.validate_sources().expect_err("database is missing");
    assert!(matches!(err, CliError::MissingSourceFile { field, .. } if field == ARG_DATABASE));
}

#[rstest]
fn recommend_prints_feed_for_stored_visitor() {
    let tmp = TempDir::new().expect("tempdir");
    let database = seeded_database(&utf8_temp_root(&tmp));

    let mut stdout = Vec::new();
    run_recommend_with(args_with(Some(database), Some("writer")), &mut stdout)
        .expect("recommend should succeed");

    let feed = parse_feed(&stdout);
    assert_eq!(feed_ids(&feed), ["p-tips", "p-guide"]);
    let scores: Vec<_> = feed.iter().map(|result| result.relevance_score).collect();
    assert_eq!(scores, [80, 30]);
}

#[rstest]
fn unknown_visitor_gets_empty_feed() {
    let tmp = TempDir::new().expect("tempdir");
    let database = seeded_database(&utf8_temp_root(&tmp));

    let mut stdout = Vec::new();
    run_recommend_with(args_with(Some(database), Some("stranger")), &mut stdout)
        .expect("recommend should succeed");

    assert!(parse_feed(&stdout).is_empty());
}

#[rstest]
fn corrupt_database_is_reported() {
    let tmp = TempDir::new().expect("tempdir");
    let database = utf8_temp_root(&tmp).join("catalogue.db");
    write_utf8(&database, b"definitely not sqlite");

    let mut stdout = Vec::new();
    let err = run_recommend_with(args_with(Some(database), Some("writer")), &mut stdout)
        .expect_err("garbage file is not a catalogue");
    assert!(
        matches!(err, CliError::Feed(_) | CliError::OpenCatalogue(_)),
        "unexpected error {err:?}"
    );
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_reads_user_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "database": "from-file.db" }), None);
    composer.push_environment(json!({ "user_id": "from-env" }));

    let config = crate::recommend::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(config.database, "from-file.db");
    assert_eq!(config.user_id, "from-env");
    assert_eq!(config.limit, DEFAULT_FEED_LIMIT);
}
