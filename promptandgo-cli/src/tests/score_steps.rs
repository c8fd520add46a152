//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{
    feed_ids, liked_tips, parse_feed, sample_request, utf8_temp_root, write_request, write_utf8,
};
use super::*;
use camino::Utf8PathBuf;
use promptandgo_core::PreferenceMap;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct ScoreWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let request_path = utf8_temp_root(&tmp).join("request.json");
        Self {
            _tmp: tmp,
            request_path,
            include_request: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["promptandgo".to_owned(), "score".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a score request for a technology writer exists on disk")]
fn score_request_exists(#[from(world)] world: &ScoreWorld) {
    write_request(&world.request_path, &sample_request(PreferenceMap::new()));
}

#[given("a score request where the writer liked the tech tips")]
fn score_request_with_like(#[from(world)] world: &ScoreWorld) {
    write_request(&world.request_path, &sample_request(liked_tips()));
}

#[given("the score request contains invalid JSON")]
fn score_request_invalid_json(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the score request path")]
fn omit_score_request_path(#[from(world)] world: &ScoreWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Score(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_score_with(args, &mut *buffer)
        }
        Command::Recommend(_) => panic!("expected score command"),
    });
    world.result.replace(Some(outcome));
}

fn assert_success_with_leader(world: &ScoreWorld, leader: &str) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
    let stdout = world.stdout.borrow();
    let feed = parse_feed(&stdout);
    assert_eq!(feed_ids(&feed).first().copied(), Some(leader));
}

#[then("the command succeeds and the writing guide leads the feed")]
fn guide_leads(#[from(world)] world: &ScoreWorld) {
    assert_success_with_leader(world, "p-guide");
}

#[then("the command succeeds and the tech tips lead the feed")]
fn tips_lead(#[from(world)] world: &ScoreWorld) {
    assert_success_with_leader(world, "p-tips");
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    match &*world.error() {
        CliError::ParseScoreRequest { .. } => {}
        other => panic!("expected ParseScoreRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn fails_missing_request(#[from(world)] world: &ScoreWorld) {
    match &*world.error() {
        CliError::MissingPositional { field, .. } => assert_eq!(*field, ARG_REQUEST),
        other => panic!("expected MissingPositional, found {other:?}"),
    }
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "ranking prompts from a JSON request");
register_score_scenario!(score_liked_first, "liked prompts lead the feed");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_missing_request, "rejecting missing request paths");
