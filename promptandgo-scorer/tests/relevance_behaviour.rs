#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking a catalogue against a visitor profile.

use std::cell::RefCell;

use promptandgo_core::{CandidateItem, Preference, PreferenceMap, ScoredResult, UserContext};
use promptandgo_scorer::{
    DEFAULT_FEED_LIMIT, KeywordRelevanceScorer, LIKED_REASON, rank_candidates,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const GUIDE_ID: &str = "guide";

/// Aggregate state shared across the steps of one scenario.
pub struct TestContext {
    scorer: KeywordRelevanceScorer,
    profile: RefCell<UserContext>,
    candidates: RefCell<Vec<CandidateItem>>,
    preferences: RefCell<PreferenceMap>,
    feed: RefCell<Option<Vec<ScoredResult>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        scorer: KeywordRelevanceScorer::default(),
        profile: RefCell::new(UserContext::new()),
        candidates: RefCell::new(Vec::new()),
        preferences: RefCell::new(PreferenceMap::new()),
        feed: RefCell::new(None),
    }
}

#[given("a technology writer profile")]
fn technology_writer(context: &TestContext) {
    *context.profile.borrow_mut() = UserContext::new()
        .with_industry("Technology")
        .with_project_type("Content Creation");
}

#[given("a profile with no populated fields")]
fn empty_profile(context: &TestContext) {
    *context.profile.borrow_mut() = UserContext::new().with_desired_outcome("  ");
}

#[given("a writing guide tagged for tech content")]
fn writing_guide(context: &TestContext) {
    let guide = CandidateItem::new(GUIDE_ID, "Guide")
        .expect("valid guide")
        .with_tags(["tech", "content"])
        .with_body("A writing guide");
    context.candidates.borrow_mut().push(guide);
}

#[given("a prompt with no tags or body")]
fn bare_prompt(context: &TestContext) {
    let bare = CandidateItem::new("bare", "Untitled").expect("valid prompt");
    context.candidates.borrow_mut().push(bare);
}

#[given("the visitor liked the guide")]
fn liked_guide(context: &TestContext) {
    context
        .preferences
        .borrow_mut()
        .insert(GUIDE_ID, Preference::Liked);
}

#[when("I rank the catalogue for the visitor")]
fn rank_catalogue(context: &TestContext) {
    let feed = rank_candidates(
        &context.scorer,
        &context.profile.borrow(),
        &context.candidates.borrow(),
        &context.preferences.borrow(),
        DEFAULT_FEED_LIMIT,
    );
    *context.feed.borrow_mut() = Some(feed);
}

#[then("the guide scores 60")]
fn guide_scores_sixty(context: &TestContext) {
    assert_eq!(guide(context).relevance_score, 60);
}

#[then("the guide scores 95")]
fn guide_scores_ninety_five(context: &TestContext) {
    assert_eq!(guide(context).relevance_score, 95);
}

#[then("the guide is explained by its industry and project type")]
fn guide_reasons(context: &TestContext) {
    assert_eq!(
        guide(context).match_reasons,
        ["Technology industry focus", "Perfect for Content Creation"]
    );
}

#[then("the first reason says the visitor liked the guide")]
fn liked_reason_first(context: &TestContext) {
    let result = guide(context);
    assert_eq!(
        result.match_reasons.first().map(String::as_str),
        Some(LIKED_REASON)
    );
    assert!(result.match_reasons.len() <= 3);
}

#[then("the feed is empty")]
fn feed_is_empty(context: &TestContext) {
    let feed = context.feed.borrow();
    let feed = feed.as_ref().expect("feed should be ranked");
    assert!(feed.is_empty(), "unexpected results: {feed:?}");
}

fn guide(context: &TestContext) -> ScoredResult {
    context
        .feed
        .borrow()
        .as_ref()
        .expect("feed should be ranked")
        .iter()
        .find(|result| result.id() == GUIDE_ID)
        .cloned()
        .expect("guide should be in the feed")
}

#[scenario(path = "tests/features/relevance.feature", index = 0)]
fn technology_writer_sees_guide(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/relevance.feature", index = 1)]
fn liked_guide_rises(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/relevance.feature", index = 2)]
fn bare_prompts_are_left_out(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/relevance.feature", index = 3)]
fn empty_profile_skips_personalisation(context: TestContext) {
    let _ = context;
}
