//! Test helpers for writing CLI inputs and reading CLI output.

use camino::{Utf8Path, Utf8PathBuf};
use promptandgo_core::{CandidateItem, Preference, PreferenceMap, ScoredResult, UserContext};
use tempfile::TempDir;

use crate::score::ScoreRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

pub(super) fn utf8_temp_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

pub(super) fn technology_writer() -> UserContext {
    UserContext::new()
        .with_industry("Technology")
        .with_project_type("Content Creation")
}

/// Three prompts: a strong match, a weak match and an unrelated one.
pub(super) fn sample_candidates() -> Vec<CandidateItem> {
    vec![
        CandidateItem::new("p-guide", "Guide")
            .expect("valid prompt")
            .with_tags(["tech", "content"])
            .with_body("A writing guide"),
        CandidateItem::new("p-tips", "Tech tips").expect("valid prompt"),
        CandidateItem::new("p-recipe", "Recipe card")
            .expect("valid prompt")
            .with_body("Plan a dinner party menu"),
    ]
}

pub(super) fn sample_request(preferences: PreferenceMap) -> ScoreRequest {
    ScoreRequest {
        context: technology_writer(),
        candidates: sample_candidates(),
        preferences,
    }
}

pub(super) fn liked_tips() -> PreferenceMap {
    PreferenceMap::new().with_preference("p-tips", Preference::Liked)
}

pub(super) fn write_request(path: &Utf8Path, request: &ScoreRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn parse_feed(stdout: &[u8]) -> Vec<ScoredResult> {
    serde_json::from_slice(stdout).expect("output should be a JSON feed")
}

pub(super) fn feed_ids(feed: &[ScoredResult]) -> Vec<&str> {
    feed.iter().map(ScoredResult::id).collect()
}
