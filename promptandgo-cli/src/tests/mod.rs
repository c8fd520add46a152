//! Shared test harness modules for the PromptAndGo CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
#[cfg(feature = "store-sqlite")]
mod recommend_unit;
mod score_steps;
