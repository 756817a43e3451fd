//! Output formatters for apirules command results.
//!
//! Provides two output modes:
//! - **Human** (default): `API rule violation:` lines plus a summary
//! - **JSON** (`--json`): Machine-readable structured output
//!
//! [`report`] renders the plain violation report written by `check --report`.

pub mod human;
pub(crate) mod human_helpers;
pub mod json;
pub mod report;

use apirules_rules::types::{CheckResult, RulesResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_rules(&self, result: &RulesResult) -> String;
}
