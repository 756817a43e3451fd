//! Rule engine for apirules.
//!
//! Validates declared types against API conventions and produces violations:
//! - `list_type_missing`: list fields must declare `+listType=`, except the
//!   `Items` payload of a top-level list type, which must not
//!
//! Rules implement [`rule::ApiRule`] and are driven over a whole
//! [`TypeGraph`](apirules_core::graph::TypeGraph) by [`runner::RuleSet`].

pub mod types;
pub mod rule;
pub mod merge_key;
pub mod list_type;
pub mod suppress;
pub mod runner;
