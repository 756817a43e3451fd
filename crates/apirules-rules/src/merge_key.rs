//! Merge-key suggestion for list fields.
//!
//! When a list field lacks `+listType=`, look at its element type for a
//! scalar field that plausibly identifies an element. Only `name` qualifies
//! today. The suggestion changes diagnostic text, never the verdict.

use apirules_core::graph::TypeGraph;
use apirules_core::types::{Kind, TypeDecl};

const KEY_CANDIDATE: &str = "name";

/// Propose a `+listKey=` value for a list whose elements are `elem`.
///
/// Returns the lower-cased name of the first builtin-typed member called
/// `name` (any case). Non-struct or memberless elements get no suggestion,
/// and members whose type handle does not resolve are skipped.
pub fn suggest_list_key(graph: &TypeGraph, elem: Option<&TypeDecl>) -> Option<String> {
    let elem = elem?;
    if !elem.is_struct() || elem.members.is_empty() {
        return None;
    }

    elem.members
        .iter()
        .find(|m| {
            m.name.eq_ignore_ascii_case(KEY_CANDIDATE)
                && graph
                    .member_type(m)
                    .is_ok_and(|ty| ty.kind == Kind::Builtin)
        })
        .map(|m| m.name.to_lowercase())
}

/// Diagnostic text for a list field missing its annotation.
pub fn missing_list_type_message(member: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => format!(
            "{}; should be taged as +listType=map and +listKey={}",
            member, key
        ),
        None => member.to_string(),
    }
}
