use apirules_core::graph::TypeGraph;
use apirules_core::types::{Kind, Member, TypeDecl};

use crate::merge_key::{missing_list_type_message, suggest_list_key};
use crate::rule::{ApiRule, RuleError};

/// Annotation marker that declares list merge semantics. Detection is a
/// plain substring match on each annotation line.
pub const LIST_TYPE_MARKER: &str = "+listType=";

/// Payload field of a top-level list type (`FooList { ListMeta; Items []Foo }`).
const ITEMS_FIELD: &str = "Items";

/// Check `list_type_missing`: every list field must carry `+listType=`.
///
/// The `Items` field of a top-level list type is the exception: it is a plain
/// positional payload, so annotating it is the violation. A type counts as a
/// top-level list when it embeds a struct (normally `ListMeta`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ListTypeMissing;

impl ApiRule for ListTypeMissing {
    fn name(&self) -> &'static str {
        "list_type_missing"
    }

    fn description(&self) -> &'static str {
        "list fields must declare +listType (top-level Items must not)"
    }

    fn validate(&self, graph: &TypeGraph, root: &TypeDecl) -> Result<Vec<String>, RuleError> {
        let mut violations = Vec::new();
        if !root.is_struct() || root.members.is_empty() {
            return Ok(violations);
        }

        let top_level_list = embeds_struct(graph, root)?;

        for member in &root.members {
            let ty = resolve(graph, member)?;
            if ty.kind != Kind::Slice {
                continue;
            }

            let annotated = member.has_annotation(LIST_TYPE_MARKER);

            if member.name == ITEMS_FIELD && top_level_list {
                if annotated {
                    violations.push(member.name.clone());
                }
                continue;
            }

            if annotated {
                continue;
            }

            let elem = graph.elem(ty).map_err(|source| RuleError::Graph {
                member: member.name.clone(),
                source,
            })?;
            let key = suggest_list_key(graph, elem);
            violations.push(missing_list_type_message(&member.name, key.as_deref()));
        }

        Ok(violations)
    }
}

/// True if any member of `root` is an embedded struct.
fn embeds_struct(graph: &TypeGraph, root: &TypeDecl) -> Result<bool, RuleError> {
    for member in root.members.iter().filter(|m| m.embedded) {
        if resolve(graph, member)?.is_struct() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn resolve<'g>(graph: &'g TypeGraph, member: &Member) -> Result<&'g TypeDecl, RuleError> {
    graph.member_type(member).map_err(|source| RuleError::Graph {
        member: member.name.clone(),
        source,
    })
}

#[cfg(test)]
#[path = "list_type_tests.rs"]
mod tests;
