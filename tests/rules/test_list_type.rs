// Tests for the list_type_missing rule through its public contract.

use apirules_core::graph::TypeGraph;
use apirules_core::types::{Kind, Member, TypeDecl};
use apirules_rules::list_type::ListTypeMissing;
use apirules_rules::rule::ApiRule;

fn run(graph: &TypeGraph, root: &TypeDecl) -> Vec<String> {
    ListTypeMissing.validate(graph, root).unwrap()
}

#[test]
/// A struct without list members never produces violations.
fn test_no_list_members_no_violations() {
    let mut graph = TypeGraph::new();
    let string = graph.add(TypeDecl::builtin("string"));
    let ptr = graph.add(TypeDecl::new(Kind::Pointer));
    let iface = graph.add(TypeDecl::new(Kind::Interface));
    let root = TypeDecl::structure(vec![
        Member::new("Name", string),
        Member::new("Owner", ptr),
        Member::new("Object", iface),
    ]);
    assert!(run(&graph, &root).is_empty());
}

#[test]
/// Every unannotated list is reported once; annotated ones never.
fn test_each_missing_list_reported_once() {
    let mut graph = TypeGraph::new();
    let list = graph.add(TypeDecl::slice(None));
    let names = ["Finalizers", "OwnerReferences", "ManagedFields", "Conditions"];
    let mut members: Vec<Member> = names.iter().map(|n| Member::new(n, list)).collect();
    members[1] = members[1].clone().annotated("+listType=map");

    let found = run(&graph, &TypeDecl::structure(members));
    assert_eq!(found, vec!["Finalizers", "ManagedFields", "Conditions"]);
    for name in ["Finalizers", "ManagedFields", "Conditions"] {
        assert_eq!(found.iter().filter(|v| v.starts_with(name)).count(), 1);
    }
    assert!(!found.iter().any(|v| v.starts_with("OwnerReferences")));
}

#[test]
/// Items is exempt exactly when an embedded struct sibling exists.
fn test_items_exemption_iff_embedded_struct() {
    let mut graph = TypeGraph::new();
    let list = graph.add(TypeDecl::slice(None));
    let meta = graph.add(TypeDecl::structure(vec![]));
    let scalar = graph.add(TypeDecl::builtin("string"));

    let cases = [
        // (sibling, annotated, expect violation)
        (Some(Member::new("ListMeta", meta).embedded()), false, false),
        (Some(Member::new("ListMeta", meta).embedded()), true, true),
        (Some(Member::new("ListMeta", meta)), false, true),
        (Some(Member::new("ListMeta", meta)), true, false),
        (Some(Member::new("string", scalar).embedded()), false, true),
        (None, false, true),
        (None, true, false),
    ];

    for (i, (sibling, annotated, expect)) in cases.into_iter().enumerate() {
        let mut items = Member::new("Items", list);
        if annotated {
            items = items.annotated("+listType=atomic");
        }
        let mut members = vec![items];
        members.extend(sibling);
        let found = run(&graph, &TypeDecl::structure(members));
        assert_eq!(!found.is_empty(), expect, "case {i}: {found:?}");
        if expect {
            assert_eq!(found, vec!["Items"], "case {i}");
        }
    }
}

#[test]
/// The heuristic only changes the message text, never the verdict.
fn test_hint_never_changes_verdict() {
    let mut graph = TypeGraph::new();
    let string = graph.add(TypeDecl::builtin("string"));
    let keyed = graph.add(TypeDecl::structure(vec![Member::new("name", string)]));
    let keyed_list = graph.add(TypeDecl::slice(Some(keyed)));

    let bare = TypeDecl::structure(vec![Member::new("Rules", keyed_list)]);
    assert_eq!(
        run(&graph, &bare),
        vec!["Rules; should be taged as +listType=map and +listKey=name"]
    );

    let annotated =
        TypeDecl::structure(vec![Member::new("Rules", keyed_list).annotated("+listType=atomic")]);
    assert!(run(&graph, &annotated).is_empty());
}

#[test]
/// Validating the same input twice gives identical results.
fn test_validate_is_deterministic() {
    let mut graph = TypeGraph::new();
    let string = graph.add(TypeDecl::builtin("string"));
    let elem = graph.add(TypeDecl::structure(vec![
        Member::new("Image", string),
        Member::new("Name", string),
    ]));
    let list = graph.add(TypeDecl::slice(Some(elem)));
    let root = TypeDecl::structure(vec![
        Member::new("Containers", list),
        Member::new("Sidecars", list),
    ]);
    let first = run(&graph, &root);
    assert_eq!(first.len(), 2);
    assert_eq!(run(&graph, &root), first);
}
