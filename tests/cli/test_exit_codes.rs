// Tests for CLI exit code behavior.

use std::process::Command;

use super::common;

#[test]
/// Exit code 0 when every list is annotated.
fn test_exit_code_0_clean() {
    let out = Command::new(common::apirules_bin())
        .arg("check")
        .arg(common::fixture("clean.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Exit code 1 when violations remain.
fn test_exit_code_1_violations() {
    let out = Command::new(common::apirules_bin())
        .arg("check")
        .arg(common::fixture("pod_spec.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
/// Exit code 0 when every violation is a known exception.
fn test_exit_code_0_known_exceptions() {
    let (_dir, root) = common::create_project(&[(
        "known.list",
        "API rule violation: list_type_missing,k8s.io/api/core/v1,PodSpec,InitContainers\n\
         API rule violation: list_type_missing,k8s.io/api/core/v1,PodSpec,Volumes\n",
    )]);
    let out = Command::new(common::apirules_bin())
        .arg("check")
        .arg(common::fixture("pod_spec.json"))
        .arg("--exceptions")
        .arg(root.join("known.list"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Exit code 0 when the rule is suppressed on the command line.
fn test_exit_code_0_suppressed_rule() {
    let out = Command::new(common::apirules_bin())
        .arg("check")
        .arg(common::fixture("pod_spec.json"))
        .args(["--suppress", "list_type_missing"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Exit code 2 on a missing model path.
fn test_exit_code_2_missing_model() {
    let out = Command::new(common::apirules_bin())
        .args(["check", "/nonexistent/model.json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("apirules check:"));
}

#[test]
/// Exit code 2 on a model with a dangling type reference.
fn test_exit_code_2_bad_model() {
    let (_dir, root) = common::create_project(&[(
        "model.json",
        r#"{ "types": [ { "id": "A", "kind": "struct", "name": "A",
             "members": [ { "name": "B", "type": "Missing" } ] } ] }"#,
    )]);
    let out = Command::new(common::apirules_bin())
        .args(["check", "model.json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("references unknown type 'Missing'"));
}

#[test]
/// Exit code 2 when an explicit config file is missing.
fn test_exit_code_2_missing_config() {
    let out = Command::new(common::apirules_bin())
        .arg("check")
        .arg(common::fixture("clean.json"))
        .args(["--config", "/nonexistent/apirules.json"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// Exit code 2 for an unsupported completion shell.
fn test_exit_code_2_bad_shell() {
    let out = Command::new(common::apirules_bin())
        .args(["completion", "tcsh"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}
