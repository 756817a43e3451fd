
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Path of a checked-in model fixture under `tests/fixtures/`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Read a fixture as a string.
#[allow(dead_code)]
pub fn fixture_str(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

/// Set up a temporary project with the given files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    let project_root = root.to_path_buf();
    (dir, project_root)
}

/// Get path to compiled apirules binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn apirules_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("apirules");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "apirules-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build apirules");
    assert!(status.success(), "Failed to build apirules binary");
    let fallback = workspace.join("target/debug/apirules");
    if fallback.exists() {
        fallback
    } else {
        path
    }
}
