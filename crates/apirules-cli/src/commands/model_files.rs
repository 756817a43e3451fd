use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Expand the `check` arguments into model files.
///
/// Files are taken as given. Directories are searched recursively for
/// `*.json`, sorted so runs are reproducible. Hidden entries (including the
/// `.apirules/` config directory) and gitignored paths are skipped. A path
/// that does not exist, or a directory that cannot be read, is an error.
pub fn collect(paths: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk_dir(path)?);
        } else {
            return Err(format!("no such file or directory: {}", path.display()));
        }
    }
    Ok(files)
}

fn walk_dir(root: &Path) -> Result<Vec<PathBuf>, String> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .build();

    let mut found = Vec::new();
    for result in walker {
        let entry = result.map_err(|e| format!("failed to walk {}: {}", root.display(), e))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if is_model_file(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

fn is_model_file(path: &Path) -> bool {
    path.extension().and_then(|x| x.to_str()) == Some("json")
}
