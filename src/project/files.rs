use std::path::{Path, PathBuf};

use crate::scanner::{is_skipped_dir, ScanError};

/// Lockfile that only bloats prompts.
const SKIP_FILES: &[&str] = &["package-lock.json"];

/// Recursively list the files worth showing to the API documentation prompt.
/// Skips hidden entries, `node_modules` and lockfiles. Sorted by path.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        let file_type = entry.file_type().map_err(io_err)?;

        if file_type.is_dir() {
            if !is_skipped_dir(&name) {
                walk(&entry.path(), files)?;
            }
        } else if file_type.is_file() && !name.starts_with('.') && !SKIP_FILES.contains(&name.as_str()) {
            files.push(entry.path());
        }
    }
    Ok(())
}
