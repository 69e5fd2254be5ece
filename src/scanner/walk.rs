use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info};

use super::languages::{build_language_stats, extension_of, language_for_extension, Language};
use super::{is_skipped_dir, ScanError, ScanResult};

#[derive(Default)]
struct Tally {
    file_count: usize,
    folder_count: usize,
    file_types: BTreeSet<String>,
    languages: HashMap<Language, usize>,
}

/// Walk `root` and summarize its files, folders, extensions and languages.
///
/// Any directory that cannot be read aborts the whole scan.
pub fn scan(root: &Path) -> Result<ScanResult, ScanError> {
    info!("Scanning {}", root.display());

    let mut tally = Tally::default();
    walk_dir(root, &mut tally)?;

    let language_stats = build_language_stats(&tally.languages, tally.file_count);
    info!(
        files = tally.file_count,
        folders = tally.folder_count,
        "Scan finished"
    );

    Ok(ScanResult {
        file_count: tally.file_count,
        folder_count: tally.folder_count,
        file_types: tally.file_types,
        language_stats,
    })
}

fn walk_dir(dir: &Path, tally: &mut Tally) -> Result<(), ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        // file_type() does not follow symlinks; a linked directory counts as a file.
        let file_type = entry.file_type().map_err(io_err)?;

        if file_type.is_dir() {
            if is_skipped_dir(&name) {
                debug!("Skipping {}", entry.path().display());
                continue;
            }
            tally.folder_count += 1;
            walk_dir(&entry.path(), tally)?;
        } else {
            tally.file_count += 1;
            let ext = extension_of(&name);
            if !tally.file_types.contains(ext) {
                tally.file_types.insert(ext.to_string());
            }
            if let Some(lang) = language_for_extension(ext) {
                *tally.languages.entry(lang).or_insert(0) += 1;
            }
        }
    }

    Ok(())
}
