pub mod languages;
pub mod walk;

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub use languages::LanguageStat;
pub use walk::scan;

/// Directory holding installed third-party packages; never scanned.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Aggregated summary of one walk over a project tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub file_count: usize,
    /// Subdirectories visited. The root itself is not counted.
    pub folder_count: usize,
    /// Distinct extensions seen, `""` for files without one.
    pub file_types: BTreeSet<String>,
    pub language_stats: Vec<LanguageStat>,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Hidden directories and the dependency cache are excluded from every walk.
pub fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || name == DEPENDENCY_CACHE_DIR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_hidden_and_dependency_dirs() {
        assert!(is_skipped_dir(".git"));
        assert!(is_skipped_dir(".cache"));
        assert!(is_skipped_dir("node_modules"));
        assert!(!is_skipped_dir("src"));
        assert!(!is_skipped_dir("target"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = ScanResult {
            file_count: 2,
            folder_count: 1,
            file_types: ["rs".to_string(), String::new()].into_iter().collect(),
            language_stats: vec![LanguageStat {
                language: "Rust".into(),
                percentage: 50.0,
                color: "#dea584".into(),
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fileCount"], 2);
        assert_eq!(json["folderCount"], 1);
        assert_eq!(json["fileTypes"], serde_json::json!(["", "rs"]));
        assert_eq!(json["languageStats"][0]["language"], "Rust");
        assert_eq!(json["languageStats"][0]["percentage"], 50.0);
    }
}
