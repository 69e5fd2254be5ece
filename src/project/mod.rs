pub mod detect;
pub mod files;

use std::path::PathBuf;

use thiserror::Error;

pub use detect::{detect_project, manifest_path, ProjectInfo};
pub use files::collect_source_files;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },
}
