pub mod api_docs;
pub mod dockerfile;
pub mod docs;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ai::AiError;
use crate::project::ProjectError;
use crate::scanner::ScanError;

pub use api_docs::{generate_api_documentation, generate_playground};
pub use dockerfile::generate_dockerfile;
pub use docs::{generate_documentation, DocFormat};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("unsupported project type for documentation generation")]
    UnsupportedProject,

    #[error("response did not contain an HTML document")]
    NoHtml,

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn write_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    std::fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
