use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use tracing::info;

use super::{write_output, GenerateError};
use crate::ai::prompts::documentation_prompt;
use crate::ai::TextGenerator;
use crate::project::{detect_project, manifest_path, ProjectError};

/// Output format for generated project documentation. The model's text is
/// written verbatim whatever the format; only the prompt and file name change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    Pdf,
    Word,
    #[default]
    Markdown,
}

impl DocFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            DocFormat::Pdf => "documentation.pdf",
            DocFormat::Word => "documentation.docx",
            DocFormat::Markdown => "documentation.md",
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocFormat::Pdf => "PDF",
            DocFormat::Word => "Word",
            DocFormat::Markdown => "Markdown",
        };
        f.write_str(name)
    }
}

/// Generate documentation from the project's manifest file.
pub fn generate_documentation(
    root: &Path,
    format: DocFormat,
    ai: &dyn TextGenerator,
) -> Result<PathBuf, GenerateError> {
    let info = detect_project(root)?;
    let main_file = manifest_path(root, &info).ok_or(GenerateError::UnsupportedProject)?;
    let content = std::fs::read_to_string(&main_file).map_err(|source| ProjectError::Io {
        path: main_file.clone(),
        source,
    })?;

    info!("Generating {} documentation from {}", format, main_file.display());
    let text = ai.generate(&documentation_prompt(&format.to_string(), &content))?;

    let path = root.join(format.file_name());
    write_output(&path, &text)?;
    Ok(path)
}
