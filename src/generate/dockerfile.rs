use std::path::{Path, PathBuf};

use tracing::info;

use super::{write_output, GenerateError};
use crate::ai::prompts::{dockerfile_prompt, strip_dockerfile_fences};
use crate::ai::TextGenerator;
use crate::project::ProjectInfo;

pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Ask the model for a Dockerfile matching `info` and write it to
/// `<root>/Dockerfile`, overwriting any existing one.
pub fn generate_dockerfile(
    root: &Path,
    info: &ProjectInfo,
    ai: &dyn TextGenerator,
) -> Result<PathBuf, GenerateError> {
    info!("Generating Dockerfile for {} project with {} dependencies", info.kind, info.technologies.len());

    let response = ai.generate(&dockerfile_prompt(info))?;
    let content = strip_dockerfile_fences(&response);

    let path = root.join(DOCKERFILE_NAME);
    write_output(&path, content)?;
    Ok(path)
}
