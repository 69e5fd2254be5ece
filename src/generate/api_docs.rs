use std::path::{Path, PathBuf};

use tracing::info;

use super::{write_output, GenerateError};
use crate::ai::prompts::{api_documentation_prompt, extract_html, playground_prompt};
use crate::ai::TextGenerator;
use crate::project::collect_source_files;

pub const API_DOC_NAME: &str = "API_Documentation.md";
pub const PLAYGROUND_NAME: &str = "API_Playground.html";

/// Feed every source file to the model and write `API_Documentation.md`.
/// Returns the written path together with the documentation text.
pub fn generate_api_documentation(
    root: &Path,
    ai: &dyn TextGenerator,
) -> Result<(PathBuf, String), GenerateError> {
    let files = collect_source_files(root)?;
    info!("Building API documentation prompt from {} files", files.len());

    let text = ai.generate(&api_documentation_prompt(root, &files))?;
    let path = root.join(API_DOC_NAME);
    write_output(&path, &text)?;
    Ok((path, text))
}

/// Ask for an interactive request-testing page built from `documentation`
/// and write it to `API_Playground.html`. The file is only written when the
/// response actually contains an `<html>` document.
pub fn generate_playground(
    root: &Path,
    documentation: &str,
    ai: &dyn TextGenerator,
) -> Result<PathBuf, GenerateError> {
    let response = ai.generate(&playground_prompt(documentation))?;
    if extract_html(&response).is_none() {
        return Err(GenerateError::NoHtml);
    }

    let path = root.join(PLAYGROUND_NAME);
    write_output(&path, &response)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::testing::FakeGenerator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn api_docs_include_source_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("server.js"), "app.post('/login')").unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        let ai = FakeGenerator::replying(&["## POST /login"]);

        let (path, text) = generate_api_documentation(dir.path(), &ai).unwrap();
        assert_eq!(path, dir.path().join("API_Documentation.md"));
        assert_eq!(text, "## POST /login");
        assert_eq!(fs::read_to_string(&path).unwrap(), "## POST /login");

        let prompts = ai.prompts.borrow();
        assert!(prompts[0].contains("File: server.js\napp.post('/login')"));
        assert!(!prompts[0].contains("package-lock.json"));
    }

    #[test]
    fn playground_written_when_html_present() {
        let dir = TempDir::new().unwrap();
        let reply = "```html\n<html><body><form></form></body></html>\n```";
        let ai = FakeGenerator::replying(&[reply]);

        let path = generate_playground(dir.path(), "## GET /items", &ai).unwrap();
        assert_eq!(path, dir.path().join("API_Playground.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), reply);
        assert!(ai.prompts.borrow()[0].contains("## GET /items"));
    }

    #[test]
    fn playground_without_html_is_rejected() {
        let dir = TempDir::new().unwrap();
        let ai = FakeGenerator::replying(&["Sorry, I can't do that."]);

        let err = generate_playground(dir.path(), "docs", &ai).unwrap_err();
        assert!(matches!(err, GenerateError::NoHtml));
        assert!(!dir.path().join("API_Playground.html").exists());
    }
}
