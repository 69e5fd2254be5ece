use std::path::Path;

use tracing::warn;

use crate::project::ProjectInfo;

pub fn dockerfile_prompt(info: &ProjectInfo) -> String {
    format!(
        "Generate Dockerfile for {} project with the following dependencies/requirements {}. \
         Don't Give me anything extra except this docker file I just need the content of the docker file nothing more",
        info.kind,
        info.technologies.join(",")
    )
}

pub fn documentation_prompt(format_name: &str, main_file_content: &str) -> String {
    format!(
        "Generate {} documentation for the project with the main file with content {}",
        format_name, main_file_content
    )
}

/// Prompt containing every readable source file, tagged with its path
/// relative to `root`. Files that are not valid UTF-8 or cannot be read are
/// skipped.
pub fn api_documentation_prompt(root: &Path, files: &[impl AsRef<Path>]) -> String {
    let mut prompt = format!(
        "Generate API documentation for the project located at {}\n\n",
        root.display()
    );
    for file in files {
        let file = file.as_ref();
        match std::fs::read_to_string(file) {
            Ok(content) => {
                let relative = file.strip_prefix(root).unwrap_or(file);
                prompt.push_str(&format!("File: {}\n{}\n\n", relative.display(), content));
            }
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }
    prompt
}

pub fn playground_prompt(documentation: &str) -> String {
    format!(
        "Generate an HTML page for API testing with the following features:\n\
         \n\
         1. Interactive form elements to input URL, HTTP method, headers, and request body just like swagger or postman.\n\
         2. Use inline CSS for styling to make it visually appealing and make it consistent and modern looking.\n\
         3. Fully functional buttons to execute API requests (GET, POST, PUT, DELETE).\n\
         4. Display area to show response data and should be complete working.\n\
         \n\
         Documentation Content:\n\
         {}\n",
        documentation
    )
}

/// Remove a leading "```dockerfile" fence and a trailing "```" fence.
pub fn strip_dockerfile_fences(text: &str) -> &str {
    let mut out = text;
    if let Some(rest) = out.strip_prefix("```dockerfile") {
        if rest.starts_with(char::is_whitespace) {
            out = rest.trim_start();
        }
    }
    let trimmed = out.trim_end();
    if let Some(rest) = trimmed.strip_suffix("```") {
        if rest.ends_with(char::is_whitespace) {
            out = rest.trim_end();
        }
    }
    out
}

/// First `<html ... </html>` span in `text`, matched case-insensitively.
pub fn extract_html(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets intact.
    let lower = text.to_ascii_lowercase();
    let start = lower.find("<html")?;
    let end_tag = "</html>";
    let end = lower[start..].find(end_tag)? + start + end_tag.len();
    Some(&text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::detect::ProjectKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dockerfile_prompt_names_kind_and_deps() {
        let info = ProjectInfo {
            kind: ProjectKind::Node,
            technologies: vec!["express".into(), "jest".into()],
        };
        let prompt = dockerfile_prompt(&info);
        assert!(prompt.starts_with("Generate Dockerfile for Node.js project"));
        assert!(prompt.contains("express,jest"));
    }

    #[test]
    fn api_prompt_lists_relative_paths() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("app.js"), "app.get('/users')").unwrap();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let files = vec![src.join("app.js"), dir.path().join("blob.bin")];
        let prompt = api_documentation_prompt(dir.path(), &files);
        assert!(prompt.starts_with("Generate API documentation for the project located at"));
        let expected = format!("File: {}\napp.get('/users')\n\n", Path::new("src").join("app.js").display());
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains("blob.bin"));
    }

    #[test]
    fn playground_prompt_embeds_docs() {
        let prompt = playground_prompt("GET /users");
        assert!(prompt.contains("HTML page for API testing"));
        assert!(prompt.ends_with("Documentation Content:\nGET /users\n"));
    }

    #[test]
    fn strips_dockerfile_fences() {
        let raw = "```dockerfile\nFROM node:20\nCMD [\"node\", \"index.js\"]\n```";
        assert_eq!(
            strip_dockerfile_fences(raw),
            "FROM node:20\nCMD [\"node\", \"index.js\"]"
        );
    }

    #[test]
    fn leaves_unfenced_dockerfile_alone() {
        let raw = "FROM python:3.12\nRUN pip install flask\n";
        assert_eq!(strip_dockerfile_fences(raw), raw);
    }

    #[test]
    fn extracts_html_case_insensitively() {
        let text = "Here you go:\n<HTML lang=\"en\"><body>hi</body></Html>\nEnjoy!";
        assert_eq!(
            extract_html(text),
            Some("<HTML lang=\"en\"><body>hi</body></Html>")
        );
    }

    #[test]
    fn extract_html_needs_both_tags() {
        assert_eq!(extract_html("no markup here"), None);
        assert_eq!(extract_html("<html><body>"), None);
    }
}
