use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::ProjectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectKind {
    Node,
    Python,
    Rust,
    Unknown,
}

impl ProjectKind {
    /// Manifest file that identifies this kind of project.
    pub fn manifest(self) -> Option<&'static str> {
        match self {
            ProjectKind::Node => Some("package.json"),
            ProjectKind::Python => Some("requirements.txt"),
            ProjectKind::Rust => Some("Cargo.toml"),
            ProjectKind::Unknown => None,
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectKind::Node => "Node.js",
            ProjectKind::Python => "Python",
            ProjectKind::Rust => "Rust",
            ProjectKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub kind: ProjectKind,
    /// Declared dependency names (or requirement lines for Python).
    pub technologies: Vec<String>,
}

impl ProjectInfo {
    fn unknown() -> Self {
        ProjectInfo {
            kind: ProjectKind::Unknown,
            technologies: Vec::new(),
        }
    }

    /// One-line summary printed before generating anything.
    pub fn summary(&self) -> String {
        let technologies = if self.technologies.is_empty() {
            "none".to_string()
        } else {
            self.technologies.join(", ")
        };
        format!("Detected Project Type: {}, Technologies: {}", self.kind, technologies)
    }
}

/// Identify the project by its manifest: package.json, then requirements.txt,
/// then Cargo.toml. Only the root directory is inspected.
pub fn detect_project(path: &Path) -> Result<ProjectInfo, ProjectError> {
    let pkg_json = path.join("package.json");
    if pkg_json.is_file() {
        let content = read(&pkg_json)?;
        let parsed: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ProjectError::Manifest {
                path: pkg_json.clone(),
                message: e.to_string(),
            })?;
        let mut technologies = Vec::new();
        for key in ["dependencies", "devDependencies"] {
            if let Some(deps) = parsed.get(key).and_then(|d| d.as_object()) {
                technologies.extend(deps.keys().cloned());
            }
        }
        debug!("Detected Node.js project with {} packages", technologies.len());
        return Ok(ProjectInfo {
            kind: ProjectKind::Node,
            technologies,
        });
    }

    let requirements = path.join("requirements.txt");
    if requirements.is_file() {
        let technologies = read(&requirements)?
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        return Ok(ProjectInfo {
            kind: ProjectKind::Python,
            technologies,
        });
    }

    let cargo_toml = path.join("Cargo.toml");
    if cargo_toml.is_file() {
        let parsed = read(&cargo_toml)?
            .parse::<toml::Table>()
            .map_err(|e| ProjectError::Manifest {
                path: cargo_toml.clone(),
                message: e.to_string(),
            })?;
        let mut technologies = Vec::new();
        for key in ["dependencies", "dev-dependencies"] {
            if let Some(deps) = parsed.get(key).and_then(|d| d.as_table()) {
                technologies.extend(deps.keys().cloned());
            }
        }
        return Ok(ProjectInfo {
            kind: ProjectKind::Rust,
            technologies,
        });
    }

    Ok(ProjectInfo::unknown())
}

/// The main file fed to the documentation prompt, if the project has one.
pub fn manifest_path(root: &Path, info: &ProjectInfo) -> Option<PathBuf> {
    info.kind.manifest().map(|name| root.join(name))
}

fn read(path: &Path) -> Result<String, ProjectError> {
    std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_node_packages() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
            "dependencies": { "express": "^4" },
            "devDependencies": { "jest": "^29" }
        }"#,
        )
        .unwrap();
        let info = detect_project(dir.path()).unwrap();
        assert_eq!(info.kind, ProjectKind::Node);
        assert_eq!(info.technologies.len(), 2);
        assert!(info.technologies.contains(&"express".to_string()));
        assert!(info.technologies.contains(&"jest".to_string()));
        assert_eq!(info.kind.to_string(), "Node.js");
    }

    #[test]
    fn detects_python_requirements() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("requirements.txt"),
            "# web\nflask==2.0\n\nrequests \r\n",
        )
        .unwrap();
        let info = detect_project(dir.path()).unwrap();
        assert_eq!(info.kind, ProjectKind::Python);
        // every non-empty line is kept as written
        assert_eq!(info.technologies, vec!["# web", "flask==2.0", "requests "]);
    }

    #[test]
    fn summary_lists_kind_and_technologies() {
        let info = ProjectInfo {
            kind: ProjectKind::Node,
            technologies: vec!["express".into(), "jest".into()],
        };
        assert_eq!(
            info.summary(),
            "Detected Project Type: Node.js, Technologies: express, jest"
        );
        assert_eq!(
            ProjectInfo::unknown().summary(),
            "Detected Project Type: Unknown, Technologies: none"
        );
    }

    #[test]
    fn detects_cargo_crates() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            r#"
[package]
name = "demo"
version = "0.1.0"

[dependencies]
serde = "1"

[dev-dependencies]
tempfile = "3"
"#,
        )
        .unwrap();
        let info = detect_project(dir.path()).unwrap();
        assert_eq!(info.kind, ProjectKind::Rust);
        assert_eq!(info.technologies, vec!["serde", "tempfile"]);
    }

    #[test]
    fn package_json_wins_over_requirements() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        let info = detect_project(dir.path()).unwrap();
        assert_eq!(info.kind, ProjectKind::Node);
        assert!(info.technologies.is_empty());
    }

    #[test]
    fn unknown_without_manifest() {
        let dir = TempDir::new().unwrap();
        let info = detect_project(dir.path()).unwrap();
        assert_eq!(info.kind, ProjectKind::Unknown);
        assert!(manifest_path(dir.path(), &info).is_none());
    }

    #[test]
    fn malformed_package_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ not json").unwrap();
        let err = detect_project(dir.path()).unwrap_err();
        assert!(matches!(err, ProjectError::Manifest { .. }));
    }

    #[test]
    fn manifest_path_points_at_root_file() {
        let dir = TempDir::new().unwrap();
        let info = ProjectInfo {
            kind: ProjectKind::Python,
            technologies: vec![],
        };
        assert_eq!(
            manifest_path(dir.path(), &info),
            Some(dir.path().join("requirements.txt"))
        );
    }
}
