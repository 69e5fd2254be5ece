use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

use super::terminal::file_types_label;
use crate::scanner::ScanResult;

/// Hidden, so later scans of the same root never count the page.
pub const DASHBOARD_DIR: &str = ".codedeploy";
pub const DASHBOARD_FILE: &str = "dashboard.html";

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("cannot write dashboard {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `<root>/.codedeploy/dashboard.html`
pub fn default_path(root: &Path) -> PathBuf {
    root.join(DASHBOARD_DIR).join(DASHBOARD_FILE)
}

/// A dashboard page on disk. The caller creates it, keeps it for as long as
/// it wants to refresh the same page, and drops it when done.
#[derive(Debug)]
pub struct Dashboard {
    path: PathBuf,
    refreshes: usize,
}

impl Dashboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Dashboard {
            path: path.into(),
            refreshes: 0,
        }
    }

    /// Render `result` and (re)write the page, creating its directory if needed.
    pub fn show(&mut self, result: &ScanResult, project_name: &str) -> Result<&Path, DashboardError> {
        let html = render_dashboard(result, project_name, Local::now());
        let write_err = |source| DashboardError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, html).map_err(write_err)?;
        self.refreshes += 1;
        info!("Dashboard written to {} (refresh #{})", self.path.display(), self.refreshes);
        Ok(&self.path)
    }
}

/// Build the standalone HTML page for a scan.
pub fn render_dashboard(result: &ScanResult, project_name: &str, generated_at: DateTime<Local>) -> String {
    let mut stats = String::new();
    for stat in &result.language_stats {
        let _ = write!(
            stats,
            "\n      <div class=\"stat-bar\"><span class=\"swatch\" style=\"background-color: {};\"></span><span>{}: {}%</span></div>",
            escape_html(&stat.color),
            escape_html(&stat.language),
            stat.percentage
        );
    }
    if stats.is_empty() {
        stats.push_str("\n      <p class=\"muted\">No files found.</p>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>CodeDeploy Dashboard</title>
<style>
  body {{ font-family: system-ui, sans-serif; background: #1e1e1e; color: #d4d4d4; margin: 0; padding: 48px 0; }}
  .dashboard {{ width: 80%; max-width: 900px; margin: 0 auto; padding: 20px; border: 1px solid #3c3c3c; border-radius: 8px; }}
  header {{ text-align: center; }}
  h2 {{ border-bottom: 2px solid #007acc; padding-bottom: 5px; }}
  .row {{ display: flex; gap: 50px; }}
  .row > section {{ flex: 1; }}
  .detail {{ display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #3c3c3c; }}
  .stat-bar {{ display: flex; align-items: center; margin-bottom: 10px; }}
  .swatch {{ width: 20px; height: 20px; border-radius: 50%; margin-right: 10px; }}
  .tabs {{ display: flex; gap: 10px; margin: 20px 0 10px; }}
  .tabs button {{ flex: 1; padding: 10px; background: #252526; color: inherit; border: 1px solid #3c3c3c; border-radius: 5px; cursor: pointer; }}
  .tabs button.active {{ background: #007acc; color: #fff; }}
  .tab {{ display: none; padding: 10px; border: 1px solid #3c3c3c; border-radius: 5px; }}
  .tab.active {{ display: block; }}
  .muted {{ color: #8a8a8a; }}
</style>
</head>
<body>
<div class="dashboard">
  <header>
    <h1>CodeDeploy Dashboard</h1>
    <p>{project}</p>
    <p class="muted">Generated {generated}</p>
  </header>
  <div class="row">
    <section>
      <h2>Workspace Details</h2>
      <div class="detail"><span>File Count:</span><span>{files}</span></div>
      <div class="detail"><span>Folder Count:</span><span>{folders}</span></div>
      <div class="detail"><span>File Types:</span><span>{types}</span></div>
    </section>
    <section>
      <h2>Language Statistics</h2>
      <div id="languageStats">{stats}
      </div>
    </section>
  </div>
  <div class="tabs">
    <button class="active" onclick="showTab('commands', this)">Available Commands</button>
    <button onclick="showTab('deployment', this)">Deployment Instructions</button>
  </div>
  <div id="commands" class="tab active">
    <p><code>codedeploy scan</code>: print this summary in the terminal (<code>--json</code> for machine output).</p>
    <p><code>codedeploy dashboard</code>: write this page.</p>
    <p><code>codedeploy docs --format pdf|word|markdown</code>: generate project documentation.</p>
    <p><code>codedeploy api-docs [--playground]</code>: generate API documentation and an optional test page.</p>
    <p><code>codedeploy dockerfile</code>: generate a Dockerfile for the detected project.</p>
  </div>
  <div id="deployment" class="tab">
    <ol>
      <li>Make sure the project has a <code>package.json</code>, <code>requirements.txt</code> or <code>Cargo.toml</code>.</li>
      <li>Set <code>GEMINI_API_KEY</code> or add it to <code>codedeploy.toml</code>.</li>
      <li>Run <code>codedeploy dockerfile</code> and review the generated <code>Dockerfile</code>.</li>
    </ol>
  </div>
</div>
<script>
function showTab(id, button) {{
  document.querySelectorAll('.tab').forEach(t => t.classList.remove('active'));
  document.querySelectorAll('.tabs button').forEach(b => b.classList.remove('active'));
  document.getElementById(id).classList.add('active');
  button.classList.add('active');
}}
</script>
</body>
</html>
"#,
        project = escape_html(project_name),
        generated = generated_at.format("%Y-%m-%d %H:%M"),
        files = result.file_count,
        folders = result.folder_count,
        types = escape_html(&file_types_label(result)),
        stats = stats,
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::LanguageStat;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample() -> ScanResult {
        ScanResult {
            file_count: 4,
            folder_count: 2,
            file_types: ["ts", "js", "txt", ""].iter().map(|s| s.to_string()).collect(),
            language_stats: vec![
                LanguageStat {
                    language: "TypeScript".into(),
                    percentage: 50.0,
                    color: "#007acc".into(),
                },
                LanguageStat {
                    language: "Other".into(),
                    percentage: 50.0,
                    color: "#cccccc".into(),
                },
            ],
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn renders_counts_and_languages() {
        let html = render_dashboard(&sample(), "shop", fixed_time());
        assert!(html.contains("<span>File Count:</span><span>4</span>"));
        assert!(html.contains("<span>Folder Count:</span><span>2</span>"));
        assert!(html.contains("<span>File Types:</span><span>js, ts, txt</span>"));
        assert!(html.contains("background-color: #007acc;"));
        assert!(html.contains("TypeScript: 50%"));
        assert!(html.contains("Generated 2024-05-01 09:30"));
    }

    #[test]
    fn empty_scan_says_none() {
        let empty = ScanResult {
            file_count: 0,
            folder_count: 0,
            file_types: Default::default(),
            language_stats: vec![],
        };
        let html = render_dashboard(&empty, "", fixed_time());
        assert!(html.contains("<span>File Types:</span><span>None</span>"));
        assert!(html.contains("No files found."));
    }

    #[test]
    fn escapes_project_name() {
        let html = render_dashboard(&sample(), "<script>alert(1)</script>", fixed_time());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn handle_rewrites_same_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dash.html");
        let mut dashboard = Dashboard::new(&path);

        dashboard.show(&sample(), "shop").unwrap();
        let mut second = sample();
        second.file_count = 9;
        let written = dashboard.show(&second, "shop").unwrap().to_path_buf();

        assert_eq!(written, path);
        assert_eq!(dashboard.refreshes, 2);
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<span>File Count:</span><span>9</span>"));
    }

    #[test]
    fn default_page_is_not_counted_by_later_scans() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();

        let first = crate::scanner::scan(dir.path()).unwrap();
        let mut dashboard = Dashboard::new(default_path(dir.path()));
        dashboard.show(&first, "shop").unwrap();
        dashboard.show(&first, "shop").unwrap();
        let second = crate::scanner::scan(dir.path()).unwrap();

        assert!(dir.path().join(".codedeploy").join("dashboard.html").is_file());
        assert_eq!(first, second);
    }

    #[test]
    fn write_failure_names_the_page() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("dash.html");

        let err = Dashboard::new(&path).show(&sample(), "shop").unwrap_err();
        assert!(matches!(err, DashboardError::Write { .. }));
        let message = err.to_string();
        assert!(message.starts_with("cannot write dashboard"));
        assert!(message.contains(&path.display().to_string()));
    }
}
