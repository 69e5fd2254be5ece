mod ai;
mod config;
mod error;
mod generate;
mod project;
mod render;
mod scanner;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ai::TextGenerator;
use crate::config::Config;
use crate::error::AppError;
use crate::generate::DocFormat;
use crate::render::Dashboard;

#[derive(Parser, Debug)]
#[command(name = "codedeploy", version, about = "Scan a codebase and generate deployment docs with AI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to <PATH>/codedeploy.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count files, folders and languages
    Scan {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an HTML dashboard of the scan
    Dashboard {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to <PATH>/.codedeploy/dashboard.html)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate a Dockerfile for the detected project
    Dockerfile {
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate project documentation from its manifest
    Docs {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Documentation format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<DocFormat>,
    },

    /// Generate API documentation from the project's source files
    ApiDocs {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also generate an HTML playground for trying the API
        #[arg(long)]
        playground: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Scan { path, json } => {
            let result = scanner::scan(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render::terminal::render_scan(&result, &project_name(&path));
            }
        }
        Command::Dashboard { path, out } => {
            let result = scanner::scan(&path)?;
            let out = out.unwrap_or_else(|| render::default_dashboard_path(&path));
            let mut dashboard = Dashboard::new(out);
            let written = dashboard.show(&result, &project_name(&path))?;
            println!("Dashboard written to {}", written.display());
        }
        Command::Dockerfile { path } => {
            let config = Config::load(cli.config.as_deref(), &path)?;
            let info = project::detect_project(&path)?;
            println!("{}", info.summary());
            let ai = text_generator(&config)?;
            let written = generate::generate_dockerfile(&path, &info, ai.as_ref())?;
            println!("Dockerfile generated: {}", written.display());
        }
        Command::Docs { path, format } => {
            let config = Config::load(cli.config.as_deref(), &path)?;
            let format = format.unwrap_or(config.docs.format);
            let ai = text_generator(&config)?;
            let written = generate::generate_documentation(&path, format, ai.as_ref())?;
            println!("Documentation generated: {}", written.display());
        }
        Command::ApiDocs { path, playground } => {
            let config = Config::load(cli.config.as_deref(), &path)?;
            let ai = text_generator(&config)?;
            let (written, text) = generate::generate_api_documentation(&path, ai.as_ref())?;
            println!("API documentation generated: {}", written.display());
            if playground {
                info!("Generating API playground");
                let page = generate::generate_playground(&path, &text, ai.as_ref())?;
                println!("API playground generated: {}", page.display());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "gemini")]
fn text_generator(config: &Config) -> Result<Box<dyn TextGenerator>, AppError> {
    let key = config.api_key()?.to_string();
    Ok(Box::new(ai::GeminiClient::new(key, &config.gemini)))
}

#[cfg(not(feature = "gemini"))]
fn text_generator(config: &Config) -> Result<Box<dyn TextGenerator>, AppError> {
    config.api_key()?;
    Err(AppError::NoAiBackend)
}

/// Directory name shown in report headers.
fn project_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.display().to_string())
}
