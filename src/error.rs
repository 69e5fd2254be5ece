use thiserror::Error;

use crate::config::ConfigError;
use crate::generate::GenerateError;
use crate::project::ProjectError;
use crate::render::DashboardError;
use crate::scanner::ScanError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("this build has no AI backend; rebuild with the `gemini` feature")]
    NoAiBackend,
}
