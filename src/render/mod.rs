pub mod dashboard;
pub mod terminal;

pub use dashboard::{default_path as default_dashboard_path, Dashboard, DashboardError};
