// Tue Aug 25 2026 - Alex

pub mod config;
pub mod logging;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod ui;

pub use config::{ConfigError, ProjectConfig};
pub use paths::ProjectPaths;
pub use scaffold::{OutputFile, ScaffoldError, ScaffoldPlan};
pub use templates::TemplateEngine;
