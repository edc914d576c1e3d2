// Tue Aug 25 2026 - Alex

use crate::config::ProjectConfig;
use std::path::PathBuf;

pub const CODE_EXTENSION: &str = "as";
pub const STYLESHEET_NAME: &str = "Default.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub main_file: PathBuf,
    pub preloader_file: PathBuf,
    pub menu_state_file: PathBuf,
    pub play_state_file: PathBuf,
    pub stylesheet_file: PathBuf,
}

// The stylesheet path is always resolved; whether it gets written is
// decided by the plan, not here.
pub fn resolve(config: &ProjectConfig) -> ProjectPaths {
    ProjectPaths {
        main_file: class_file(config, &config.project_name),
        preloader_file: class_file(config, &config.preloader_name),
        menu_state_file: class_file(config, &config.menu_state_name),
        play_state_file: class_file(config, &config.play_state_name),
        stylesheet_file: config.source_dir.join(STYLESHEET_NAME),
    }
}

fn class_file(config: &ProjectConfig, class_name: &str) -> PathBuf {
    config
        .source_dir
        .join(format!("{}.{}", class_name, CODE_EXTENSION))
}
