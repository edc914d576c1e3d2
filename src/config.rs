// Tue Aug 25 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Project name must not be empty")]
    EmptyProjectName,
    #[error("Class name for {0} must not be empty")]
    EmptyClassName(&'static str),
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project_name: String,
    pub width: u32,
    pub height: u32,
    pub zoom: u32,
    pub source_dir: PathBuf,
    pub preloader_name: String,
    pub menu_state_name: String,
    pub play_state_name: String,
    pub generate_stylesheet: bool,
    pub dry_run: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            width: 320,
            height: 240,
            zoom: 2,
            source_dir: PathBuf::from("src"),
            preloader_name: "Preloader".to_string(),
            menu_state_name: "MenuState".to_string(),
            play_state_name: "PlayState".to_string(),
            generate_stylesheet: true,
            dry_run: false,
        }
    }
}

impl ProjectConfig {
    pub fn new(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_source_dir(mut self, dir: PathBuf) -> Self {
        self.source_dir = dir;
        self
    }

    pub fn with_preloader_name(mut self, name: &str) -> Self {
        self.preloader_name = name.to_string();
        self
    }

    pub fn with_menu_state_name(mut self, name: &str) -> Self {
        self.menu_state_name = name.to_string();
        self
    }

    pub fn with_play_state_name(mut self, name: &str) -> Self {
        self.play_state_name = name.to_string();
        self
    }

    pub fn with_stylesheet(mut self, generate: bool) -> Self {
        self.generate_stylesheet = generate;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_name.is_empty() {
            return Err(ConfigError::EmptyProjectName);
        }
        if self.preloader_name.is_empty() {
            return Err(ConfigError::EmptyClassName("preloader"));
        }
        if self.menu_state_name.is_empty() {
            return Err(ConfigError::EmptyClassName("menu state"));
        }
        if self.play_state_name.is_empty() {
            return Err(ConfigError::EmptyClassName("play state"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ProjectConfig::default();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.zoom, 2);
        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.preloader_name, "Preloader");
        assert_eq!(config.menu_state_name, "MenuState");
        assert_eq!(config.play_state_name, "PlayState");
        assert!(config.generate_stylesheet);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builders() {
        let config = ProjectConfig::new("Asteroids")
            .with_dimensions(640, 480)
            .with_zoom(1)
            .with_source_dir(PathBuf::from("code"))
            .with_preloader_name("Loader")
            .with_menu_state_name("Title")
            .with_play_state_name("Game")
            .with_stylesheet(false)
            .with_dry_run(true);

        assert_eq!(config.project_name, "Asteroids");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.zoom, 1);
        assert_eq!(config.source_dir, PathBuf::from("code"));
        assert_eq!(config.preloader_name, "Loader");
        assert_eq!(config.menu_state_name, "Title");
        assert_eq!(config.play_state_name, "Game");
        assert!(!config.generate_stylesheet);
        assert!(config.dry_run);
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        assert!(ProjectConfig::default().validate().is_err());
        assert!(ProjectConfig::new("Foo").validate().is_ok());

        let config = ProjectConfig::new("Foo").with_preloader_name("");
        assert!(config.validate().is_err());
    }
}
