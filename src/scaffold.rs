// Wed Aug 26 2026 - Alex

use crate::config::ProjectConfig;
use crate::paths;
use crate::templates::{
    self, TemplateError, MAIN_TEMPLATE, MENU_STATE_TEMPLATE, PLAY_STATE_TEMPLATE,
    PRELOADER_TEMPLATE, STYLESHEET_TEMPLATE,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Can't open '{path}' for writing: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub files: Vec<OutputFile>,
}

impl ScaffoldPlan {
    // Pure: resolves paths and renders every artifact up front, touching
    // nothing on disk. The same plan backs both the dry-run listing and
    // the write loop.
    pub fn build(config: &ProjectConfig) -> Result<Self, ScaffoldError> {
        let paths = paths::resolve(config);
        let engine = templates::for_config(config);

        let mut files = vec![
            OutputFile {
                path: paths.main_file,
                content: engine.render(MAIN_TEMPLATE)?,
            },
            OutputFile {
                path: paths.preloader_file,
                content: engine.render(PRELOADER_TEMPLATE)?,
            },
        ];

        if config.generate_stylesheet {
            files.push(OutputFile {
                path: paths.stylesheet_file,
                content: engine.render(STYLESHEET_TEMPLATE)?,
            });
        }

        files.push(OutputFile {
            path: paths.menu_state_file,
            content: engine.render(MENU_STATE_TEMPLATE)?,
        });
        files.push(OutputFile {
            path: paths.play_state_file,
            content: engine.render(PLAY_STATE_TEMPLATE)?,
        });

        Ok(Self { files })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

// Creates or truncates. Parent directories are the user's problem.
pub fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let mut file = File::create(path).map_err(|e| ScaffoldError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
