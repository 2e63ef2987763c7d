// ABOUTME: Standalone step list files (`[[steps]]` tables in TOML)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::validate_steps;
use crate::tour::StepDescriptor;

#[derive(Debug, Error)]
pub enum StepsFileError {
    #[error("failed to read step file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse step file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize)]
struct StepsFile {
    #[serde(default)]
    steps: Vec<StepDescriptor>,
}

/// Load a step list. Suspicious entries are logged but kept.
pub fn load_steps_file(path: &Path) -> Result<Vec<StepDescriptor>, StepsFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| StepsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: StepsFile = toml::from_str(&content).map_err(|source| StepsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_steps(&file.steps);
    Ok(file.steps)
}
