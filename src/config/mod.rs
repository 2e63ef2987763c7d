// ABOUTME: Configuration management for walkthrough
// Layered TOML files: project-local first, then the user's home directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod steps;

pub use steps::{load_steps_file, StepsFileError};

use crate::tour::StepDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Walkthrough definition
    #[serde(default)]
    pub tour: TourConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    /// Steps in priority order. Empty means the built-in demo steps.
    #[serde(default)]
    pub steps: Vec<StepDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Maximum tooltip width in cells, borders included
    #[serde(default = "default_tip_max_width")]
    pub tip_max_width: u16,

    /// Extra cells around the highlighted element
    #[serde(default)]
    pub hole_padding: u16,

    /// Background of the dimmed area as [r, g, b]
    #[serde(default = "default_dim_color")]
    pub dim_color: [u8; 3],
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tip_max_width: default_tip_max_width(),
            hole_padding: 0,
            dim_color: default_dim_color(),
        }
    }
}

const fn default_tip_max_width() -> u16 {
    40
}

const fn default_dim_color() -> [u8; 3] {
    [20, 20, 30]
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_from(&path)?);
            }
        }
        config.validate();
        Ok(config)
    }

    /// Load a single configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!(path = %path.display(), steps = config.tour.steps.len(), "Loaded config");
        Ok(config)
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".walkthrough").join("config.toml"));
        }

        // 2. User config (~/.walkthrough/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".walkthrough"))
    }

    /// Merge another config into this one; non-default values win
    pub fn merge(&mut self, other: Self) {
        if !other.tour.steps.is_empty() {
            self.tour.steps = other.tour.steps;
        }

        let defaults = UiPreferences::default();
        if other.ui.tip_max_width != defaults.tip_max_width {
            self.ui.tip_max_width = other.ui.tip_max_width;
        }
        if other.ui.hole_padding != defaults.hole_padding {
            self.ui.hole_padding = other.ui.hole_padding;
        }
        if other.ui.dim_color != defaults.dim_color {
            self.ui.dim_color = other.ui.dim_color;
        }
    }

    /// Log suspicious step definitions. Nothing is removed.
    pub fn validate(&self) -> usize {
        validate_steps(&self.tour.steps)
    }
}

/// Warn about empty and duplicate target ids; returns how many warnings were logged.
pub fn validate_steps(steps: &[StepDescriptor]) -> usize {
    let mut warnings = 0;
    let mut seen = HashSet::new();
    for (index, step) in steps.iter().enumerate() {
        if step.target_id.is_empty() {
            warn!(index, "Step has an empty target_id and will never be shown");
            warnings += 1;
        } else if !seen.insert(step.target_id.as_str()) {
            warn!(index, target_id = %step.target_id, "Duplicate step target; only the first is shown");
            warnings += 1;
        }
    }
    warnings
}
