// ABOUTME: CLI argument parsing and command routing for walkthrough
//
// Provides command-line interface for:
// - Running the demo walkthrough (tui, default)
// - Printing the effective step list (steps)
// - Replaying the demo headlessly (simulate)

pub mod simulate;
pub mod steps;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use walkthrough::config::{load_steps_file, AppConfig};

/// Spotlight walkthrough overlay for terminal interfaces
#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Step list file overriding the configured steps
    #[arg(long, global = true)]
    pub steps: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the demo TUI (default if no command given)
    Tui,

    /// Print the effective step list
    Steps,

    /// Run the demo walkthrough without a terminal and print each state
    Simulate,
}

impl Cli {
    /// Resolve configuration from `--config` / `--steps` or the default locations.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let config = AppConfig::load_from(path)?;
                config.validate();
                config
            }
            None => AppConfig::load()?,
        };
        if let Some(path) = &self.steps {
            config.tour.steps = load_steps_file(path)?;
        }
        Ok(config)
    }
}
