//! Command-line argument parsing
//!
//! Supports:
//! - Running a pass into the in-memory keymap and printing the result
//! - Checking a directive file without applying it
//! - Persisting a new directive path
//! - Showing the effective settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apply vimrc keybinding directives to a modal keymap
#[derive(Parser, Debug)]
#[command(
    name = "vimrc-loader",
    version,
    about = "Apply vimrc keybinding directives to a modal keymap"
)]
pub struct CliArgs {
    /// Directory the directive path is relative to (defaults to cwd)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Use this directive file for one run without saving it
    #[arg(long, value_name = "PATH", global = true)]
    pub vimrc: Option<String>,

    /// Settings file to read and write instead of the user config
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Apply the directive file and print the resulting mappings (default)
    Load,
    /// Interpret the directive file and report skipped lines
    Check,
    /// Save a new directive file path
    SetPath {
        /// Path relative to the root directory
        path: String,
    },
    /// Print the effective settings
    ShowConfig,
}

/// What a run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    Check,
    SetPath(String),
    ShowConfig,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    /// Directory directive paths resolve against
    pub root: PathBuf,
    /// One-off directive path, not persisted
    pub vimrc_override: Option<String>,
    /// Explicit settings file, `None` for the user config dir
    pub settings_file: Option<PathBuf>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let action = match self.command.unwrap_or(CliCommand::Load) {
            CliCommand::Load => Action::Load,
            CliCommand::Check => Action::Check,
            CliCommand::SetPath { path } => {
                if self.vimrc.is_some() {
                    return Err("--vimrc cannot be combined with set-path".to_string());
                }
                if path.trim().is_empty() {
                    return Err("Directive file path cannot be empty".to_string());
                }
                Action::SetPath(path)
            }
            CliCommand::ShowConfig => Action::ShowConfig,
        };

        if let Some(root) = &self.root {
            if !root.is_dir() {
                return Err(format!("Root is not a directory: {}", root.display()));
            }
        }

        Ok(RunConfig {
            action,
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            vimrc_override: self.vimrc,
            settings_file: self.settings,
            json: self.json,
        })
    }
}
