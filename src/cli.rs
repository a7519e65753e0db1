//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and subcommands using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dirsize::config::file::{FileConfig, expand_tilde};

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values
/// act as defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "dirsize")]
#[command(about = "Summarize disk usage of the immediate subdirectories of a directory")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Directory to summarize disk usage for
    ///
    /// The tool lists this directory's immediate subdirectories and prints
    /// one usage line per subdirectory. Defaults to the current directory.
    #[arg(short = 'd', long)]
    dir: Option<PathBuf>,

    /// Output unit: B (bytes), KB, or MB
    ///
    /// Sizes are converted with truncating integer division. Any other value
    /// falls back to MB with a warning.
    #[arg(short = 'u', long)]
    unit: Option<String>,
}

impl Cli {
    /// Resolve the target directory from CLI args, config file, or default.
    ///
    /// Priority: CLI argument > config file `dir` > current directory (`.`).
    /// Tilde expansion is applied to paths originating from the config file.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref dir) = self.dir {
            return dir.clone();
        }

        if let Some(ref dir) = config.dir {
            return expand_tilde(dir);
        }

        PathBuf::from(".")
    }

    /// Resolve the output unit from CLI args, config file, or default.
    ///
    /// Priority: CLI argument > config file `unit` > `"MB"`. The returned
    /// value is still a raw string; validation (with its MB fallback)
    /// happens when the unit is resolved for output.
    #[must_use]
    pub fn unit(&self, config: &FileConfig) -> String {
        self.unit
            .clone()
            .or_else(|| config.unit.clone())
            .unwrap_or_else(|| "MB".to_string())
    }
}
