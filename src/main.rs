//! # dirsize
//!
//! A small CLI tool that summarizes disk usage per immediate subdirectory of
//! a given directory, like a simplified `du -d1`.
//!
//! The tool lists the immediate subdirectories of a root directory,
//! recursively sums the file bytes under each one, and prints one
//! tab-separated line per subdirectory in the chosen unit. It is read-only,
//! single-threaded, and keeps going on partial failures.
//!
//! ## Features
//!
//! - Recursive size accumulation with report-and-continue error handling
//! - Output in bytes, kilobytes, or megabytes (truncating integer division)
//! - Plain tab-separated output, friendly to `sort` and `awk`
//! - Persistent defaults via `~/.config/dirsize/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the current directory in megabytes
//! dirsize
//!
//! # Summarize a specific directory in kilobytes
//! dirsize --dir ~/Downloads --unit KB
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dirsize::{
    config::FileConfig,
    report::{self, Unit},
};
use std::process::exit;

/// Entry point for the dirsize application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, resolves the effective directory and unit against the
/// config file, and writes the usage report to stdout. A failure to list the
/// root directory is the only fatal error; per-subdirectory failures are
/// reported and skipped inside the report loop.
///
/// # Errors
///
/// Returns errors from config subcommand handling, root directory listing,
/// or writing to stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();

    let dir = args.directory(&file_config);
    let unit = Unit::resolve(&args.unit(&file_config));

    report::write_report(&dir, unit, &mut std::io::stdout().lock())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dirsize configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory to summarize when --dir is not given
# dir = "."

# Output unit: B (bytes), KB, or MB
# unit = "MB"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable listing, showing defaults for
/// unset fields.
fn format_config(config: &FileConfig) -> String {
    let dir = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let unit = config.unit.as_deref().map_or_else(
        || "\"MB\"  (default)".to_string(),
        |u| format!("\"{u}\""),
    );

    format!("dir  = {dir}\nunit = {unit}")
}

/// Write a default config template to the config file path if it does not
/// exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
