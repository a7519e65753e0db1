//! Configuration loading and layering.
//!
//! Persistent defaults come from a TOML file in the platform configuration
//! directory; CLI arguments override them. See [`FileConfig`] for the file
//! format and precedence rules.

pub mod file;

pub use file::FileConfig;
