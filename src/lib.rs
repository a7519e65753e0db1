//! Core library for the `dirsize` disk usage tool.
//!
//! The library is split into three modules:
//!
//! - [`scanner`]: directory listing and recursive size accumulation
//! - [`report`]: unit scaling and report formatting
//! - [`config`]: persistent configuration file support

pub mod config;
pub mod report;
pub mod scanner;

pub use config::FileConfig;
