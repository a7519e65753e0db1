//! Output units and report rendering.
//!
//! This module owns the output side of the tool: the [`Unit`] selector with
//! its integer-division scaling, the tab-separated line format, and
//! [`write_report`], which walks a root directory's immediate subdirectories
//! and writes one usage line per subdirectory to a caller-supplied sink.

use std::{io::Write, path::Path};

use anyhow::Result;
use colored::Colorize;

use crate::scanner;

/// Bytes per kilobyte (binary).
pub const BYTES_IN_KB: u64 = 1024;

/// Bytes per megabyte (binary).
pub const BYTES_IN_MB: u64 = 1024 * 1024;

/// Output scale for reported sizes.
///
/// Selected by the `--unit` flag (or the config file); sizes are converted
/// with truncating integer division, so a 1023-byte directory reports `0`
/// in kilobytes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Unit {
    /// Raw byte count (`B`).
    Bytes,

    /// Kibibytes: bytes / 1024 (`KB`).
    Kilobytes,

    /// Mebibytes: bytes / 1,048,576 (`MB`).
    Megabytes,
}

impl Unit {
    /// Resolve a unit name to a [`Unit`], falling back to megabytes.
    ///
    /// Recognizes exactly `"B"`, `"KB"`, and `"MB"` (case-sensitive). Any
    /// other value resolves to [`Unit::Megabytes`] after printing a warning
    /// to stdout, so a typo degrades the output scale rather than the run.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "B" => Self::Bytes,
            "KB" => Self::Kilobytes,
            "MB" => Self::Megabytes,
            _ => {
                println!("{}", "Invalid unit; using MB as default".yellow());
                Self::Megabytes
            }
        }
    }

    /// Convert a byte count into this unit, truncating toward zero.
    #[must_use]
    pub const fn scale(self, bytes: u64) -> u64 {
        match self {
            Self::Bytes => bytes,
            Self::Kilobytes => bytes / BYTES_IN_KB,
            Self::Megabytes => bytes / BYTES_IN_MB,
        }
    }
}

/// Convert a byte count using a raw unit name.
///
/// Combines [`Unit::resolve`] and [`Unit::scale`]: unknown unit names fall
/// back to megabytes (with the resolve warning as a side effect).
#[must_use]
pub fn format_size(bytes: u64, unit: &str) -> u64 {
    Unit::resolve(unit).scale(bytes)
}

/// Render one report line: the scaled value and the directory name,
/// separated by a tab.
#[must_use]
pub fn format_line(value: u64, name: &str) -> String {
    format!("{value}\t{name}")
}

/// Write the usage report for `root` to `out`.
///
/// Lists the immediate entries of `root` and, for every entry that is a
/// directory, computes its recursive size and writes a `"<value>\t<name>"`
/// line in the given unit. Non-directory entries are silently skipped.
/// Lines appear in whatever order the OS listing yields the entries.
///
/// A failure to compute one subdirectory's size is reported to stdout and
/// that subdirectory's line is omitted; the report still completes and the
/// call returns `Ok`.
///
/// # Errors
///
/// Returns an error if the root directory itself cannot be listed, or if
/// writing a line to `out` fails.
pub fn write_report(root: &Path, unit: Unit, out: &mut impl Write) -> Result<()> {
    let entries = scanner::list_entries(root)?;

    for entry in entries {
        if !entry.is_dir {
            continue;
        }

        match scanner::compute_size(&entry.path) {
            Ok(size) => writeln!(out, "{}", format_line(unit.scale(size), &entry.name))?,
            Err(err) => println!(
                "{}",
                format!("Error calculating size for {}: {err}", entry.path.display()).red()
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    /// Create a file of exactly `size` bytes, ensuring parent dirs exist.
    fn create_sized_file(path: &Path, size: u64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        file.set_len(size).unwrap();
    }

    /// Run `write_report` into a buffer and return its lines, sorted.
    fn report_lines(root: &Path, unit: Unit) -> Vec<String> {
        let mut buf = Vec::new();
        write_report(root, unit, &mut buf).unwrap();
        let mut lines: Vec<String> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort_unstable();
        lines
    }

    // ── Unit conversion ─────────────────────────────────────────────────

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(10_485_760, "MB"), 10);
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(10_240, "KB"), 10);
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(10, "B"), 10);
    }

    #[test]
    fn test_format_size_invalid_unit_falls_back_to_megabytes() {
        assert_eq!(format_size(10_485_760, "XYZ"), format_size(10_485_760, "MB"));
        assert_eq!(format_size(10_485_760, "XYZ"), 10);
        assert_eq!(format_size(0, "gigabytes"), 0);
    }

    #[test]
    fn test_format_size_is_case_sensitive() {
        // "kb" is not a recognized unit, so it falls back to MB.
        assert_eq!(format_size(10_240, "kb"), 0);
        assert_eq!(format_size(10_240, "KB"), 10);
    }

    #[test]
    fn test_unit_resolve() {
        assert_eq!(Unit::resolve("B"), Unit::Bytes);
        assert_eq!(Unit::resolve("KB"), Unit::Kilobytes);
        assert_eq!(Unit::resolve("MB"), Unit::Megabytes);
        assert_eq!(Unit::resolve(""), Unit::Megabytes);
        assert_eq!(Unit::resolve("mb"), Unit::Megabytes);
        assert_eq!(Unit::resolve("GB"), Unit::Megabytes);
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        assert_eq!(Unit::Kilobytes.scale(1023), 0);
        assert_eq!(Unit::Kilobytes.scale(2047), 1);
        assert_eq!(Unit::Megabytes.scale(1_048_575), 0);
        assert_eq!(Unit::Megabytes.scale(2_097_151), 1);
        assert_eq!(Unit::Bytes.scale(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(10, "testdir"), "10\ttestdir");
        assert_eq!(format_line(0, "empty"), "0\tempty");
    }

    // ── write_report ────────────────────────────────────────────────────

    #[test]
    fn test_write_report_one_line_per_subdirectory() {
        let tmp = TempDir::new().unwrap();
        create_sized_file(&tmp.path().join("alpha/a.bin"), 1024);
        create_sized_file(&tmp.path().join("alpha/b.bin"), 2048);
        create_sized_file(&tmp.path().join("beta/c.bin"), 10240);

        let lines = report_lines(tmp.path(), Unit::Bytes);
        assert_eq!(lines, vec!["10240\tbeta", "3072\talpha"]);
    }

    #[test]
    fn test_write_report_skips_root_level_files() {
        let tmp = TempDir::new().unwrap();
        create_sized_file(&tmp.path().join("stray.txt"), 4096);
        create_sized_file(&tmp.path().join("sub/kept.txt"), 512);

        let lines = report_lines(tmp.path(), Unit::Bytes);
        assert_eq!(lines, vec!["512\tsub"]);
    }

    #[test]
    fn test_write_report_applies_unit_scaling() {
        let tmp = TempDir::new().unwrap();
        create_sized_file(&tmp.path().join("big/blob.bin"), 3 * BYTES_IN_MB);

        assert_eq!(report_lines(tmp.path(), Unit::Megabytes), vec!["3\tbig"]);
        assert_eq!(report_lines(tmp.path(), Unit::Kilobytes), vec!["3072\tbig"]);
    }

    #[test]
    fn test_write_report_empty_root_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(report_lines(tmp.path(), Unit::Megabytes).is_empty());
    }

    #[test]
    fn test_write_report_missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("missing");

        let mut buf = Vec::new();
        assert!(write_report(&gone, Unit::Megabytes, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_report_counts_empty_subdirectories_as_zero() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("hollow")).unwrap();

        assert_eq!(report_lines(tmp.path(), Unit::Bytes), vec!["0\thollow"]);
    }
}
