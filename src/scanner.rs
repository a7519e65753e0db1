//! Directory listing and recursive size accumulation.
//!
//! This module provides the two filesystem operations the tool is built on:
//! a one-level listing of a directory's immediate children and a recursive
//! byte-count of everything underneath a path. Both are read-only and handle
//! partial failures gracefully.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use colored::Colorize;
use walkdir::WalkDir;

/// A single entry from a directory listing.
///
/// Carries just enough information for the report loop: a display name, the
/// full path for traversal, and whether the entry is a directory.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display form of the file name (lossy UTF-8 conversion).
    pub name: String,

    /// Full path to the entry (listing root joined with the file name).
    pub path: PathBuf,

    /// Whether the entry is a directory.
    ///
    /// Determined without following symlinks, so a symlink to a directory
    /// is reported as a non-directory.
    pub is_dir: bool,
}

/// List the immediate children of a directory (one level, not recursive).
///
/// Entries are returned in whatever order the OS listing yields them; they
/// are not sorted and callers must not rely on any particular order.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened or read, or if any
/// entry in the listing stream fails to yield. There are no partial results:
/// the listing either succeeds completely or fails with a single error.
pub fn list_entries(path: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(path)
        .map_err(|e| anyhow!("Failed to read directory {}: {e}", path.display()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry =
            entry.map_err(|e| anyhow!("Failed to read entry in {}: {e}", path.display()))?;
        let file_type = entry
            .file_type()
            .map_err(|e| anyhow!("Failed to inspect {}: {e}", entry.path().display()))?;

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir: file_type.is_dir(),
        });
    }

    Ok(entries)
}

/// Compute the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the tree under `path` and sums the byte length of
/// every non-directory entry. Symlinks are never followed (so link cycles
/// cannot recurse); a symlink entry counts its own link length like any
/// other non-directory. Traversal order is unspecified.
///
/// Entries that cannot be accessed (permission denied, broken symlinks,
/// transient I/O errors) are reported to stdout and excluded from the sum;
/// the traversal continues and the accumulated total is still returned.
///
/// # Errors
///
/// Returns an error only when the traversal cannot begin at all, i.e. when
/// `path` itself cannot be stat'ed or opened for reading.
pub fn compute_size(path: &Path) -> Result<u64> {
    let mut total = 0u64;

    for entry in WalkDir::new(path) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    continue;
                }
                match entry.metadata() {
                    Ok(metadata) => total += metadata.len(),
                    Err(err) => report_access_error(&err),
                }
            }
            // Depth 0 means the root itself failed; nothing was traversed.
            Err(err) if err.depth() == 0 => {
                return Err(anyhow!("Failed to traverse {}: {err}", path.display()));
            }
            Err(err) => report_access_error(&err),
        }
    }

    Ok(total)
}

/// Print a non-fatal traversal diagnostic to stdout and carry on.
fn report_access_error(err: &walkdir::Error) {
    println!("{}", format!("Error accessing entry: {err}").red());
}
