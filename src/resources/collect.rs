// src/resources/collect.rs

//! Dependency-file collection
//!
//! The packaging tool must rerun when any file under a resolved directory is
//! added or changed, so every surviving file becomes a declared input. Files
//! on the fixed ignore list are skipped, and a matching directory segment
//! prunes its whole subtree. Enumeration order is sorted per directory so
//! repeated runs produce identical invocation logs.

use crate::error::Result;
use crate::resources::{IgnoreSet, ResolvedDirSet};
use std::path::PathBuf;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

fn keep(entry: &DirEntry, ignore: &IgnoreSet) -> bool {
    // The walk roots are the resolved directories themselves, never filtered
    if entry.depth() == 0 {
        return true;
    }
    !ignore.matches(&entry.file_name().to_string_lossy())
}

/// Enumerate every dependency file under the resolved directories
///
/// Returns the file list and whether at least one file was found. For
/// resource directories the boolean gates the whole resource-compilation
/// pass; for asset directories it is ignored by the caller.
pub fn collect_dir_files(
    dirs: &ResolvedDirSet,
    ignore: &IgnoreSet,
) -> Result<(Vec<PathBuf>, bool)> {
    let mut files = Vec::new();
    let mut found = false;

    for dir in dirs.iter() {
        if !dir.path.is_dir() {
            debug!(dir = %dir.path.display(), "declared directory missing, nothing to collect");
            continue;
        }

        let walker = WalkDir::new(&dir.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| keep(e, ignore));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
                found = true;
            }
        }
    }

    Ok((files, found))
}
