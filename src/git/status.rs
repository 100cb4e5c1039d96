//! Directory inspection for clone targets.

use std::fs;
use std::path::Path;

use git2::Repository;
use serde::Serialize;
use walkdir::WalkDir;

/// Snapshot of a prospective clone target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryStatus {
    pub exists: bool,
    pub is_directory: bool,
    pub is_empty: bool,
    /// Whether the path is itself a version-controlled working copy.
    pub is_git_repo: bool,
    /// Number of direct entries (files and directories).
    pub file_count: usize,
    /// Total recursive size of contained files.
    pub size_bytes: u64,
}

impl DirectoryStatus {
    fn absent() -> Self {
        Self {
            exists: false,
            is_directory: false,
            is_empty: false,
            is_git_repo: false,
            file_count: 0,
            size_bytes: 0,
        }
    }
}

/// Inspect a path.
///
/// Never fails: filesystem errors during inspection are swallowed per entry,
/// so a single unreadable file cannot fail the whole report. Applying this
/// twice to an unmodified path yields identical results.
pub fn directory_status(path: &Path) -> DirectoryStatus {
    if !path.exists() {
        return DirectoryStatus::absent();
    }

    let mut status = DirectoryStatus {
        exists: true,
        ..DirectoryStatus::absent()
    };

    if !path.is_dir() {
        return status;
    }
    status.is_directory = true;

    match fs::read_dir(path) {
        Ok(entries) => {
            status.file_count = entries.count();
            status.is_empty = status.file_count == 0;
        }
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", path.display(), e);
        }
    }

    status.is_git_repo = Repository::open(path).is_ok();
    status.size_bytes = directory_size(path);
    status
}

/// Recursive byte size; unreadable entries are skipped.
fn directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}
