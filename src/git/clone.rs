//! Clone pipeline.
//!
//! Validates the target path, clones with libgit2, repoints the remote to
//! the fixed [`REMOTE_NAME`](super::REMOTE_NAME), and reads head-commit
//! provenance. The precondition checks and the clone are not atomic: two
//! concurrent clones to the same target can both pass the emptiness check,
//! in which case the loser fails inside libgit2 and is cleaned up by the
//! caller like any other failure.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use git2::build::RepoBuilder;
use git2::Repository;

use crate::error::{OutfitterError, Result};

/// Provenance record for a successful materialization.
///
/// Transient: the materialized repository on disk is the persisted
/// artifact, this report is only the operation result.
#[derive(Debug, Clone)]
pub struct CloneReport {
    pub path: PathBuf,
    pub url: String,
    pub branch: String,
    /// Full commit hash of the checked-out head.
    pub commit_id: String,
    /// Head commit message, trimmed of surrounding whitespace.
    pub commit_message: String,
    /// Author display name.
    pub commit_author: String,
    /// Author timestamp.
    pub commit_time: DateTime<Utc>,
}

impl CloneReport {
    /// Abbreviated commit hash for display.
    pub fn short_commit_id(&self) -> &str {
        &self.commit_id[..self.commit_id.len().min(8)]
    }
}

/// Clone `url` into `target`, checking out `branch`.
///
/// Preconditions, checked before any destructive action: the target must
/// not be an existing non-directory, and an existing target directory must
/// be empty. Missing parent directories are created. The default `origin`
/// remote is replaced by the fixed remote name pointed at the same URL.
pub fn clone_template(url: &str, target: &Path, branch: &str) -> Result<CloneReport> {
    if target.exists() {
        if !target.is_dir() {
            return Err(OutfitterError::TargetNotDirectory {
                path: target.to_path_buf(),
            });
        }
        if fs::read_dir(target)?.next().is_some() {
            return Err(OutfitterError::TargetNotEmpty {
                path: target.to_path_buf(),
            });
        }
    } else if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    tracing::info!("Cloning {} (branch {}) into {}", url, branch, target.display());

    let repo = RepoBuilder::new()
        .branch(branch)
        .clone(url, target)
        .map_err(|e| OutfitterError::clone_failed(url, &e))?;

    repoint_remote(&repo, url).map_err(|e| OutfitterError::clone_failed(url, &e))?;

    let report = head_report(&repo, url, target, branch)
        .map_err(|e| OutfitterError::clone_failed(url, &e))?;

    tracing::info!(
        "Cloned {} at commit {}",
        url,
        report.short_commit_id()
    );
    Ok(report)
}

/// Best-effort removal of a partially cloned target.
///
/// Returns whether anything was removed. Failures are logged, never raised:
/// cleanup is advisory.
pub fn cleanup_failed_clone(path: &Path) -> bool {
    if !path.exists() || !path.is_dir() {
        return false;
    }
    match fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::info!("Cleaned up failed clone at {}", path.display());
            true
        }
        Err(e) => {
            tracing::error!("Failed to clean up clone at {}: {}", path.display(), e);
            false
        }
    }
}

/// Replace the clone tool's default remote with the fixed one.
fn repoint_remote(repo: &Repository, url: &str) -> std::result::Result<(), git2::Error> {
    if repo.find_remote("origin").is_ok() {
        repo.remote_delete("origin")?;
        tracing::debug!("Removed 'origin' remote");
    }
    repo.remote(super::REMOTE_NAME, url)?;
    tracing::debug!("Added '{}' remote for {}", super::REMOTE_NAME, url);
    Ok(())
}

/// Read head-commit provenance into a report.
fn head_report(
    repo: &Repository,
    url: &str,
    target: &Path,
    branch: &str,
) -> std::result::Result<CloneReport, git2::Error> {
    let head = repo.head()?;
    let commit = head.peel_to_commit()?;
    let author = commit.author();

    Ok(CloneReport {
        path: target.to_path_buf(),
        url: url.to_string(),
        branch: branch.to_string(),
        commit_id: commit.id().to_string(),
        commit_message: commit.message().unwrap_or_default().trim().to_string(),
        commit_author: author.name().unwrap_or_default().to_string(),
        commit_time: DateTime::from_timestamp(commit.time().seconds(), 0)
            .unwrap_or_default(),
    })
}
