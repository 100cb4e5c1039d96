//! Git materialization: cloning templates and inspecting clone targets.
//!
//! - [`clone`] - Clone pipeline: precondition checks, libgit2 clone, remote
//!   repointing, commit provenance, failure cleanup
//! - [`status`] - Directory inspection used both as a clone precondition and
//!   as a standalone diagnostic

pub mod clone;
pub mod status;

pub use clone::{clone_template, cleanup_failed_clone, CloneReport};
pub use status::{directory_status, DirectoryStatus};

use crate::error::{OutfitterError, Result};
use std::path::PathBuf;

/// Remote name every materialized template ends up with, regardless of how
/// the underlying clone tool names remotes.
pub const REMOTE_NAME: &str = "outfitter";

/// Expand a leading `~` to the caller's home directory.
///
/// Paths without a tilde prefix, and tilde-user forms (`~alice/...`) that we
/// do not support, pass through unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Reject git URLs with schemes the clone pipeline cannot handle.
pub fn validate_git_url(url: &str) -> Result<()> {
    const SCHEMES: [&str; 5] = ["https://", "http://", "git://", "ssh://", "file://"];

    let supported = SCHEMES.iter().any(|s| url.starts_with(s))
        // scp-like syntax: git@host:path
        || (url.starts_with("git@") && url.contains(':'));

    if supported {
        Ok(())
    } else {
        Err(OutfitterError::InvalidGitUrl {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tilde_plain_path_unchanged() {
        assert_eq!(expand_tilde("/tmp/project"), PathBuf::from("/tmp/project"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn expand_tilde_prefix_resolves_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/projects/demo"), home.join("projects/demo"));
    }

    #[test]
    fn expand_tilde_user_form_passes_through() {
        assert_eq!(expand_tilde("~alice/demo"), PathBuf::from("~alice/demo"));
    }

    #[test]
    fn validate_accepts_common_schemes() {
        assert!(validate_git_url("https://github.com/org/repo.git").is_ok());
        assert!(validate_git_url("git://example.com/repo.git").is_ok());
        assert!(validate_git_url("ssh://git@example.com/repo.git").is_ok());
        assert!(validate_git_url("git@github.com:org/repo.git").is_ok());
        assert!(validate_git_url("file:///srv/repos/demo.git").is_ok());
    }

    #[test]
    fn validate_rejects_unknown_schemes() {
        assert!(validate_git_url("ftp://example.com/repo").is_err());
        assert!(validate_git_url("not-a-url").is_err());
        let err = validate_git_url("ftp://x").unwrap_err();
        assert!(matches!(err, OutfitterError::InvalidGitUrl { .. }));
    }
}
