//! Error types for Outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `OutfitterError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors
//! - Remote metadata failures never surface as errors: the resolver absorbs
//!   them into a fallback-dataset read
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// No data source knows the requested template.
    #[error("Template with ID '{id}' not found")]
    TemplateNotFound { id: String },

    /// A required operation argument was missing or empty.
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    /// A git URL that no supported scheme understands.
    #[error("Unsupported git URL: {url}")]
    InvalidGitUrl { url: String },

    /// Clone target exists but is not a directory.
    #[error("Target path {} exists but is not a directory", path.display())]
    TargetNotDirectory { path: PathBuf },

    /// Clone target directory exists and already has contents.
    #[error("Target directory {} already exists and is not empty", path.display())]
    TargetNotEmpty { path: PathBuf },

    /// Cloning or remote repointing failed.
    #[error("Git error while cloning {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutfitterError {
    /// Build a clone failure from the underlying libgit2 error.
    pub fn clone_failed(url: impl Into<String>, err: &git2::Error) -> Self {
        Self::CloneFailed {
            url: url.into(),
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for Outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;
