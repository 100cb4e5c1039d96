//! Outfitter - Discover and clone project templates.
//!
//! Outfitter keeps a catalog of project templates, resolves it through a
//! short-lived in-memory cache backed by a remote metadata service with a
//! built-in fallback dataset, and materializes templates with git.
//!
//! # Architecture
//!
//! - [`catalog`] - Template records, resolution, search, and fallback data
//! - [`cache`] - In-memory template store with staleness tracking
//! - [`remote`] - HTTP client for the template metadata service
//! - [`git`] - Clone pipeline and directory inspection
//! - [`ops`] - The exposed template operations and their text rendering
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod git;
pub mod ops;
pub mod remote;

pub use error::{OutfitterError, Result};
