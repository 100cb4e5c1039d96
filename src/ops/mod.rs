//! Public operations over the catalog and the clone pipeline.
//!
//! Each operation takes structured arguments and returns human-readable
//! text plus an implicit success/error status; callers (the CLI here, an
//! RPC dispatcher elsewhere) distinguish failures by message content, not
//! by machine-readable codes.

pub mod display;
pub mod service;

pub use service::{OpResult, TemplateService};
