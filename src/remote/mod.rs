//! Remote metadata service access.
//!
//! The authoritative template catalog lives behind an HTTP endpoint. Access
//! is deliberately fail-soft: transport failures, non-success statuses, and
//! malformed bodies never propagate past this module as errors; callers
//! always have the embedded fallback dataset to fall through to.

pub mod client;

pub use client::{FetchOutcome, ListFilter, MetadataClient, DEFAULT_ENDPOINT};
