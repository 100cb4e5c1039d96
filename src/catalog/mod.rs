//! Template catalog: records, resolution, and search.
//!
//! - [`record`] - Typed template record schema shared by every data source
//! - [`fallback`] - Compile-time embedded fallback dataset
//! - [`resolver`] - Layered store → remote → fallback resolution
//! - [`search`] - Substring matching with additive relevance scoring

pub mod fallback;
pub mod record;
pub mod resolver;
pub mod search;

pub use record::{Deployment, GitRef, Pill, Requirement, Storage, TemplateRecord, Tool};
pub use resolver::{ListOptions, Resolver, DEFAULT_LIMIT};
