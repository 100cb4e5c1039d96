//! In-memory template cache.
//!
//! The cache is a pure performance layer: short-lived, memory-only, and
//! time-boxed. Staleness is detected lazily on read (no background eviction
//! thread), and invalidation is wholesale: once the window elapses the entire
//! map and its timestamp are cleared, forcing callers to repopulate from
//! upstream. Races between concurrent resolutions only cause redundant
//! upstream work, never incorrect results.

pub mod clock;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use store::{StorePolicy, TemplateStore};

use std::time::Duration;

/// How long cached records stay valid.
pub const STALENESS_WINDOW: Duration = Duration::from_secs(300);

/// Upper bound on cached entries before oldest-first eviction kicks in.
pub const DEFAULT_CAPACITY: usize = 256;
