//! Time-boxed in-memory record store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::clock::{Clock, SystemClock};
use super::{DEFAULT_CAPACITY, STALENESS_WINDOW};
use crate::catalog::record::TemplateRecord;

/// Eviction policy for the store.
#[derive(Debug, Clone, Copy)]
pub struct StorePolicy {
    /// Age past which the whole store is discarded on read.
    pub staleness_window: Duration,
    /// Maximum number of entries; overflow evicts oldest-inserted first.
    pub capacity: usize,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            staleness_window: STALENESS_WINDOW,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Map from template id to record, plus one "populated since" timestamp.
///
/// Mutex-guarded so the resolver can share it by reference across handlers.
/// Invalidation is never partial: a stale read clears both the map and the
/// timestamp and reports absence, which makes the caller repopulate from
/// upstream.
pub struct TemplateStore {
    inner: Mutex<Inner>,
    policy: StorePolicy,
    clock: Box<dyn Clock>,
}

struct Inner {
    entries: HashMap<String, TemplateRecord>,
    /// Insertion order, for deterministic reads and oldest-first eviction.
    order: Vec<String>,
    populated_at: Option<DateTime<Utc>>,
}

impl TemplateStore {
    /// Create a store with the default policy and the system clock.
    pub fn new() -> Self {
        Self::with_policy(StorePolicy::default())
    }

    /// Create a store with a custom policy.
    pub fn with_policy(policy: StorePolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }

    /// Create a store with an injected clock (deterministic staleness tests).
    pub fn with_clock(policy: StorePolicy, clock: impl Clock + 'static) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: Vec::new(),
                populated_at: None,
            }),
            policy,
            clock: Box::new(clock),
        }
    }

    /// All cached records in insertion order, or `None` if the store has
    /// never been populated or has gone stale.
    pub fn get_all(&self) -> Option<Vec<TemplateRecord>> {
        let mut inner = self.inner.lock().unwrap();
        if self.expire_if_stale(&mut inner) {
            return None;
        }
        inner.populated_at?;

        Some(
            inner
                .order
                .iter()
                .filter_map(|id| inner.entries.get(id).cloned())
                .collect(),
        )
    }

    /// A single cached record by id, subject to the same staleness check.
    pub fn get_by_id(&self, id: &str) -> Option<TemplateRecord> {
        let mut inner = self.inner.lock().unwrap();
        if self.expire_if_stale(&mut inner) {
            return None;
        }
        inner.entries.get(id).cloned()
    }

    /// Replace the entire contents and reset the staleness clock.
    pub fn put_all(&self, records: Vec<TemplateRecord>) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.clear();
        inner.order.clear();
        for record in records.into_iter().take(self.policy.capacity) {
            if !inner.entries.contains_key(&record.id) {
                inner.order.push(record.id.clone());
            }
            inner.entries.insert(record.id.clone(), record);
        }
        inner.populated_at = Some(self.clock.now());
        tracing::debug!("Cached {} template records", inner.entries.len());
    }

    /// Upsert one record.
    ///
    /// Starts the staleness clock only if the store was empty, so a detail
    /// fetch does not extend the life of an older full listing.
    pub fn put_one(&self, record: TemplateRecord) {
        let mut inner = self.inner.lock().unwrap();
        if inner.populated_at.is_none() {
            inner.populated_at = Some(self.clock.now());
        }
        if !inner.entries.contains_key(&record.id) {
            if inner.entries.len() >= self.policy.capacity {
                let evicted = inner.order.remove(0);
                inner.entries.remove(&evicted);
                tracing::debug!("Evicted oldest cached record '{}'", evicted);
            }
            inner.order.push(record.id.clone());
        }
        inner.entries.insert(record.id.clone(), record);
    }

    /// Number of cached entries (stale entries included until next read).
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the map and timestamp if the window has elapsed. Returns true
    /// when the store was expired by this call.
    fn expire_if_stale(&self, inner: &mut Inner) -> bool {
        let Some(populated_at) = inner.populated_at else {
            return false;
        };
        let window = chrono::Duration::from_std(self.policy.staleness_window)
            .unwrap_or(chrono::Duration::MAX);
        if self.clock.now() - populated_at > window {
            inner.entries.clear();
            inner.order.clear();
            inner.populated_at = None;
            tracing::debug!("Template cache went stale; cleared");
            return true;
        }
        false
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}
