//! Layered template resolution.
//!
//! Resolution order (first source with data wins):
//! 1. In-memory store (time-boxed cache)
//! 2. Remote metadata service
//! 3. Embedded fallback dataset
//!
//! Lookup failures never surface as errors at this layer: absence is an
//! empty listing or `None`, and upstream unavailability is absorbed by
//! falling through to the next source. No retries anywhere.

use crate::cache::TemplateStore;
use crate::catalog::record::TemplateRecord;
use crate::catalog::{fallback, search};
use crate::remote::{FetchOutcome, ListFilter, MetadataClient};

/// Default maximum result count for list and search.
pub const DEFAULT_LIMIT: usize = 20;

/// Options for listing templates.
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    /// Case-insensitive exact domain match.
    pub domain: Option<String>,
    /// Forwarded to the metadata service's listing filter.
    pub creator_id: Option<String>,
    /// Maximum number of records returned.
    pub limit: Option<usize>,
}

/// Resolves template records across the store, the remote service, and the
/// fallback dataset, populating the store on success.
pub struct Resolver {
    store: TemplateStore,
    client: MetadataClient,
}

impl Resolver {
    /// Create a resolver with a fresh store.
    pub fn new(client: MetadataClient) -> Self {
        Self::with_store(client, TemplateStore::new())
    }

    /// Create a resolver around an existing store.
    pub fn with_store(client: MetadataClient, store: TemplateStore) -> Self {
        Self { store, client }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// List published templates, sorted ascending by title.
    pub fn list(&self, options: &ListOptions) -> Vec<TemplateRecord> {
        let records = match self.store.get_all() {
            Some(cached) => {
                tracing::debug!("Listing {} templates from cache", cached.len());
                cached
            }
            None => self.fetch_listing(options),
        };

        let mut records: Vec<TemplateRecord> = records
            .into_iter()
            .filter(|r| r.is_published)
            .filter(|r| match &options.domain {
                Some(domain) => r.domain.eq_ignore_ascii_case(domain),
                None => true,
            })
            .collect();

        // Stable sort: equal titles keep their source order.
        records.sort_by(|a, b| a.title.cmp(&b.title));
        records.truncate(options.limit.unwrap_or(DEFAULT_LIMIT));
        records
    }

    /// Fetch a record by id: store, then remote, then fallback.
    pub fn get(&self, id: &str) -> Option<TemplateRecord> {
        if let Some(record) = self.store.get_by_id(id) {
            tracing::debug!("Resolved template '{}' from cache", id);
            return Some(record);
        }

        if let Some(record) = self.client.get(id).into_records() {
            self.store.put_one(record.clone());
            return Some(record);
        }

        let record = fallback::get(id).cloned()?;
        tracing::info!("Resolved template '{}' from fallback dataset", id);
        self.store.put_one(record.clone());
        Some(record)
    }

    /// Search published templates, ranked by relevance.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(u32, TemplateRecord)> {
        let candidates = match self.client.list(&ListFilter::default()).into_records() {
            Some(records) => records,
            None => {
                tracing::info!("Searching fallback dataset for '{}'", query);
                fallback::search(query).into_iter().cloned().collect()
            }
        };

        let published = candidates.into_iter().filter(|r| r.is_published).collect();

        let mut ranked = search::rank(published, query);
        ranked.truncate(limit);
        ranked
    }

    /// Remote listing with fallback, caching whatever was obtained.
    fn fetch_listing(&self, options: &ListOptions) -> Vec<TemplateRecord> {
        let filter = ListFilter {
            creator_id: options.creator_id.clone(),
            title: None,
        };

        let records = match self.client.list(&filter) {
            FetchOutcome::Records(records) => records,
            // Empty and Unavailable fall through identically today; the
            // distinction exists for a future iteration.
            FetchOutcome::Empty | FetchOutcome::Unavailable => {
                tracing::info!("Remote listing yielded nothing; using fallback dataset");
                fallback::all().to_vec()
            }
        };

        self.store.put_all(records.clone());
        records
    }
}
