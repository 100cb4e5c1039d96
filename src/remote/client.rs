//! HTTP client for the template metadata service.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::record::TemplateRecord;

/// Default metadata endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://us-central1-outfitter-hub.cloudfunctions.net";

/// Request timeout for metadata calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a metadata fetch.
///
/// `Empty` ("upstream said zero") and `Unavailable` ("upstream is down")
/// are distinguished here so a future resolver iteration can treat them
/// differently; today both fall through to the fallback dataset.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Records(T),
    Empty,
    Unavailable,
}

impl<T> FetchOutcome<T> {
    /// The fetched value, if the call produced one.
    pub fn into_records(self) -> Option<T> {
        match self {
            FetchOutcome::Records(records) => Some(records),
            FetchOutcome::Empty | FetchOutcome::Unavailable => None,
        }
    }
}

/// Optional filters for listing templates.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Blocking client for the metadata service.
///
/// Requests carry a `{"data": {...}}` envelope and responses wrap their
/// payload in a `"result"` key.
pub struct MetadataClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MetadataClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List templates, optionally filtered.
    pub fn list(&self, filter: &ListFilter) -> FetchOutcome<Vec<TemplateRecord>> {
        let data = match serde_json::to_value(filter) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize list filter: {}", e);
                return FetchOutcome::Unavailable;
            }
        };

        match self.call("listTemplates", data) {
            Some(Value::Array(items)) if items.is_empty() => FetchOutcome::Empty,
            Some(Value::Array(items)) => match parse_records(items) {
                Some(records) => FetchOutcome::Records(records),
                None => FetchOutcome::Unavailable,
            },
            Some(other) => {
                tracing::warn!("Unexpected list response shape: {}", other);
                FetchOutcome::Unavailable
            }
            None => FetchOutcome::Unavailable,
        }
    }

    /// Fetch one template's details by id.
    pub fn get(&self, id: &str) -> FetchOutcome<TemplateRecord> {
        let data = serde_json::json!({ "id": id });

        match self.call("getTemplateDetails", data) {
            Some(Value::Null) => FetchOutcome::Empty,
            Some(value) => match serde_json::from_value::<TemplateRecord>(value) {
                Ok(record) => FetchOutcome::Records(record),
                Err(e) => {
                    tracing::warn!("Malformed template record for '{}': {}", id, e);
                    FetchOutcome::Unavailable
                }
            },
            None => FetchOutcome::Unavailable,
        }
    }

    /// POST the `{"data": ...}` envelope and unwrap the `"result"` key.
    ///
    /// Returns `None` on any transport failure, non-success status, or
    /// response without a result; this is the fail-soft boundary.
    fn call(&self, function: &str, data: Value) -> Option<Value> {
        let url = format!("{}/{}", self.base_url, function);
        let envelope = serde_json::json!({ "data": data });

        let response = match self.client.post(&url).json(&envelope).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Metadata request to {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Metadata service returned HTTP {} for {}", response.status(), url);
            return None;
        }

        let body: Value = match response.json() {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Malformed metadata response from {}: {}", url, e);
                return None;
            }
        };

        match body.get("result") {
            Some(result) => Some(result.clone()),
            None => {
                tracing::warn!("Metadata response from {} missing 'result' key", url);
                None
            }
        }
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Parse an array of raw records, rejecting the batch if any entry is
/// malformed. Validation happens once, here at the boundary.
fn parse_records(items: Vec<Value>) -> Option<Vec<TemplateRecord>> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<TemplateRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Malformed template record in listing: {}", e);
                return None;
            }
        }
    }
    Some(records)
}
