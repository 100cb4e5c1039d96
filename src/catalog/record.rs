//! Template record schema.
//!
//! [`TemplateRecord`] is the unit of catalog data: typed once at the
//! data-source boundary instead of re-validated at every consumption site.
//! Field names match the remote metadata service's JSON wire format, which
//! the embedded fallback dataset shares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry describing one reusable project template.
///
/// Records are immutable once constructed; a refreshed record replaces the
/// prior cache entry wholesale. A record with no [`GitRef`] cannot be
/// materialized. Only records with `is_published` set are surfaced by list
/// and search, though any record may be fetched directly by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Unique, stable identifier (cache key across all sources).
    pub id: String,

    /// Human-readable title.
    pub title: String,

    /// Longer description shown in listings and detail views.
    pub description: String,

    /// URL-friendly short name.
    #[serde(default)]
    pub slug: String,

    /// Free-text category (e.g. "Web Development", "Machine Learning").
    pub domain: String,

    /// Identifier of the publishing user.
    pub creator_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Whether the template is visible to list/search callers.
    #[serde(default)]
    pub is_published: bool,

    pub published_at: Option<DateTime<Utc>>,

    /// Ordered feature tags, searched as joined text.
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub requirements: Vec<Requirement>,

    #[serde(default)]
    pub tools: Vec<Tool>,

    pub icon: Option<String>,
    pub card_image: Option<String>,
    pub hero_image: Option<String>,

    /// Source repository reference; absent for metadata-only templates.
    pub git: Option<GitRef>,

    pub storage: Option<Storage>,
    pub deployment: Option<Deployment>,

    #[serde(default)]
    pub getting_started_screen: bool,
    pub getting_started_screen_index: Option<u32>,

    /// Quick-action pills surfaced after materialization.
    #[serde(default)]
    pub pills: Vec<Pill>,
}

impl TemplateRecord {
    /// Combined lowercase haystack used for substring search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title.to_lowercase(),
            self.description.to_lowercase(),
            self.features.join(" ").to_lowercase(),
            self.domain.to_lowercase(),
        )
    }
}

/// Source-control reference for a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitRef {
    pub url: String,
    /// Branch to check out; "main" when unset.
    pub branch: Option<String>,
    /// Remote name the publisher recorded; informational only.
    pub remote: Option<String>,
}

impl GitRef {
    /// Branch to check out, defaulting to "main".
    pub fn branch_or_default(&self) -> &str {
        self.branch.as_deref().unwrap_or("main")
    }
}

/// A tool or framework the template is built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: Option<String>,
    pub role: Option<String>,
}

/// A prerequisite for using the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Where template content is stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub gcs_path: Option<String>,
    pub size_bytes: Option<u64>,
    pub last_sync: Option<DateTime<Utc>>,
    pub compression_enabled: Option<bool>,
    pub max_file_size_mb: Option<u32>,
}

/// A live deployment of the template, if one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub last_deployed: Option<DateTime<Utc>>,
}

/// A quick-action suggestion shown alongside the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pill {
    pub label: String,
    pub prompt: String,
    pub icon: Option<String>,
}

/// Build a minimal published record for tests.
#[cfg(test)]
pub(crate) fn sample_record(id: &str, title: &str, domain: &str) -> TemplateRecord {
    TemplateRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        slug: id.to_string(),
        domain: domain.to_string(),
        creator_id: "user-1".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        is_published: true,
        published_at: None,
        features: vec!["Feature A".to_string()],
        requirements: Vec::new(),
        tools: Vec::new(),
        icon: None,
        card_image: None,
        hero_image: None,
        git: None,
        storage: None,
        deployment: None,
        getting_started_screen: false,
        getting_started_screen_index: None,
        pills: Vec::new(),
    }
}
