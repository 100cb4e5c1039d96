//! Fallback dataset embedded at compile time.
//!
//! When the remote metadata service is unreachable or returns nothing, the
//! resolver falls back to this fixed set of example records. One JSON file
//! per record lives under `templates/` and is embedded into the binary.

use crate::catalog::record::TemplateRecord;
use include_dir::{include_dir, Dir};
use std::sync::OnceLock;

/// Embedded fallback record files.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

static RECORDS: OnceLock<Vec<TemplateRecord>> = OnceLock::new();

/// All fallback records, parsed once, in stable (filename) order.
///
/// A malformed embedded file is a packaging defect; it is skipped with a
/// warning rather than poisoning the whole dataset.
pub fn all() -> &'static [TemplateRecord] {
    RECORDS.get_or_init(|| {
        let mut files: Vec<_> = TEMPLATES_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|e| e == "json"))
            .collect();
        files.sort_by_key(|f| f.path().to_path_buf());

        let mut records = Vec::new();
        for file in files {
            let Some(content) = file.contents_utf8() else {
                tracing::warn!("Fallback file {:?} is not valid UTF-8", file.path());
                continue;
            };
            match serde_json::from_str::<TemplateRecord>(content) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed fallback file {:?}: {}", file.path(), e);
                }
            }
        }
        records
    })
}

/// Look up a fallback record by id.
pub fn get(id: &str) -> Option<&'static TemplateRecord> {
    all().iter().find(|r| r.id == id)
}

/// Substring search over the fallback dataset.
///
/// Matches the same haystack the search engine scores against; scoring
/// itself happens downstream.
pub fn search(query: &str) -> Vec<&'static TemplateRecord> {
    let query = query.to_lowercase();
    all()
        .iter()
        .filter(|r| r.search_text().contains(&query))
        .collect()
}
