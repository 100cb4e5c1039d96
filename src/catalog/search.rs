//! Substring search with additive relevance scoring.

use crate::catalog::record::TemplateRecord;

/// Relevance weight for a title match.
const TITLE_WEIGHT: u32 = 10;
/// Relevance weight for a description match.
const DESCRIPTION_WEIGHT: u32 = 5;
/// Relevance weight for a feature-text match.
const FEATURES_WEIGHT: u32 = 3;
/// Relevance weight for a domain match.
const DOMAIN_WEIGHT: u32 = 2;

/// Score candidates against a query.
///
/// A candidate is included only when the lowercased query is a literal
/// substring of its combined haystack (title, description, joined features,
/// domain). Matches in multiple fields accumulate all applicable weights.
/// Results are sorted by score descending; ties retain the order in which
/// candidates were evaluated.
pub fn rank(candidates: Vec<TemplateRecord>, query: &str) -> Vec<(u32, TemplateRecord)> {
    let query = query.to_lowercase();

    let mut matches: Vec<(u32, TemplateRecord)> = candidates
        .into_iter()
        .filter(|record| record.search_text().contains(&query))
        .map(|record| (score(&record, &query), record))
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches
}

fn score(record: &TemplateRecord, query: &str) -> u32 {
    let mut score = 0;
    if record.title.to_lowercase().contains(query) {
        score += TITLE_WEIGHT;
    }
    if record.description.to_lowercase().contains(query) {
        score += DESCRIPTION_WEIGHT;
    }
    if record.features.join(" ").to_lowercase().contains(query) {
        score += FEATURES_WEIGHT;
    }
    if record.domain.to_lowercase().contains(query) {
        score += DOMAIN_WEIGHT;
    }
    score
}
