//! Document-wide keyword ranking from the sentence weight tables.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::document::clean_text;
use crate::selection::{compute_tfidf, surviving_sentences, TermWeights};
use crate::types::summary::Keyword;

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Top `top_n` keywords of `text`, highest aggregate weight first.
///
/// Runs the same cleaning, segmentation and junk filtering as the summarizer.
/// Returns fewer than `top_n` entries when the document has fewer distinct tokens.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<Keyword> {
    let cleaned = clean_text(text);
    let sentences = surviving_sentences(&cleaned);
    if sentences.is_empty() {
        return Vec::new();
    }
    aggregate_keywords(&compute_tfidf(&sentences), top_n)
}

/// Sum each token's weight over every table it appears in, rank, and truncate.
///
/// Ties are broken alphabetically. Scores are rounded to 4 decimal places
/// after ranking.
pub fn aggregate_keywords(tables: &[TermWeights], top_n: usize) -> Vec<Keyword> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for table in tables {
        for (term, weight) in table {
            *totals.entry(term.as_str()).or_insert(0.0) += weight;
        }
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    // BTreeMap order is alphabetical and sort_by is stable
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(term, score)| Keyword {
            term: term.to_string(),
            score: round4(score),
        })
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
