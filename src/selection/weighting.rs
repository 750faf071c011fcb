use std::collections::BTreeMap;

use crate::nlp::{tokenize_words, Stopwords};

/// Token → weight for one sentence. Tokens absent from the sentence are not stored.
pub type TermWeights = BTreeMap<String, f64>;

/// Smoothed inverse document frequency: `ln((N + 1) / (df + 1)) + 1`.
///
/// Strictly positive for any `df <= n`.
pub fn smoothed_idf(n: usize, df: usize) -> f64 {
    ((n as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
}

/// TF-IDF weight tables over the sentences of one document, one table per sentence.
///
/// `df` counts sentences within this set only. A sentence without qualifying
/// tokens yields an empty table; an empty input yields an empty vec.
pub fn compute_tfidf<S: AsRef<str>>(sentences: &[S]) -> Vec<TermWeights> {
    compute_tfidf_with(sentences, Stopwords::english())
}

pub fn compute_tfidf_with<S: AsRef<str>>(sentences: &[S], stopwords: &Stopwords) -> Vec<TermWeights> {
    let n = sentences.len();
    let tokenized: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| tokenize_words(s.as_ref(), stopwords))
        .collect();

    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &tokenized {
        let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for token in seen {
            *df.entry(token).or_insert(0) += 1;
        }
    }

    tokenized
        .iter()
        .map(|tokens| {
            let mut weights = TermWeights::new();
            if tokens.is_empty() {
                return weights;
            }

            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }

            let token_count = tokens.len() as f64;
            for (token, count) in counts {
                let tf = count as f64 / token_count;
                let idf = smoothed_idf(n, df.get(token).copied().unwrap_or(0));
                weights.insert(token.to_string(), tf * idf);
            }
            weights
        })
        .collect()
}
