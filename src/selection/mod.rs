pub mod filters;
pub mod ranking;
pub mod budgeting;
pub mod weighting;

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::config::SummarizerConfig;
use crate::document::{clean_text, split_sentences, Document};
use crate::types::summary::{ScoredSentence, Summary, SummaryMethod, SummaryRatio};
pub use filters::{classify, is_junk, JunkRule};
pub use ranking::{normalized_position, positional_boost, PositionalTfIdfScorer, Scorer};
pub use budgeting::{apply_budget, target_count, BudgetResult};
pub use weighting::{compute_tfidf, smoothed_idf, TermWeights};

/// Segment cleaned text and drop junk sentences, preserving document order.
pub fn surviving_sentences(cleaned: &str) -> Vec<&str> {
	let all = split_sentences(cleaned);
	let total = all.len();

	let surviving: Vec<&str> = all
		.into_iter()
		.filter(|sentence| match classify(sentence) {
			Some(rule) => {
				trace!(?rule, sentence, "dropping junk sentence");
				false
			}
			None => true,
		})
		.collect();

	debug!(total, surviving = surviving.len(), "junk filter applied");
	surviving
}

/// Deterministic extractive summarizer: segment, filter, weight, score, select.
pub struct SentenceSelector<S> {
	scorer: S,
	min_bullets: usize,
	max_bullets: usize,
	fallback_chars: usize,
}

impl Default for SentenceSelector<PositionalTfIdfScorer> {
	fn default() -> Self {
		Self::new(PositionalTfIdfScorer, &SummarizerConfig::v0())
	}
}

impl<S> SentenceSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S, config: &SummarizerConfig) -> Self {
		Self {
			scorer,
			min_bullets: config.min_bullets,
			max_bullets: config.max_bullets,
			fallback_chars: config.fallback_chars,
		}
	}

	pub fn summarize_text(&self, text: &str, ratio: SummaryRatio) -> Summary {
		self.select(&Document::ingest(text), ratio)
	}

	pub fn select(&self, document: &Document, ratio: SummaryRatio) -> Summary {
		let sentences = surviving_sentences(&document.cleaned);

		// Never return nothing: fall back to the head of the cleaned text
		if sentences.is_empty() {
			debug!("no sentences survived filtering; returning truncated text");
			return Summary {
				bullet_points: Vec::new(),
				paragraph: document.cleaned_prefix(self.fallback_chars).to_string(),
				sentence_count: 0,
				method: SummaryMethod::Deterministic,
			};
		}

		// 1. Weighting Phase
		let weights = compute_tfidf(&sentences);

		// 2. Scoring Phase
		let total = sentences.len();
		let mut scored: Vec<ScoredSentence> = sentences
			.iter()
			.zip(&weights)
			.enumerate()
			.map(|(position, (text, weights))| ScoredSentence {
				position,
				text: *text,
				score: self.scorer.score(weights, position, total),
			})
			.collect();

		// 3. Ordering Phase
		// Sort globally by (score desc, position asc)
		scored.sort_by(|a, b| {
			// Descending score
			let score_cmp = b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal);
			if score_cmp != Ordering::Equal {
				score_cmp
			} else {
				// Earlier sentence wins
				a.position.cmp(&b.position)
			}
		});

		debug_assert!(
			scored.windows(2).all(|w| {
				let a = &w[0];
				let b = &w[1];
				a.score > b.score || (a.score == b.score && a.position <= b.position)
			})
		);

		// 4. Budgeting Phase
		let count = target_count(total, ratio.fraction(), self.min_bullets, self.max_bullets);
		let BudgetResult {
			selected,
			sentences_excluded_by_budget,
		} = apply_budget(scored, count);

		debug!(
			surviving = total,
			selected = selected.len(),
			excluded = sentences_excluded_by_budget,
			"deterministic selection complete"
		);

		let bullet_points: Vec<String> = selected.iter().map(|s| s.text.to_string()).collect();
		let paragraph = clean_text(&bullet_points.join(" "));

		Summary {
			sentence_count: bullet_points.len(),
			bullet_points,
			paragraph,
			method: SummaryMethod::Deterministic,
		}
	}
}
