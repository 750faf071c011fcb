use std::num::IntErrorKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SummarizerConfig;
use crate::types::identifiers::SourceVersion;

/// Target summary length as a whole percent of the surviving sentences.
///
/// Always within the configured bounds; construction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryRatio(u32);

impl SummaryRatio {
    /// Parse a user-supplied percent with the `v0` bounds.
    /// `"150"` clamps to 50, `"abc"` and `"2.5"` fall back to 20.
    pub fn from_percent_input(input: Option<&str>) -> Self {
        Self::from_percent_input_with(input, &SummarizerConfig::v0())
    }

    pub fn from_percent_input_with(input: Option<&str>, config: &SummarizerConfig) -> Self {
        match input.and_then(parse_percent) {
            Some(percent) => Self::clamped(percent, config),
            None => SummaryRatio(config.default_percent),
        }
    }

    pub fn from_percent(percent: i64, config: &SummarizerConfig) -> Self {
        Self::clamped(percent, config)
    }

    fn clamped(percent: i64, config: &SummarizerConfig) -> Self {
        let clamped = percent
            .max(config.min_percent as i64)
            .min(config.max_percent as i64);
        SummaryRatio(clamped as u32)
    }

    pub fn percent(&self) -> u32 {
        self.0
    }

    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Whole-number percent. Out-of-range integers saturate so they still clamp.
fn parse_percent(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(percent) => Some(percent),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl Default for SummaryRatio {
    fn default() -> Self {
        SummaryRatio(SummarizerConfig::v0().default_percent)
    }
}

/// Which strategy produced a summary. Surfaced to the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    Generative,
    Deterministic,
}

impl SummaryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::Generative => "generative",
            SummaryMethod::Deterministic => "deterministic",
        }
    }
}

/// Bullets in document order plus the paragraph built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub bullet_points: Vec<String>,
    pub paragraph: String,
    pub sentence_count: usize,
    pub method: SummaryMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    /// Aggregate TF-IDF weight, rounded to 4 decimal places.
    pub score: f64,
}

/// The final result of a summarization request.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub bullet_points: Vec<String>,
    pub paragraph: String,
    pub keywords: Vec<Keyword>,

    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub sentence_count: usize,

    pub method: SummaryMethod,
    /// Why the generative path was not used, when it was not.
    pub fallback_reason: Option<String>,

    pub source_version: SourceVersion,
    pub generated_at: DateTime<Utc>, // informational only
}

/// Internal: a surviving sentence that has been scored but not yet selected.
/// Borrows the text from the cleaned document to avoid cloning before selection.
#[derive(Debug, Clone)]
pub struct ScoredSentence<'a> {
    /// Position among the surviving sentences.
    pub position: usize,
    pub text: &'a str,
    pub score: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Text is too short to summarize ({words} words, minimum {minimum})")]
    InputTooShort { words: usize, minimum: usize },
}
