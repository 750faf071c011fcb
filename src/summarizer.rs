//! Request entry point and the generative-then-deterministic fallback policy.
//!
//! One attempt per strategy, no retries, no state carried between calls.
//! The credential travels inside the request and is handed to the generator
//! directly; it is never written to shared or process-wide state.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::config::SummarizerConfig;
use crate::document::{word_count, Document};
use crate::generative::{
    parse_generative_response, GenerativeError, GenerativeRequest, GenerativeSummarizer,
    UnconfiguredGenerator,
};
use crate::keywords::extract_keywords;
use crate::selection::{PositionalTfIdfScorer, SentenceSelector};
use crate::types::identifiers::ApiCredential;
use crate::types::summary::{Summary, SummaryError, SummaryMethod, SummaryRatio, SummaryReport};

/// Everything one caller supplies for one summarization.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub text: String,
    pub ratio: SummaryRatio,
    pub credential: Option<ApiCredential>,
    /// Falls back to the configured keyword count.
    pub keyword_count: Option<usize>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ratio: SummaryRatio::default(),
            credential: None,
            keyword_count: None,
        }
    }

    pub fn with_ratio(mut self, ratio: SummaryRatio) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_credential(mut self, credential: Option<ApiCredential>) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_keyword_count(mut self, keyword_count: usize) -> Self {
        self.keyword_count = Some(keyword_count);
        self
    }
}

/// Result of the fallback policy: the summary plus why generation was skipped, if it was.
#[derive(Debug, Clone)]
pub struct Orchestrated {
    pub summary: Summary,
    pub fallback: Option<GenerativeError>,
}

/// Outcome of the single generative attempt.
enum Attempt {
    Generated(Summary),
    Failed(GenerativeError),
}

pub struct Summarizer<G> {
    generator: G,
    selector: SentenceSelector<PositionalTfIdfScorer>,
    config: SummarizerConfig,
}

impl Default for Summarizer<UnconfiguredGenerator> {
    fn default() -> Self {
        Self::new(UnconfiguredGenerator, SummarizerConfig::v0())
    }
}

impl<G> Summarizer<G>
where
    G: GenerativeSummarizer,
{
    pub fn new(generator: G, config: SummarizerConfig) -> Self {
        let selector = SentenceSelector::new(PositionalTfIdfScorer, &config);
        Self {
            generator,
            selector,
            config,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Validate the request, summarize, and extract keywords.
    ///
    /// Only input validation can fail. Generative failures are recovered and
    /// reported through `SummaryReport::fallback_reason`.
    #[instrument(skip_all, fields(percent = request.ratio.percent()))]
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryReport, SummaryError> {
        let document = Document::ingest(request.text.trim());
        if document.word_count < self.config.min_input_words {
            return Err(SummaryError::InputTooShort {
                words: document.word_count,
                minimum: self.config.min_input_words,
            });
        }

        let Orchestrated { summary, fallback } =
            self.orchestrate(&document, request.ratio, request.credential.as_ref());

        let top_n = request.keyword_count.unwrap_or(self.config.keyword_count);
        let keywords = extract_keywords(&document.content, top_n);

        Ok(SummaryReport {
            summary_word_count: word_count(&summary.paragraph),
            original_word_count: document.word_count,
            sentence_count: summary.sentence_count,
            bullet_points: summary.bullet_points,
            paragraph: summary.paragraph,
            keywords,
            method: summary.method,
            fallback_reason: fallback.map(|e| e.to_string()),
            source_version: document.version,
            generated_at: Utc::now(),
        })
    }

    /// Try the generative path once; on any failure run the deterministic pipeline.
    pub fn orchestrate(
        &self,
        document: &Document,
        ratio: SummaryRatio,
        credential: Option<&ApiCredential>,
    ) -> Orchestrated {
        match self.try_generative(document, ratio, credential) {
            Attempt::Generated(summary) => {
                debug!(bullets = summary.sentence_count, "generative summary accepted");
                Orchestrated {
                    summary,
                    fallback: None,
                }
            }
            Attempt::Failed(error) => {
                warn!(%error, "generative summarizer failed, using deterministic fallback");
                Orchestrated {
                    summary: self.selector.select(document, ratio),
                    fallback: Some(error),
                }
            }
        }
    }

    fn try_generative(
        &self,
        document: &Document,
        ratio: SummaryRatio,
        credential: Option<&ApiCredential>,
    ) -> Attempt {
        let Some(credential) = credential else {
            return Attempt::Failed(GenerativeError::MissingCredential);
        };

        let text = document.truncated_words(self.config.generative_word_limit);
        let request = GenerativeRequest {
            text: &text,
            percent: ratio.percent(),
        };

        let parsed = panic::catch_unwind(AssertUnwindSafe(|| {
            self.generator.generate(&request, credential)
        }))
        .unwrap_or_else(|payload| Err(GenerativeError::Panicked(panic_message(payload.as_ref()))))
        .and_then(|raw| parse_generative_response(&raw));

        match parsed {
            Ok(generated) => Attempt::Generated(Summary {
                sentence_count: generated.bullet_points.len(),
                bullet_points: generated.bullet_points,
                paragraph: generated.paragraph,
                method: SummaryMethod::Generative,
            }),
            Err(error) => Attempt::Failed(error),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
