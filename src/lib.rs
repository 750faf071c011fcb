//! Deterministic extractive summarization and keyword extraction.
//!
//! `digest-core` segments a document into sentences, drops junk (headers,
//! references, table fragments, boilerplate), weights terms with TF-IDF,
//! scores sentences with a positional prior, and selects a bounded subset in
//! document order. The same engine is the fallback behind an injectable
//! generative summarizer; every report says which path produced it.
//!
//! Identical inputs always produce identical summaries and keywords.

pub mod config;
pub mod document;
pub mod generative;
pub mod keywords;
pub mod nlp;
pub mod selection;
pub mod summarizer;
pub mod types;

pub use config::{ConfigError, SummarizerConfig};
pub use keywords::extract_keywords;
pub use summarizer::{SummarizeRequest, Summarizer};
