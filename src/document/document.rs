use serde::{Deserialize, Serialize};

use crate::types::identifiers::SourceVersion;

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The text being summarized, plus the forms derived from it.
///
/// Derived fields are computed once at ingestion and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: SourceVersion,
    pub content: String,
    pub cleaned: String,
    pub word_count: usize,
}

impl Document {
    /// Ingest raw text into a Document.
    pub fn ingest(content: impl Into<String>) -> Self {
        let content = content.into();

        // Version computed on the raw text, before cleaning
        let version = SourceVersion::from_content(content.as_bytes());
        let cleaned = clean_text(&content);
        let word_count = word_count(&content);

        Document {
            version,
            content,
            cleaned,
            word_count,
        }
    }

    /// First `limit` characters of the cleaned text.
    pub fn cleaned_prefix(&self, limit: usize) -> &str {
        match self.cleaned.char_indices().nth(limit) {
            Some((idx, _)) => &self.cleaned[..idx],
            None => &self.cleaned,
        }
    }

    /// The raw text cut to at most `limit` words, rejoined with single spaces.
    pub fn truncated_words(&self, limit: usize) -> String {
        if self.word_count <= limit {
            return self.content.clone();
        }
        self.content
            .split_whitespace()
            .take(limit)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
