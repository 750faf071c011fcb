//! English stopword set, loaded once per process from the `stop-words` crate.
//!
//! The crate is built with its `nltk` lists only. The larger ISO list treats
//! content words such as "research" and "results" as stopwords.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

static ENGLISH: LazyLock<Stopwords> = LazyLock::new(Stopwords::load_english);

/// Lower-case stopword lookup. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: FxHashSet<String>,
}

impl Stopwords {
    /// The shared English set. Built on first use, never mutated.
    pub fn english() -> &'static Stopwords {
        &ENGLISH
    }

    /// Create a stopword set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// `word` is expected to be lower-case already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn load_english() -> Self {
        Self {
            words: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_string().to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_set_has_common_function_words() {
        let stopwords = Stopwords::english();
        assert!(!stopwords.is_empty());
        for word in ["the", "and", "of", "is", "which"] {
            assert!(stopwords.contains(word), "{word} should be a stopword");
        }
        assert!(!stopwords.contains("photosynthesis"));
    }

    #[test]
    fn english_set_keeps_academic_content_words() {
        let stopwords = Stopwords::english();
        assert!(stopwords.len() < 200, "expected the short NLTK list, got {}", stopwords.len());
        for word in ["research", "results", "information", "system", "problem", "work"] {
            assert!(!stopwords.contains(word), "{word} must not be a stopword");
        }
    }

    #[test]
    fn english_set_is_shared() {
        assert!(std::ptr::eq(Stopwords::english(), Stopwords::english()));
    }
}
