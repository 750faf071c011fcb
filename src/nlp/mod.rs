//! Tokenization and stopword filtering shared by weighting and junk detection.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::Stopwords;
pub use tokenizer::{is_alphabetic_word, tokenize_words};
