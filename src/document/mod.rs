pub mod document;
pub mod segmenter;

pub use crate::types::identifiers::SourceVersion;
pub use document::{clean_text, word_count, Document};
pub use segmenter::split_sentences;
