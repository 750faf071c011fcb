//! Boundary to an external generative summarization service.
//!
//! The service itself is not implemented here. Callers inject a
//! [`GenerativeSummarizer`]; the orchestrator treats every error it returns
//! the same way, as a signal to fall back to the deterministic path.

pub mod parse;

use std::time::Duration;

use thiserror::Error;

use crate::types::identifiers::ApiCredential;
pub use parse::{parse_generative_response, GeneratedSummary};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerativeError {
    #[error("No credential supplied for the generative service")]
    MissingCredential,
    #[error("Generative service unavailable: {0}")]
    Unavailable(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Generative service timed out after {0:?}")]
    Timeout(Duration),
    #[error("Malformed generative response: {0}")]
    Malformed(String),
    #[error("Generative summarizer panicked: {0}")]
    Panicked(String),
}

/// What is sent to the service: the (already truncated) text and the target percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerativeRequest<'a> {
    pub text: &'a str,
    pub percent: u32,
}

impl GenerativeRequest<'_> {
    /// Instruction prompt asking for the `BULLET_POINTS:` / `PARAGRAPH:` layout
    /// that [`parse_generative_response`] understands.
    pub fn prompt(&self) -> String {
        format!(
            "Summarize the following document at roughly {percent}% of its length.\n\
             \n\
             Reply in exactly this layout:\n\
             \n\
             BULLET_POINTS:\n\
             - first key point\n\
             - second key point\n\
             (at least 10 bullet points, each a complete sentence stating one distinct idea)\n\
             \n\
             PARAGRAPH:\n\
             (4 to 6 sentences of connected prose covering background, method, findings and conclusions)\n\
             \n\
             Ignore author details, copyright notices, tables of contents and other metadata.\n\
             \n\
             DOCUMENT:\n\
             {text}",
            percent = self.percent,
            text = self.text,
        )
    }
}

pub trait GenerativeSummarizer {
    /// Return the service's raw structured reply.
    ///
    /// Implementations own their timeout and report it as [`GenerativeError::Timeout`].
    /// A panic is caught by the orchestrator and treated like any other failure.
    fn generate(
        &self,
        request: &GenerativeRequest<'_>,
        credential: &ApiCredential,
    ) -> Result<String, GenerativeError>;
}

impl<G: GenerativeSummarizer + ?Sized> GenerativeSummarizer for &G {
    fn generate(
        &self,
        request: &GenerativeRequest<'_>,
        credential: &ApiCredential,
    ) -> Result<String, GenerativeError> {
        (**self).generate(request, credential)
    }
}

impl<G: GenerativeSummarizer + ?Sized> GenerativeSummarizer for Box<G> {
    fn generate(
        &self,
        request: &GenerativeRequest<'_>,
        credential: &ApiCredential,
    ) -> Result<String, GenerativeError> {
        (**self).generate(request, credential)
    }
}

/// No service configured. Every call fails, so summaries are always deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGenerator;

impl GenerativeSummarizer for UnconfiguredGenerator {
    fn generate(
        &self,
        _request: &GenerativeRequest<'_>,
        _credential: &ApiCredential,
    ) -> Result<String, GenerativeError> {
        Err(GenerativeError::Unavailable(
            "no generative backend configured".to_string(),
        ))
    }
}
