use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keywords::DEFAULT_KEYWORD_COUNT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Percent bounds out of order: min {min} > max {max}")]
    PercentBounds { min: u32, max: u32 },
    #[error("Default percent {0} lies outside the configured bounds")]
    DefaultPercentOutOfBounds(u32),
    #[error("Bullet bounds out of order: min {min} > max {max}")]
    BulletBounds { min: usize, max: usize },
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Percent used when the caller sends no ratio or an unparseable one.
    pub default_percent: u32,
    pub min_percent: u32,
    pub max_percent: u32,

    /// Bullet count bounds for the deterministic path. Independent of document length.
    pub min_bullets: usize,
    pub max_bullets: usize,

    /// Characters of cleaned text returned when nothing survives the junk filter.
    pub fallback_chars: usize,

    pub keyword_count: usize,

    /// Requests below this word count are rejected before any summarization.
    pub min_input_words: usize,

    /// Text sent to the generative service is cut to this many words.
    pub generative_word_limit: usize,
}

impl SummarizerConfig {
    pub fn v0() -> Self {
        Self {
            default_percent: 20,
            min_percent: 5,
            max_percent: 50,
            min_bullets: 5,
            max_bullets: 10,
            fallback_chars: 500,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            min_input_words: 50,
            generative_word_limit: 12_000,
        }
    }

    /// Load a configuration from JSON. Missing fields take their `v0` value.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SummarizerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_percent > self.max_percent {
            return Err(ConfigError::PercentBounds {
                min: self.min_percent,
                max: self.max_percent,
            });
        }
        if !(self.min_percent..=self.max_percent).contains(&self.default_percent) {
            return Err(ConfigError::DefaultPercentOutOfBounds(self.default_percent));
        }
        if self.min_bullets > self.max_bullets {
            return Err(ConfigError::BulletBounds {
                min: self.min_bullets,
                max: self.max_bullets,
            });
        }
        Ok(())
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
