//! Junk sentence detection.
//!
//! Extracted document text carries running headers, reference lists, table
//! fragments and boilerplate. A sentence is junk when any single rule matches;
//! rules are disjunctive, so evaluation order never changes the verdict.

use std::sync::LazyLock;

use regex::Regex;

use crate::nlp::is_alphabetic_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JunkRule {
    Email,
    Ellipsis,
    Url,
    Copyright,
    PageNumber,
    NonAsciiRun,
    TableGlyphs,
    TooShort,
    OverlongWord,
    AcademicMarker,
    SectionHeader,
    TooFewWords,
    MostlyCaps,
    MostlyNumeric,
}

/// Sentences of this many characters or fewer are junk.
pub const MAX_SHORT_CHARS: usize = 20;
/// Sentences need at least this many purely alphabetic words.
pub const MIN_ALPHA_WORDS: usize = 7;

static PATTERN_RULES: LazyLock<Vec<(JunkRule, Regex)>> = LazyLock::new(|| {
    [
        (JunkRule::Email, r"@"),
        (JunkRule::Ellipsis, r"\.{3,}"),
        (JunkRule::Url, r"(?i)https?://"),
        (JunkRule::Copyright, r"(?i)©|all rights reserved"),
        (JunkRule::PageNumber, r"^\s*\d+\s*$"),
        (JunkRule::NonAsciiRun, r"[^\x00-\x7F]{3,}"),
        (JunkRule::TableGlyphs, r"\d{2,}\s*[●■□▪•]{2,}"),
        (JunkRule::OverlongWord, r"\w{25,}"),
        (JunkRule::AcademicMarker, r"(?i)fig\.|table\s*\d|vol\.|pp\.|et al\."),
        (
            JunkRule::SectionHeader,
            r"(?i)^\s*(abstract|references|bibliography|acknowledgements?|appendix)\s*$",
        ),
    ]
    .into_iter()
    .map(|(rule, pattern)| (rule, Regex::new(pattern).expect("valid junk pattern")))
    .collect()
});

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.,]?\d*%?$").expect("valid numeric token regex"));

/// `true` when the sentence is noise rather than content.
pub fn is_junk(sentence: &str) -> bool {
    classify(sentence).is_some()
}

/// The first rule that marks `sentence` as junk, if any.
pub fn classify(sentence: &str) -> Option<JunkRule> {
    let s = sentence.trim();

    if let Some((rule, _)) = PATTERN_RULES.iter().find(|(_, re)| re.is_match(s)) {
        return Some(*rule);
    }

    // Raw length, independent of the word-based rules below
    if s.chars().count() <= MAX_SHORT_CHARS {
        return Some(JunkRule::TooShort);
    }

    let tokens: Vec<&str> = s.split_whitespace().collect();
    let words: Vec<&str> = tokens.iter().copied().filter(|w| is_alphabetic_word(w)).collect();

    if words.len() < MIN_ALPHA_WORDS {
        return Some(JunkRule::TooFewWords);
    }

    let caps = words
        .iter()
        .filter(|w| w.chars().count() > 2 && is_all_caps(w))
        .count();
    if caps as f64 > words.len() as f64 * 0.5 {
        return Some(JunkRule::MostlyCaps);
    }

    let numeric = tokens.iter().filter(|t| NUMERIC_TOKEN.is_match(t)).count();
    if numeric as f64 > tokens.len() as f64 * 0.4 {
        return Some(JunkRule::MostlyNumeric);
    }

    None
}

/// Has a cased character and no lower-case one.
fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
