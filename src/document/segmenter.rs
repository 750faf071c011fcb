//! Sentence boundary detection over cleaned text.
//!
//! A boundary is a run of `.`, `!` or `?`, optionally followed by closing
//! quotes or brackets, then whitespace or end of text. Boundaries are
//! suppressed after known abbreviations, single-letter initials, and before
//! a lower-case continuation.

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];
const OPENERS: [char; 6] = ['"', '\'', '(', '[', '\u{201C}', '\u{2018}'];

/// Abbreviations that never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "al",
    "approx", "dept", "univ", "inc", "ltd", "co", "corp", "est", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "ph.d",
];

/// Abbreviations that only bind to a following number (`No. 5`, `pp. 12`).
const NUMERIC_ABBREVIATIONS: &[&str] = &["no", "nos", "p", "pp", "vol", "fig", "figs", "eq", "eqs"];

/// Split cleaned text into ordered, trimmed, non-empty sentences.
///
/// Sentences borrow from `text`; segmentation is deterministic and has no side effects.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !TERMINATORS.contains(&ch) {
            continue;
        }

        let mut run_len = 1;
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if TERMINATORS.contains(&next) {
                run_len += 1;
            } else if !CLOSERS.contains(&next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        let rest = &text[end..];
        let next_word = match rest.chars().next() {
            None => None,
            Some(c) if c.is_whitespace() => Some(rest.trim_start()),
            // Not followed by whitespace: decimal point, URL, inner abbreviation period
            Some(_) => continue,
        };

        if let Some(next_word) = next_word {
            let single_period = ch == '.' && run_len == 1;
            if !is_boundary(&text[start..idx], next_word, single_period) {
                continue;
            }
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn is_boundary(before: &str, next_word: &str, single_period: bool) -> bool {
    let Some(next_char) = next_word.chars().next() else {
        return true;
    };

    if next_char.is_lowercase() {
        return false;
    }

    if !single_period {
        return true;
    }

    let token = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| OPENERS.contains(&c))
        .to_lowercase();

    if token.is_empty() {
        return true;
    }

    // Initials: "J. Smith"
    let mut token_chars = token.chars();
    if let (Some(first), None) = (token_chars.next(), token_chars.next()) {
        if first.is_alphabetic() && !NUMERIC_ABBREVIATIONS.contains(&token.as_str()) {
            return false;
        }
    }

    if ABBREVIATIONS.contains(&token.as_str()) {
        return false;
    }

    if NUMERIC_ABBREVIATIONS.contains(&token.as_str()) && next_char.is_ascii_digit() {
        return false;
    }

    true
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
