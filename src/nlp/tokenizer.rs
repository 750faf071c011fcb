use crate::nlp::stopwords::Stopwords;

/// Minimum token length, in characters, that carries weight.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Lower-cased alphabetic content words of a sentence, in order of appearance.
///
/// Surrounding punctuation is stripped and contractions split at the apostrophe,
/// so `"Cells,"` yields `cells` and `don't` yields `don`. Hyphenated and
/// alphanumeric tokens are dropped. Stopwords and tokens shorter than
/// [`MIN_TOKEN_CHARS`] are removed.
pub fn tokenize_words(sentence: &str, stopwords: &Stopwords) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    lowered
        .split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .flat_map(|word| word.split(['\'', '\u{2019}']))
        .filter(|word| is_alphabetic_word(word))
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|word| !stopwords.contains(word))
        .map(str::to_string)
        .collect()
}

/// Non-empty and made only of alphabetic characters.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_short_words() {
        let stopwords = Stopwords::from_list(&["the"]);
        let tokens = tokenize_words("The Glacier, at 3km, is (slowly) retreating.", &stopwords);
        assert_eq!(tokens, vec!["glacier", "slowly", "retreating"]);
    }

    #[test]
    fn drops_hyphenated_and_numeric_tokens() {
        let stopwords = Stopwords::from_list(&[]);
        let tokens = tokenize_words("well-known 2024 results", &stopwords);
        assert_eq!(tokens, vec!["results"]);
    }
}
