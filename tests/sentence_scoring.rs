use digest_core::selection::ranking::{EDGE_BOOST, NEAR_EDGE_BOOST};
use digest_core::selection::{
    normalized_position, positional_boost, PositionalTfIdfScorer, Scorer, TermWeights,
};

fn table(entries: &[(&str, f64)]) -> TermWeights {
    entries.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

#[test]
fn boost_tiers_match_their_thresholds() {
    assert_eq!(positional_boost(0.0), 1.4);
    assert_eq!(positional_boost(1.0), 1.4);
    assert_eq!(positional_boost(0.15), 1.15);
    assert_eq!(positional_boost(0.85), 1.15);
    assert_eq!(positional_boost(0.5), 1.0);
    // Tiers never compound
    assert_eq!(positional_boost(0.05), EDGE_BOOST);
    assert_eq!(positional_boost(0.10), EDGE_BOOST);
    assert_eq!(positional_boost(0.20), NEAR_EDGE_BOOST);
    assert_eq!(positional_boost(0.80), NEAR_EDGE_BOOST);
    assert_eq!(positional_boost(0.21), 1.0);
}

#[test]
fn first_and_last_sentences_always_get_the_edge_boost() {
    for total in 1..=60 {
        assert_eq!(positional_boost(normalized_position(0, total)), EDGE_BOOST);
        assert_eq!(positional_boost(normalized_position(total - 1, total)), EDGE_BOOST);
    }
}

#[test]
fn middle_sentence_is_unboosted() {
    for total in [3, 5, 11, 21, 101] {
        let middle = total / 2;
        assert_eq!(normalized_position(middle, total), 0.5);
        assert_eq!(positional_boost(normalized_position(middle, total)), 1.0);
    }
}

#[test]
fn single_sentence_position_is_zero() {
    assert_eq!(normalized_position(0, 1), 0.0);
}

#[test]
fn base_score_is_mean_weight() {
    let scorer = PositionalTfIdfScorer;
    let weights = table(&[("glacier", 0.3), ("moraine", 0.6), ("fjord", 0.9)]);
    assert!((scorer.base_score(&weights) - 0.6).abs() < 1e-12);
}

#[test]
fn empty_table_scores_zero_everywhere() {
    let scorer = PositionalTfIdfScorer;
    let empty = TermWeights::new();
    for position in 0..10 {
        assert_eq!(scorer.score(&empty, position, 10), 0.0);
    }
}

#[test]
fn score_applies_boost_to_base() {
    let scorer = PositionalTfIdfScorer;
    let weights = table(&[("glacier", 0.5), ("moraine", 1.5)]);

    // 21 sentences: positions 0, 3 and 10 sit at r = 0.0, 0.15 and 0.5
    assert!((scorer.score(&weights, 0, 21) - 1.0 * 1.4).abs() < 1e-12);
    assert!((scorer.score(&weights, 3, 21) - 1.0 * 1.15).abs() < 1e-12);
    assert!((scorer.score(&weights, 10, 21) - 1.0).abs() < 1e-12);
}
