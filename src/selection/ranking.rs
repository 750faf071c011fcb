use crate::selection::weighting::TermWeights;

/// Multiplier for sentences in the first or last tenth of the document.
pub const EDGE_BOOST: f64 = 1.4;
/// Multiplier for sentences in the first or last fifth (outside the edge tenth).
pub const NEAR_EDGE_BOOST: f64 = 1.15;

pub trait Scorer {
    /// Score one surviving sentence from its weights and position.
    fn score(&self, weights: &TermWeights, position: usize, total: usize) -> f64;

    /// Mean weight over the sentence's distinct tokens; 0.0 for an empty table.
    fn base_score(&self, weights: &TermWeights) -> f64 {
        if weights.is_empty() {
            return 0.0;
        }
        let score = weights.values().sum::<f64>() / weights.len() as f64;
        debug_assert!(score >= 0.0, "base score {score} is negative");
        score
    }
}

/// v0: mean TF-IDF weight scaled by a position prior favouring openings and conclusions.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalTfIdfScorer;

impl Scorer for PositionalTfIdfScorer {
    fn score(&self, weights: &TermWeights, position: usize, total: usize) -> f64 {
        self.base_score(weights) * positional_boost(normalized_position(position, total))
    }
}

/// `position / max(total - 1, 1)`: 0.0 for the first sentence, 1.0 for the last.
pub fn normalized_position(position: usize, total: usize) -> f64 {
    position as f64 / total.saturating_sub(1).max(1) as f64
}

/// The boost tiers overlap but never compound: r = 0.05 gets 1.4, not 1.4 × 1.15.
pub fn positional_boost(r: f64) -> f64 {
    if r <= 0.10 || r >= 0.90 {
        EDGE_BOOST
    } else if r <= 0.20 || r >= 0.80 {
        NEAR_EDGE_BOOST
    } else {
        1.0
    }
}
