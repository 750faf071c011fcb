use crate::types::summary::ScoredSentence;

pub struct BudgetResult<'a> {
    /// Selected sentences, back in document order.
    pub selected: Vec<ScoredSentence<'a>>,
    pub sentences_excluded_by_budget: usize,
}

/// Number of bullets to emit for `surviving` sentences at `ratio`.
///
/// `round(surviving * ratio)` (ties to even) clamped to `[min_bullets, max_bullets]`,
/// and never more than the sentences available. The cap holds for any document length.
pub fn target_count(surviving: usize, ratio: f64, min_bullets: usize, max_bullets: usize) -> usize {
    let wanted = (surviving as f64 * ratio).round_ties_even() as usize;
    wanted.max(min_bullets).min(max_bullets).min(surviving)
}

/// Take the first `count` of `ranked` (already sorted by score desc, position asc)
/// and restore document order.
pub fn apply_budget<'a>(ranked: Vec<ScoredSentence<'a>>, count: usize) -> BudgetResult<'a> {
    let total = ranked.len();
    let mut selected: Vec<ScoredSentence<'a>> = ranked.into_iter().take(count).collect();
    selected.sort_by_key(|s| s.position);

    BudgetResult {
        sentences_excluded_by_budget: total - selected.len(),
        selected,
    }
}
