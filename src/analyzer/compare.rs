use crate::{
    analyzer::token::FrequencyMap,
    error::{Error, Result},
    utils::round::round_ratio,
};

/// Decimal places kept by [`similarity_score`]
pub const SIMILARITY_PLACES: u32 = 2;

/// DIFF/ALL similarity of two documents' word counts
///
/// DIFF sums `|count_a - count_b|` over the union of both vocabularies (a word
/// missing on one side contributes its other count). ALL is the total token
/// count of both documents. The score is `1 - DIFF / ALL`, rounded to two
/// decimal places with exact halves going to the even digit: 1.0 for
/// identical distributions, 0.0 for disjoint ones.
///
/// # Arguments
/// * `a` - word counts of the first document
/// * `b` - word counts of the second document
///
/// # Returns
/// * `f64` - similarity in [0, 1]
///
/// # Errors
/// * `EmptyInput` when both maps are empty
pub fn similarity_score(a: &FrequencyMap, b: &FrequencyMap) -> Result<f64> {
    let all = a.total_count() + b.total_count();
    if all == 0 {
        return Err(Error::EmptyInput("both documents have zero words"));
    }
    let diff = count_difference(a, b);
    debug_assert!(diff <= all);
    Ok(round_ratio(all - diff, all, SIMILARITY_PLACES))
}

/// Total absolute count difference over the union of both vocabularies
fn count_difference(a: &FrequencyMap, b: &FrequencyMap) -> u64 {
    let shared_and_a: u64 = a
        .iter()
        .map(|(word, count)| (count as i64 - b.count(word) as i64).unsigned_abs())
        .sum();
    let only_b: u64 = b
        .iter()
        .filter(|&(word, _)| !a.contains(word))
        .map(|(_, count)| count as u64)
        .sum();
    shared_and_a + only_b
}
