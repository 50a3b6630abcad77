use std::cmp::Ordering;

/// Sort `(word, count)` pairs by descending count
/// Equal counts fall back to ascending word order, so the result does not
/// depend on the order the pairs arrived in.
///
/// # Arguments
/// * `pairs` - word/count pairs, words unique
#[inline]
pub fn sort_by_count_desc<S, C>(pairs: &mut [(S, C)])
where
    S: AsRef<str>,
    C: Ord,
{
    pairs.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_ref().cmp(b.0.as_ref())));
}

/// Sort `(word, score)` pairs by ascending score
/// Equal scores fall back to ascending word order.
/// Scores are compared with `total_cmp`, so a NaN can never break the order.
///
/// # Arguments
/// * `pairs` - word/score pairs, words unique
#[inline]
pub fn sort_by_score_asc<S>(pairs: &mut [(S, f64)])
where
    S: AsRef<str>,
{
    pairs.sort_unstable_by(|a, b| cmp_score_then_word(a.1, b.1, a.0.as_ref(), b.0.as_ref()));
}

#[inline(always)]
fn cmp_score_then_word(sa: f64, sb: f64, wa: &str, wb: &str) -> Ordering {
    sa.total_cmp(&sb).then_with(|| wa.cmp(wb))
}
