use num::Integer;

/// Round the ratio `numerator / denominator` to `places` decimal places
///
/// Works on the exact integer ratio, so a value sitting exactly halfway
/// between two candidates goes to the even last digit (`0.625 -> 0.62`,
/// `0.635 -> 0.64`), the way decimal rounding of the exact float value does.
///
/// # Arguments
/// * `numerator` - ratio numerator
/// * `denominator` - ratio denominator, must be non-zero
/// * `places` - decimal places to keep
///
/// # Returns
/// * `f64` - nearest float to the rounded decimal
#[inline]
pub fn round_ratio(numerator: u64, denominator: u64, places: u32) -> f64 {
    debug_assert!(denominator != 0);
    let scale = 10u128.pow(places);
    let denominator = denominator as u128;
    let (mut quotient, remainder) = (numerator as u128 * scale).div_rem(&denominator);
    match (2 * remainder).cmp(&denominator) {
        std::cmp::Ordering::Greater => quotient += 1,
        std::cmp::Ordering::Equal if quotient.is_odd() => quotient += 1,
        _ => {}
    }
    quotient as f64 / scale as f64
}
