//! Cumulative distributions for weighted bucket selection

use num_traits::NumAssign;

/// Running totals of `weights`
///
/// `cumulative_sum(&[60, 30, 10])` is `[60, 90, 100]`.
pub fn cumulative_sum<T: NumAssign + Copy>(weights: &[T]) -> Vec<T> {
    let mut running = T::zero();
    weights
        .iter()
        .map(|&weight| {
            running += weight;
            running
        })
        .collect()
}

/// Index of the first bucket whose cumulative bound exceeds `value`
///
/// Scans linearly from the first bucket, so ties resolve to the lowest index.
/// Returns `None` when `value` is not below any bound, which happens for
/// degenerate distributions (all-zero, negative or NaN weights).
pub fn first_bucket_above<T: PartialOrd + Copy>(cumulative: &[T], value: T) -> Option<usize> {
    cumulative.iter().position(|&bound| value < bound)
}

/// Map a unit draw onto a cumulative distribution
///
/// The draw is scaled by the distribution total before the bucket scan.
pub fn select_bucket(cumulative: &[f64], draw: f64) -> Option<usize> {
    let total = cumulative.last().copied()?;
    first_bucket_above(cumulative, draw * total)
}
