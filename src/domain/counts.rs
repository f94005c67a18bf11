//! Empirical distributions from symbol sequences.

use std::collections::BTreeMap;

use super::distribution::Distribution;
use super::error::DistributionError;
use super::sample_space::{Outcome, Symbol};

/// Estimate the distribution of `length`-symbol words in `data`.
///
/// Every overlapping window contributes one count, so a sequence of `m`
/// symbols yields `m - length + 1` observations.
///
/// # Errors
///
/// Returns [`DistributionError::InsufficientData`] when `length` is zero or
/// longer than `data`.
pub fn distribution_from_data<S: Symbol>(
    data: &[S],
    length: usize,
) -> Result<Distribution<S>, DistributionError> {
    if length == 0 || data.len() < length {
        return Err(DistributionError::InsufficientData {
            length,
            available: data.len(),
        });
    }

    let mut counts: BTreeMap<Outcome<S>, usize> = BTreeMap::new();
    for window in data.windows(length) {
        *counts.entry(window.to_vec()).or_insert(0) += 1;
    }

    let total = (data.len() - length + 1) as f64;
    let (outcomes, pmf) = counts
        .into_iter()
        .map(|(outcome, count)| (outcome, count as f64 / total))
        .unzip();

    Distribution::new(outcomes, pmf)
}
