//! Joint distributions over discrete random variables.
//!
//! A [`Distribution`] stores outcomes (one symbol per variable) with their
//! probability masses, sorted in the canonical order of its
//! [`SampleSpace`]. It is *dense* when every outcome of the sample space is
//! stored (zero masses included) and *sparse* otherwise. The optimizer works
//! on dense distributions over Cartesian sample spaces, where the pmf vector
//! index is the canonical outcome index.

use std::collections::BTreeMap;

use super::error::DistributionError;
use super::sample_space::{CartesianProduct, Outcome, SampleSpace, Symbol};

/// Tolerance on the total mass of a validated distribution.
const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Masses at or below this magnitude are dropped by [`Distribution::make_sparse`].
const NULL_MASS: f64 = 1e-9;

/// A probability mass function over joint outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<S> {
    sample_space: SampleSpace<S>,
    outcomes: Vec<Outcome<S>>,
    pmf: Vec<f64>,
}

impl<S: Symbol> Distribution<S> {
    /// Create a distribution whose sample space is exactly the given outcomes.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcomes are empty, duplicated or of unequal
    /// length, or if the masses are invalid or do not sum to one.
    pub fn new(outcomes: Vec<Outcome<S>>, pmf: Vec<f64>) -> Result<Self, DistributionError> {
        let (outcomes, pmf) = validate(outcomes, pmf)?;
        let sample_space = SampleSpace::Explicit(outcomes.clone());
        Ok(Self {
            sample_space,
            outcomes,
            pmf,
        })
    }

    /// Create a distribution over an explicit sample space.
    ///
    /// # Errors
    ///
    /// Same as [`Distribution::new`], plus
    /// [`DistributionError::OutsideSampleSpace`] for outcomes not in `space`.
    pub fn with_sample_space(
        outcomes: Vec<Outcome<S>>,
        pmf: Vec<f64>,
        sample_space: SampleSpace<S>,
    ) -> Result<Self, DistributionError> {
        let (outcomes, pmf) = validate(outcomes, pmf)?;
        if let Some(outside) = outcomes.iter().find(|o| !sample_space.contains(o)) {
            return Err(DistributionError::OutsideSampleSpace(format!("{outside:?}")));
        }
        Ok(Self {
            sample_space,
            outcomes,
            pmf,
        })
    }

    /// Dense distribution from a pmf vector in the canonical order of `space`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length differs from the space size or
    /// the masses are invalid.
    pub fn from_pmf(sample_space: SampleSpace<S>, pmf: Vec<f64>) -> Result<Self, DistributionError> {
        let outcomes = sample_space.outcomes();
        Self::with_sample_space(outcomes, pmf, sample_space)
    }

    /// The uniform distribution over a Cartesian product.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::EmptyOutcomes`] for an empty product.
    pub fn uniform(product: CartesianProduct<S>) -> Result<Self, DistributionError> {
        if product.is_empty() {
            return Err(DistributionError::EmptyOutcomes);
        }
        let mass = 1.0 / product.len() as f64;
        let outcomes: Vec<_> = product.iter().collect();
        let pmf = vec![mass; outcomes.len()];
        Ok(Self {
            sample_space: SampleSpace::Cartesian(product),
            outcomes,
            pmf,
        })
    }

    /// Number of random variables.
    #[must_use]
    pub fn outcome_length(&self) -> usize {
        self.outcomes.first().map_or(0, Vec::len)
    }

    /// Stored outcomes in canonical order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome<S>] {
        &self.outcomes
    }

    /// Masses aligned with [`Distribution::outcomes`].
    #[must_use]
    pub fn pmf(&self) -> &[f64] {
        &self.pmf
    }

    /// The sample space the distribution is defined over.
    #[must_use]
    pub const fn sample_space(&self) -> &SampleSpace<S> {
        &self.sample_space
    }

    /// Probability of an outcome; zero for outcomes not stored.
    #[must_use]
    pub fn prob(&self, outcome: &[S]) -> f64 {
        self.outcomes
            .binary_search_by(|probe| probe.as_slice().cmp(outcome))
            .map_or(0.0, |i| self.pmf[i])
    }

    /// Return `true` if every outcome of the sample space is stored.
    #[must_use]
    pub fn is_dense(&self) -> bool {
        self.outcomes.len() == self.sample_space.len()
    }

    /// Return `true` if the sample space is a Cartesian product.
    #[must_use]
    pub const fn is_cartesian(&self) -> bool {
        self.sample_space.is_cartesian()
    }

    /// Per-variable alphabets of the sample space.
    #[must_use]
    pub fn alphabets(&self) -> Vec<Vec<S>> {
        self.sample_space.alphabets()
    }

    /// Shannon entropy in bits.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        -self
            .pmf
            .iter()
            .filter(|p| **p > 0.0)
            .map(|p| p * p.log2())
            .sum::<f64>()
    }

    /// Store every outcome of the sample space, filling in zero masses.
    pub fn make_dense(&mut self) {
        if self.is_dense() {
            return;
        }
        let outcomes = self.sample_space.outcomes();
        let pmf = outcomes.iter().map(|o| self.prob(o)).collect();
        self.outcomes = outcomes;
        self.pmf = pmf;
    }

    /// Drop outcomes whose mass is numerically zero.
    pub fn make_sparse(&mut self) {
        let (outcomes, pmf): (Vec<_>, Vec<_>) = self
            .outcomes
            .drain(..)
            .zip(self.pmf.drain(..))
            .filter(|(_, p)| p.abs() > NULL_MASS)
            .unzip();
        self.outcomes = outcomes;
        self.pmf = pmf;
    }

    /// Same masses over the Cartesian product where every variable ranges
    /// over the union of all symbols observed in the sample space.
    #[must_use]
    pub fn expanded_sample_space(&self) -> Self {
        let mut union: Vec<S> = self.alphabets().into_iter().flatten().collect();
        union.sort();
        union.dedup();
        let product = CartesianProduct::new(vec![union; self.outcome_length()]);
        Self {
            sample_space: SampleSpace::Cartesian(product),
            outcomes: self.outcomes.clone(),
            pmf: self.pmf.clone(),
        }
    }

    /// Marginal distribution of the variables `rvs`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidVariable`] for an out-of-range index.
    pub fn marginal(&self, rvs: &[usize]) -> Result<Self, DistributionError> {
        let n_variables = self.outcome_length();
        if let Some(&index) = rvs.iter().find(|&&i| i >= n_variables) {
            return Err(DistributionError::InvalidVariable { index, n_variables });
        }

        let project = |outcome: &Outcome<S>| -> Outcome<S> {
            rvs.iter().map(|&i| outcome[i].clone()).collect()
        };

        let mut masses: BTreeMap<Outcome<S>, f64> = BTreeMap::new();
        for (outcome, p) in self.outcomes.iter().zip(&self.pmf) {
            *masses.entry(project(outcome)).or_insert(0.0) += p;
        }

        let sample_space = match &self.sample_space {
            SampleSpace::Cartesian(product) => SampleSpace::Cartesian(CartesianProduct::new(
                rvs.iter().map(|&i| product.alphabets()[i].clone()).collect(),
            )),
            SampleSpace::Explicit(outcomes) => {
                SampleSpace::explicit(outcomes.iter().map(project).collect())
            }
        };

        let (outcomes, pmf): (Vec<_>, Vec<_>) = masses.into_iter().unzip();
        Ok(Self {
            sample_space,
            outcomes,
            pmf,
        })
    }

    /// Dense distribution treating every variable as independent, with each
    /// variable keeping its own univariate marginal.
    #[must_use]
    pub fn product_distribution(&self) -> Self {
        let product = CartesianProduct::new(self.alphabets());
        let marginals: Vec<Self> = (0..self.outcome_length())
            .filter_map(|i| self.marginal(&[i]).ok())
            .collect();

        let outcomes: Vec<Outcome<S>> = product.iter().collect();
        let pmf = outcomes
            .iter()
            .map(|outcome| {
                outcome
                    .iter()
                    .zip(&marginals)
                    .map(|(symbol, marginal)| marginal.prob(std::slice::from_ref(symbol)))
                    .product::<f64>()
            })
            .collect();

        Self {
            sample_space: SampleSpace::Cartesian(product),
            outcomes,
            pmf,
        }
    }

    /// Return `true` if both distributions assign the same mass to every
    /// outcome, within `tolerance`.
    #[must_use]
    pub fn is_approx_equal(&self, other: &Self, tolerance: f64) -> bool {
        if self.outcome_length() != other.outcome_length() {
            return false;
        }
        self.outcomes
            .iter()
            .chain(other.outcomes.iter())
            .all(|o| (self.prob(o) - other.prob(o)).abs() <= tolerance)
    }
}

/// Check distribution invariants and sort outcomes canonically.
fn validate<S: Symbol>(
    outcomes: Vec<Outcome<S>>,
    pmf: Vec<f64>,
) -> Result<(Vec<Outcome<S>>, Vec<f64>), DistributionError> {
    if outcomes.is_empty() {
        return Err(DistributionError::EmptyOutcomes);
    }
    if outcomes.len() != pmf.len() {
        return Err(DistributionError::LengthMismatch {
            outcomes: outcomes.len(),
            pmf: pmf.len(),
        });
    }

    let expected = outcomes[0].len();
    if let Some(outcome) = outcomes.iter().find(|o| o.len() != expected) {
        return Err(DistributionError::InconsistentOutcomeLength {
            expected,
            found: outcome.len(),
        });
    }

    if let Some((index, &mass)) = pmf
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(DistributionError::InvalidMass { index, mass });
    }

    let total: f64 = pmf.iter().sum();
    if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(DistributionError::NotNormalized { total });
    }

    let mut pairs: Vec<(Outcome<S>, f64)> = outcomes.into_iter().zip(pmf).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if let Some(window) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(DistributionError::DuplicateOutcome(format!("{:?}", window[0].0)));
    }

    Ok(pairs.into_iter().unzip())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correlated() -> Distribution<u8> {
        Distribution::new(vec![vec![0, 0], vec![1, 1]], vec![0.5, 0.5]).unwrap()
    }

    #[test]
    fn test_new_sorts_outcomes() {
        let d = Distribution::new(vec![vec!['b'], vec!['a']], vec![0.75, 0.25]).unwrap();
        assert_eq!(d.outcomes(), &[vec!['a'], vec!['b']]);
        assert_eq!(d.pmf(), &[0.25, 0.75]);
        assert!(d.is_dense());
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert!(matches!(
            Distribution::new(vec![vec![0], vec![1]], vec![0.5]),
            Err(DistributionError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Distribution::new(vec![vec![0], vec![1, 1]], vec![0.5, 0.5]),
            Err(DistributionError::InconsistentOutcomeLength { .. })
        ));
        assert!(matches!(
            Distribution::new(vec![vec![0], vec![0]], vec![0.5, 0.5]),
            Err(DistributionError::DuplicateOutcome(_))
        ));
        assert!(matches!(
            Distribution::new(vec![vec![0], vec![1]], vec![1.5, -0.5]),
            Err(DistributionError::InvalidMass { index: 1, .. })
        ));
        assert!(matches!(
            Distribution::new(vec![vec![0], vec![1]], vec![0.5, 0.4]),
            Err(DistributionError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_expand_and_densify() {
        let mut d = correlated().expanded_sample_space();
        assert!(d.is_cartesian());
        assert!(!d.is_dense());

        d.make_dense();
        assert!(d.is_dense());
        assert_eq!(d.pmf(), &[0.5, 0.0, 0.0, 0.5]);

        d.make_sparse();
        assert_eq!(d.outcomes().len(), 2);
    }

    #[test]
    fn test_union_expansion_shares_symbols() {
        let d = Distribution::new(vec![vec!['a', 'x'], vec!['b', 'y']], vec![0.5, 0.5])
            .unwrap()
            .expanded_sample_space();
        assert_eq!(d.sample_space().len(), 16);
    }

    #[test]
    fn test_marginal_and_product() {
        let d = correlated();
        let m = d.marginal(&[1]).unwrap();
        assert_eq!(m.pmf(), &[0.5, 0.5]);

        let product = d.product_distribution();
        assert_eq!(product.pmf(), &[0.25, 0.25, 0.25, 0.25]);
        assert!(matches!(
            d.marginal(&[2]),
            Err(DistributionError::InvalidVariable { index: 2, .. })
        ));
    }

    #[test]
    fn test_entropy_in_bits() {
        assert!((correlated().entropy() - 1.0).abs() < 1e-12);
        let product = correlated().product_distribution();
        assert!((product.entropy() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_over_product() {
        let d = Distribution::uniform(CartesianProduct::new(vec![vec![0, 1, 2]])).unwrap();
        assert!(d.pmf().iter().all(|p| (p - 1.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_approx_equal_ignores_representation() {
        let mut dense = correlated().expanded_sample_space();
        dense.make_dense();
        assert!(dense.is_approx_equal(&correlated(), 1e-12));
        assert!(!dense.is_approx_equal(&correlated().product_distribution(), 1e-3));
    }
}
