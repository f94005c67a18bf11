//! Maximum entropy distributions for every marginal order of a source.

use tracing::{info, warn};

use super::marginal::MarginalMaxent;
use crate::domain::distribution::Distribution;
use crate::domain::error::DistributionError;
use crate::domain::sample_space::{SampleSpace, Symbol};
use crate::error::{Error, Result};
use crate::port::outbound::solver::Solver;

/// Densifying beyond this many outcomes logs a warning.
pub const LARGE_SAMPLE_SPACE: usize = 10_000;

/// Return a dense copy of `dist` over a Cartesian sample space.
///
/// A non-Cartesian space is replaced by the product in which every variable
/// ranges over the union of all observed symbols.
#[must_use]
pub fn prepare_dist<S: Symbol>(dist: &Distribution<S>) -> Distribution<S> {
    let mut prepared = if dist.is_cartesian() {
        dist.clone()
    } else {
        dist.expanded_sample_space()
    };

    if !prepared.is_dense() {
        let size = prepared.sample_space().len();
        if size > LARGE_SAMPLE_SPACE {
            warn!(
                size,
                limit = LARGE_SAMPLE_SPACE,
                "Densifying a large sample space"
            );
        }
        prepared.make_dense();
    }
    prepared
}

/// Compute the maximum entropy distribution matching the `k`-way marginals
/// of `dist` for every `k` in `0..=k_max`.
///
/// `k_max` defaults to the number of variables. The order `k_max` itself
/// returns the (prepared) input, order 0 the uniform distribution and order 1
/// the product of the univariate marginals; other orders are solved with
/// `maxent`. Every returned distribution is sparse.
///
/// # Errors
///
/// Returns [`Error::InvalidOrder`] when `k_max` exceeds the number of
/// variables, and propagates any failure of an individual order.
pub fn marginal_maxent_dists<S: Symbol>(
    dist: &Distribution<S>,
    k_max: Option<usize>,
    maxent: &MarginalMaxent,
    solver: &dyn Solver,
) -> Result<Vec<Distribution<S>>> {
    let n_variables = dist.outcome_length();
    let k_max = k_max.unwrap_or(n_variables);
    if k_max > n_variables {
        return Err(Error::InvalidOrder { k: k_max, n_variables });
    }

    let prepared = prepare_dist(dist);
    let SampleSpace::Cartesian(product) = prepared.sample_space() else {
        return Err(DistributionError::NotCartesian.into());
    };

    let mut dists = Vec::with_capacity(k_max + 1);
    for k in 0..=k_max {
        let mut order = if k == k_max {
            prepared.clone()
        } else if k == 0 {
            Distribution::uniform(product.clone())?
        } else if k == 1 {
            prepared.product_distribution()
        } else {
            let solution = maxent.solve(&prepared, k, solver)?;
            let pmf = solution.pmf.as_slice().to_vec();
            Distribution::from_pmf(prepared.sample_space().clone(), pmf)?
        };
        order.make_sparse();
        info!(k, entropy = order.entropy(), "Computed maxent distribution");
        dists.push(order);
    }
    Ok(dists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::outbound::solver::{LpProblem, LpSolution, SolverOptions};

    fn correlated() -> Distribution<u8> {
        Distribution::new(vec![vec![0, 0], vec![1, 1]], vec![0.5, 0.5]).unwrap()
    }

    struct Unused(SolverOptions);

    impl Solver for Unused {
        fn name(&self) -> &'static str {
            "unused"
        }

        fn options(&self) -> &SolverOptions {
            &self.0
        }

        fn solve_with(&self, _: &LpProblem, _: &SolverOptions) -> Result<LpSolution> {
            panic!("no LP expected for orders 0, 1 and k_max");
        }
    }

    fn unused() -> Unused {
        Unused(SolverOptions::default())
    }

    #[test]
    fn test_prepare_expands_and_densifies() {
        let prepared = prepare_dist(&correlated());
        assert!(prepared.is_cartesian());
        assert!(prepared.is_dense());
        assert_eq!(prepared.pmf(), &[0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_prepare_densifies_past_the_warning_size() {
        // Five variables over seven symbols: 7^5 = 16807 outcomes.
        let outcomes: Vec<Vec<u8>> = (0..7).map(|s| vec![s; 5]).collect();
        let dist = Distribution::new(outcomes, vec![1.0 / 7.0; 7]).unwrap();

        let prepared = prepare_dist(&dist);
        assert!(prepared.sample_space().len() > LARGE_SAMPLE_SPACE);
        assert!(prepared.is_dense());
        assert_eq!(prepared.pmf().len(), 16_807);
        assert_eq!(prepared.pmf().iter().filter(|p| **p > 0.0).count(), 7);
        assert!((prepared.pmf().iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_low_orders_need_no_solver() {
        let dists =
            marginal_maxent_dists(&correlated(), None, &MarginalMaxent::default(), &unused())
                .unwrap();
        assert_eq!(dists.len(), 3);

        for p in dists[0].pmf() {
            assert!((p - 0.25).abs() < 1e-12);
        }
        for p in dists[1].pmf() {
            assert!((p - 0.25).abs() < 1e-12);
        }
        assert_eq!(dists[2].outcomes(), &[vec![0, 0], vec![1, 1]]);
        assert_eq!(dists[2].pmf(), &[0.5, 0.5]);
    }

    #[test]
    fn test_k_max_takes_precedence() {
        let dists =
            marginal_maxent_dists(&correlated(), Some(0), &MarginalMaxent::default(), &unused())
                .unwrap();
        assert_eq!(dists.len(), 1);
        assert_eq!(dists[0].pmf(), &[0.5, 0.5]);
    }

    #[test]
    fn test_rejects_order_above_variable_count() {
        let result =
            marginal_maxent_dists(&correlated(), Some(3), &MarginalMaxent::default(), &unused());
        assert!(matches!(
            result,
            Err(Error::InvalidOrder {
                k: 3,
                n_variables: 2
            })
        ));
    }
}
