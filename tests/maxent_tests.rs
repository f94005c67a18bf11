//! Integration tests for the marginal maxent pipeline against HiGHS.

mod support;

use marginal_maxent::adapter::outbound::solver::HiGHSSolver;
use marginal_maxent::application::maxent::{
    check_feasibility, marginal_maxent_dists, prepare_dist, MarginalMaxent,
};
use marginal_maxent::application::solver::FrankWolfeConfig;
use marginal_maxent::domain::Distribution;
use marginal_maxent::error::Error;

use support::assertions::{assert_marginals_match, assert_near, assert_normalized};
use support::distributions::{
    constant_first_bit, correlated_pair, generic_triple, independent_pair, xor,
};

fn maxent(max_iterations: usize) -> MarginalMaxent {
    MarginalMaxent::new(FrankWolfeConfig {
        max_iterations,
        ..FrankWolfeConfig::default()
    })
}

#[test]
fn test_order_zero_is_uniform() {
    let dists =
        marginal_maxent_dists(&correlated_pair(), None, &maxent(50), &HiGHSSolver::new()).unwrap();

    assert_eq!(dists[0].outcomes().len(), 4);
    for p in dists[0].pmf() {
        assert_near(*p, 0.25, 1e-12);
    }
}

#[test]
fn test_order_one_of_correlated_pair_is_uniform() {
    let dists =
        marginal_maxent_dists(&correlated_pair(), None, &maxent(50), &HiGHSSolver::new()).unwrap();

    assert_eq!(dists.len(), 3);
    for p in dists[1].pmf() {
        assert_near(*p, 0.25, 1e-12);
    }
}

#[test]
fn test_order_one_of_independent_pair_is_the_input() {
    let input = independent_pair();
    let dists = marginal_maxent_dists(&input, None, &maxent(50), &HiGHSSolver::new()).unwrap();

    assert!(dists[1].is_approx_equal(&input, 1e-12));
}

#[test]
fn test_top_order_returns_the_input() {
    let input = generic_triple();
    let dists = marginal_maxent_dists(&input, None, &maxent(100), &HiGHSSolver::new()).unwrap();

    assert_eq!(dists.len(), 4);
    assert_eq!(dists[3].outcomes(), input.outcomes());
    assert_eq!(dists[3].pmf(), input.pmf());
}

#[test]
fn test_pairwise_maxent_matches_pairwise_marginals() {
    let input = generic_triple();
    let dists = marginal_maxent_dists(&input, None, &maxent(300), &HiGHSSolver::new()).unwrap();

    assert_normalized(&dists[2]);
    assert_marginals_match(&dists[2], &input, 2, 1e-2);
}

#[test]
fn test_entropy_does_not_increase_with_order() {
    let dists = marginal_maxent_dists(&xor(), None, &maxent(200), &HiGHSSolver::new()).unwrap();
    let entropies: Vec<f64> = dists.iter().map(Distribution::entropy).collect();

    assert_near(entropies[0], 3.0, 1e-9);
    assert_near(entropies[3], 2.0, 1e-9);
    for pair in entropies.windows(2) {
        assert!(
            pair[0] >= pair[1] - 1e-6,
            "entropy increased with order: {entropies:?}"
        );
    }
    // Every distribution with uniform pairwise marginals mixes the two
    // parity classes, so it has at least the entropy of one of them.
    assert!(entropies[2] >= 2.0 - 1e-6, "{entropies:?}");
    assert_marginals_match(&dists[2], &xor(), 2, 1e-2);
}

/// Pairwise maxent entropy of `generic_triple`, from iterative proportional
/// fitting of its three bivariate marginals.
const GENERIC_TRIPLE_PAIRWISE_ENTROPY: f64 = 2.778_924_2;

#[test]
fn test_pairwise_maxent_of_generic_triple_maximizes_entropy() {
    let input = generic_triple();
    let dists = marginal_maxent_dists(&input, None, &maxent(1000), &HiGHSSolver::new()).unwrap();
    let entropies: Vec<f64> = dists.iter().map(Distribution::entropy).collect();

    for pair in entropies.windows(2) {
        assert!(
            pair[0] >= pair[1] - 1e-6,
            "entropy increased with order: {entropies:?}"
        );
    }
    // The input is itself feasible for its own pairwise marginals.
    assert!(
        entropies[2] >= input.entropy() - 1e-6,
        "pairwise maxent below the input: {entropies:?}"
    );
    assert_near(entropies[2], GENERIC_TRIPLE_PAIRWISE_ENTROPY, 1e-3);
    assert_marginals_match(&dists[2], &input, 2, 1e-2);
}

#[test]
fn test_forced_zeros_stay_zero() {
    let input = constant_first_bit();
    let dists = marginal_maxent_dists(&input, None, &maxent(200), &HiGHSSolver::new()).unwrap();

    for dist in &dists[1..] {
        assert_normalized(dist);
        assert!(
            dist.outcomes().iter().all(|o| o[0] == '0'),
            "mass on a forced-zero outcome: {:?}",
            dist.outcomes()
        );
    }
}

#[test]
fn test_identical_inputs_give_identical_outputs() {
    let solver = HiGHSSolver::new();
    let first = marginal_maxent_dists(&generic_triple(), Some(2), &maxent(50), &solver).unwrap();
    let second = marginal_maxent_dists(&generic_triple(), Some(2), &maxent(50), &solver).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_k_max_above_variable_count_is_rejected() {
    let result = marginal_maxent_dists(&xor(), Some(4), &maxent(10), &HiGHSSolver::new());
    assert!(matches!(
        result,
        Err(Error::InvalidOrder {
            k: 4,
            n_variables: 3
        })
    ));
}

#[test]
fn test_direct_solve_reports_partition() {
    let prepared = prepare_dist(&constant_first_bit());
    let solution = maxent(100)
        .solve(&prepared, 2, &HiGHSSolver::new())
        .unwrap();

    assert_eq!(solution.partition.zero, vec![4, 5, 6, 7]);
    assert_eq!(solution.pmf.len(), 8);
    for &i in &solution.partition.zero {
        assert_eq!(solution.pmf[i], 0.0);
    }
    assert_near(solution.pmf.sum(), 1.0, 1e-9);
    assert!(solution.iterations <= 100);
}

#[test]
fn test_marginal_constraints_of_a_distribution_are_feasible() {
    let prepared = prepare_dist(&generic_triple());
    let solver = HiGHSSolver::new();

    for k in 0..=3 {
        let report = check_feasibility(&prepared, k, &solver, &Default::default()).unwrap();
        assert!(report.residual.abs() < 1e-7, "k = {k}: {}", report.residual);
        assert_eq!(report.witness.len(), 8);
        assert_near(report.witness.sum(), 1.0, 1e-6);
    }
}
