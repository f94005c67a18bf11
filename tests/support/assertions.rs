use marginal_maxent::domain::{combinations, Distribution, Symbol};

pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Masses are nonnegative and sum to one.
pub fn assert_normalized<S: Symbol>(dist: &Distribution<S>) {
    assert!(
        dist.pmf().iter().all(|p| *p >= 0.0),
        "negative mass in {:?}",
        dist.pmf()
    );
    assert_near(dist.pmf().iter().sum(), 1.0, 1e-6);
}

/// Every `k`-way marginal of `actual` matches that of `expected`.
pub fn assert_marginals_match<S: Symbol>(
    actual: &Distribution<S>,
    expected: &Distribution<S>,
    k: usize,
    tolerance: f64,
) {
    for rvs in combinations(expected.outcome_length(), k) {
        let a = actual.marginal(&rvs).expect("valid variables");
        let e = expected.marginal(&rvs).expect("valid variables");
        assert!(
            a.is_approx_equal(&e, tolerance),
            "marginal {rvs:?} differs: {:?} vs {:?}",
            a.pmf(),
            e.pmf()
        );
    }
}
