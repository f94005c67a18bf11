//! Negative Shannon entropy and its gradient, in bits.
//!
//! - Objective: `R(p) = sum(p_i * log2(p_i))`
//! - Gradient: `dR/dp_i = log2(p_i) + 1/ln(2)`
//!
//! Minimizing `R` over a polytope of distributions yields the maximum
//! entropy member of the polytope.

use std::f64::consts::LN_2;

use nalgebra::DVector;

/// Negative entropy `sum(p * log2(p))`.
///
/// Entries that are not strictly positive contribute nothing, so `0 log 0`
/// counts as 0 and stray non-positive entries never produce NaN.
#[must_use]
pub fn negentropy(p: &DVector<f64>) -> f64 {
    p.iter()
        .filter(|v| **v > 0.0)
        .map(|v| v * v.log2())
        .sum()
}

/// Gradient of [`negentropy`].
///
/// Components `<= 0` get gradient exactly 0. Their gradient would be `-inf`,
/// which would dominate the direction-finding LP; a zero gradient instead
/// leaves them where they are.
#[must_use]
pub fn negentropy_gradient(p: &DVector<f64>) -> DVector<f64> {
    p.map(|v| if v > 0.0 { v.log2() + 1.0 / LN_2 } else { 0.0 })
}
