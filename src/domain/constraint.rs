//! Linear constraint types for optimization.
//!
//! These types describe the rows and variable bounds of the linear programs
//! handed to a [`Solver`](crate::port::outbound::solver::Solver).

use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each variable.
    pub coefficients: Vec<f64>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: f64,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub const fn geq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Pair of constraints bounding `lhs` to `[rhs - tolerance, rhs + tolerance]`.
    #[must_use]
    pub fn within(coefficients: Vec<f64>, rhs: f64, tolerance: f64) -> [Self; 2] {
        [
            Self::geq(coefficients.clone(), rhs - tolerance),
            Self::leq(coefficients, rhs + tolerance),
        ]
    }

    /// Evaluate the left-hand side at `x`.
    #[must_use]
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().zip(x).map(|(c, v)| c * v).sum()
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<f64>,
    /// Upper bound (None = +infinity).
    pub upper: Option<f64>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Free variable (no bounds).
    #[must_use]
    pub const fn free() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }

    /// Bounded variable [lower, upper].
    #[must_use]
    pub const fn bounded(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_brackets_rhs() {
        let [low, high] = Constraint::within(vec![1.0, 1.0], 1.0, 0.25);
        assert_eq!(low.sense, ConstraintSense::GreaterEqual);
        assert_eq!(low.rhs, 0.75);
        assert_eq!(high.sense, ConstraintSense::LessEqual);
        assert_eq!(high.rhs, 1.25);
    }

    #[test]
    fn test_lhs() {
        let c = Constraint::eq(vec![2.0, -1.0], 0.0);
        assert_eq!(c.lhs(&[1.5, 3.0]), 0.0);
    }

    #[test]
    fn test_default_bounds_non_negative() {
        assert_eq!(VariableBounds::default(), VariableBounds::non_negative());
        assert_eq!(VariableBounds::free().lower, None);
    }
}
