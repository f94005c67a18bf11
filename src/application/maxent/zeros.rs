//! Detection of probability mass forced to zero by marginal constraints.
//!
//! If a marginal cell has probability 0, every joint outcome contributing to
//! that cell must also have probability exactly 0 in every distribution that
//! matches the marginal. Removing those outcomes up front shrinks the
//! optimization problem and keeps the entropy gradient away from `log(0)`.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::domain::distribution::Distribution;
use crate::domain::sample_space::Symbol;
use crate::domain::structure::{combinations, DenseStructure, SubsetCache};
use crate::error::{Error, Result};

/// Absolute tolerance under which a marginal mass counts as zero.
pub const ZERO_MASS_TOLERANCE: f64 = 1e-8;

/// Split of the pmf indices into forced-zero and free components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroPartition {
    /// Indices forced to zero, ascending.
    pub zero: Vec<usize>,
    /// Remaining indices, ascending. These form the reduced problem.
    pub nonzero: Vec<usize>,
}

impl ZeroPartition {
    /// Total number of indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zero.len() + self.nonzero.len()
    }

    /// Return `true` if the partition covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scatter a reduced vector over the nonzero indices into a full-length
    /// vector with zeros elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `reduced` does not have one
    /// entry per nonzero index.
    pub fn expand(&self, reduced: &DVector<f64>) -> Result<DVector<f64>> {
        if reduced.len() != self.nonzero.len() {
            return Err(Error::DimensionMismatch {
                expected: self.nonzero.len(),
                found: reduced.len(),
            });
        }
        let mut full = DVector::zeros(self.len());
        for (&i, v) in self.nonzero.iter().zip(reduced.iter()) {
            full[i] = *v;
        }
        Ok(full)
    }
}

/// Outcome of zero isolation.
#[derive(Debug, Clone)]
pub struct IsolatedZeros {
    /// `x_i = 0` rows for each forced-zero index, or `None` if there are none.
    pub constraints: Option<(DMatrix<f64>, DVector<f64>)>,
    /// Zero/nonzero split of the indices.
    pub partition: ZeroPartition,
}

/// Find the components of the pmf vector that every distribution sharing the
/// `k`-way marginals of `dist` must set to zero.
///
/// Every k-subset of variables and every cell of its marginal is inspected;
/// an index is forced to zero as soon as one cell it belongs to has
/// (numerically) zero mass.
///
/// # Errors
///
/// Returns an error if `dist` is not dense over a Cartesian sample space.
pub fn isolate_zeros<S: Symbol>(dist: &Distribution<S>, k: usize) -> Result<IsolatedZeros> {
    let structure = DenseStructure::of(dist)?;
    let n_elements = structure.n_elements();
    let pmf = dist.pmf();

    let mut forced = vec![false; n_elements];
    let mut cache = SubsetCache::new();
    for rvs in combinations(structure.n_variables(), k) {
        for cell in structure.parameter_array(&rvs, &mut cache)? {
            let mass: f64 = cell.iter().map(|&i| pmf[i]).sum();
            if mass.abs() <= ZERO_MASS_TOLERANCE {
                for &i in cell {
                    forced[i] = true;
                }
            }
        }
    }

    let (zero, nonzero): (Vec<usize>, Vec<usize>) = (0..n_elements).partition(|&i| forced[i]);
    debug!(
        k,
        zero = zero.len(),
        nonzero = nonzero.len(),
        "Isolated forced-zero components"
    );

    let constraints = (!zero.is_empty()).then(|| {
        let mut a = DMatrix::zeros(zero.len(), n_elements);
        for (row, &i) in zero.iter().enumerate() {
            a[(row, i)] = 1.0;
        }
        (a, DVector::zeros(zero.len()))
    });

    Ok(IsolatedZeros {
        constraints,
        partition: ZeroPartition { zero, nonzero },
    })
}
