//! Marginal-matching equality systems.

use nalgebra::{DMatrix, DVector};

use super::distribution::Distribution;
use super::error::DistributionError;
use super::sample_space::Symbol;
use super::structure::{combinations, DenseStructure, SubsetCache};

/// Build the linear system `A x = b` whose solutions share every `k`-way
/// marginal with `dist`.
///
/// The first row is the normalization constraint (all ones, target 1). Each
/// further row belongs to one (k-subset, cell) pair, with subsets in
/// lexicographic order and cells in canonical order; its target is the
/// marginal probability of the cell under `dist`.
///
/// # Errors
///
/// Returns an error if `dist` is not dense over a Cartesian sample space.
pub fn marginal_constraints<S: Symbol>(
    dist: &Distribution<S>,
    k: usize,
) -> Result<(DMatrix<f64>, DVector<f64>), DistributionError> {
    let structure = DenseStructure::of(dist)?;
    let n_elements = structure.n_elements();
    let pmf = dist.pmf();

    let mut rows: Vec<Vec<usize>> = vec![(0..n_elements).collect()];
    let mut targets = vec![1.0];

    if k > 0 {
        let mut cache = SubsetCache::new();
        for rvs in combinations(structure.n_variables(), k) {
            for cell in structure.parameter_array(&rvs, &mut cache)? {
                targets.push(cell.iter().map(|&i| pmf[i]).sum());
                rows.push(cell.clone());
            }
        }
    }

    let mut a = DMatrix::zeros(rows.len(), n_elements);
    for (r, cell) in rows.iter().enumerate() {
        for &i in cell {
            a[(r, i)] = 1.0;
        }
    }

    Ok((a, DVector::from_vec(targets)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correlated() -> Distribution<u8> {
        let mut d = Distribution::new(vec![vec![0, 0], vec![1, 1]], vec![0.5, 0.5])
            .unwrap()
            .expanded_sample_space();
        d.make_dense();
        d
    }

    #[test]
    fn test_order_zero_is_normalization_only() {
        let (a, b) = marginal_constraints(&correlated(), 0).unwrap();
        assert_eq!(a.shape(), (1, 4));
        assert_eq!(b[0], 1.0);
    }

    #[test]
    fn test_univariate_rows() {
        let (a, b) = marginal_constraints(&correlated(), 1).unwrap();
        // normalization + 2 cells for each of 2 variables
        assert_eq!(a.shape(), (5, 4));
        assert_eq!(a.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(a.row(3).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0, 1.0, 0.0]);
        assert!(b.iter().skip(1).all(|t| (t - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_source_satisfies_its_constraints() {
        let d = correlated();
        let (a, b) = marginal_constraints(&d, 2).unwrap();
        let x = DVector::from_column_slice(d.pmf());
        assert!((&a * &x - &b).amax() < 1e-12);
    }

    #[test]
    fn test_requires_dense_cartesian() {
        let sparse = Distribution::new(vec![vec![0, 0], vec![1, 1]], vec![0.5, 0.5]).unwrap();
        assert_eq!(
            marginal_constraints(&sparse, 1).unwrap_err(),
            DistributionError::NotCartesian
        );
    }
}
