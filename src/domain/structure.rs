//! Index layout of dense distributions over Cartesian sample spaces.
//!
//! The optimizer never looks at symbols: it only needs to know which joint
//! indices of the pmf vector fall into each cell of a marginal. That grouping
//! depends only on the alphabet sizes, so it is computed here once per
//! variable subset and memoized in an explicit [`SubsetCache`].

use std::collections::HashMap;

use super::distribution::Distribution;
use super::error::DistributionError;
use super::sample_space::{SampleSpace, Symbol};

/// Joint indices grouped by marginal cell, in canonical cell order.
pub type CellGroups = Vec<Vec<usize>>;

/// Memoized cell groupings keyed by variable subset.
///
/// A cache is only valid for the [`DenseStructure`] that filled it; callers
/// create one per analysis and drop it afterwards.
#[derive(Debug, Default)]
pub struct SubsetCache {
    groups: HashMap<Vec<usize>, CellGroups>,
}

impl SubsetCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized subsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Return `true` if nothing has been memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Mixed-radix layout of a dense joint pmf vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseStructure {
    alphabet_sizes: Vec<usize>,
    strides: Vec<usize>,
    n_elements: usize,
}

impl DenseStructure {
    /// Layout for the given per-variable alphabet sizes.
    #[must_use]
    pub fn new(alphabet_sizes: Vec<usize>) -> Self {
        let mut strides = vec![1; alphabet_sizes.len()];
        for i in (0..alphabet_sizes.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * alphabet_sizes[i + 1];
        }
        let n_elements = alphabet_sizes.iter().product();
        Self {
            alphabet_sizes,
            strides,
            n_elements,
        }
    }

    /// Layout of a dense distribution over a Cartesian sample space.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::NotCartesian`] or
    /// [`DistributionError::NotDense`] when the pmf vector does not follow
    /// the canonical product order.
    pub fn of<S: Symbol>(dist: &Distribution<S>) -> Result<Self, DistributionError> {
        let SampleSpace::Cartesian(product) = dist.sample_space() else {
            return Err(DistributionError::NotCartesian);
        };
        if !dist.is_dense() {
            return Err(DistributionError::NotDense);
        }
        Ok(Self::new(product.alphabets().iter().map(Vec::len).collect()))
    }

    /// Number of random variables.
    #[must_use]
    pub fn n_variables(&self) -> usize {
        self.alphabet_sizes.len()
    }

    /// Length of the dense pmf vector.
    #[must_use]
    pub const fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Joint indices grouped by the cells of the marginal on `rvs`.
    ///
    /// Cells are ordered like outcomes of the marginal (last variable of
    /// `rvs` fastest) and each group is ascending. An empty `rvs` yields a
    /// single cell holding every index.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidVariable`] for an out-of-range index.
    pub fn parameter_array<'c>(
        &self,
        rvs: &[usize],
        cache: &'c mut SubsetCache,
    ) -> Result<&'c [Vec<usize>], DistributionError> {
        let n_variables = self.n_variables();
        if let Some(&index) = rvs.iter().find(|&&i| i >= n_variables) {
            return Err(DistributionError::InvalidVariable { index, n_variables });
        }

        let groups = cache
            .groups
            .entry(rvs.to_vec())
            .or_insert_with(|| self.group(rvs));
        Ok(groups.as_slice())
    }

    fn group(&self, rvs: &[usize]) -> CellGroups {
        let n_cells: usize = rvs.iter().map(|&i| self.alphabet_sizes[i]).product();
        let mut groups = vec![Vec::with_capacity(self.n_elements / n_cells.max(1)); n_cells];

        for index in 0..self.n_elements {
            let cell = rvs.iter().fold(0, |cell, &i| {
                let digit = (index / self.strides[i]) % self.alphabet_sizes[i];
                cell * self.alphabet_sizes[i] + digit
            });
            groups[cell].push(index);
        }

        groups
    }
}

/// Lexicographic k-subsets of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

/// Enumerate all `k`-element subsets of `0..n` in lexicographic order.
///
/// `k = 0` yields one empty subset; `k > n` yields nothing.
#[must_use]
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        current: (k <= n).then(|| (0..k).collect()),
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let k = current.len();

        let mut next = current.clone();
        // Rightmost position that can still be incremented.
        if let Some(i) = (0..k).rev().find(|&i| next[i] < self.n - k + i) {
            next[i] += 1;
            for j in i + 1..k {
                next[j] = next[j - 1] + 1;
            }
            self.current = Some(next);
        }

        Some(current)
    }
}
