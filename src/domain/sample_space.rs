//! Sample spaces of joint outcomes.
//!
//! A sample space is either an explicit, sorted list of outcomes or the
//! Cartesian product of per-variable alphabets. Cartesian spaces enumerate
//! outcomes in the canonical order shared by every dense computation in the
//! crate: lexicographic over the sorted alphabets, with the last variable
//! varying fastest. Because alphabets are sorted, this is also the `Ord`
//! order of the outcome vectors.

use std::fmt::Debug;

/// Symbol type usable in outcomes.
pub trait Symbol: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Symbol for T {}

/// A joint outcome: one symbol per random variable.
pub type Outcome<S> = Vec<S>;

/// Cartesian product of per-variable alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartesianProduct<S> {
    alphabets: Vec<Vec<S>>,
    strides: Vec<usize>,
    len: usize,
}

impl<S: Symbol> CartesianProduct<S> {
    /// Build a product space; each alphabet is sorted and deduplicated.
    #[must_use]
    pub fn new(alphabets: Vec<Vec<S>>) -> Self {
        let alphabets: Vec<Vec<S>> = alphabets
            .into_iter()
            .map(|mut alphabet| {
                alphabet.sort();
                alphabet.dedup();
                alphabet
            })
            .collect();

        let mut strides = vec![1; alphabets.len()];
        for i in (0..alphabets.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * alphabets[i + 1].len();
        }
        let len = alphabets.iter().map(Vec::len).product();

        Self {
            alphabets,
            strides,
            len,
        }
    }

    /// Per-variable alphabets, sorted.
    #[must_use]
    pub fn alphabets(&self) -> &[Vec<S>] {
        &self.alphabets
    }

    /// Number of variables.
    #[must_use]
    pub fn outcome_length(&self) -> usize {
        self.alphabets.len()
    }

    /// Number of outcomes in the product.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if some alphabet is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Canonical index of an outcome, or `None` if it is not in the product.
    #[must_use]
    pub fn index_of(&self, outcome: &[S]) -> Option<usize> {
        if outcome.len() != self.alphabets.len() {
            return None;
        }
        outcome
            .iter()
            .zip(&self.alphabets)
            .zip(&self.strides)
            .try_fold(0, |acc, ((symbol, alphabet), stride)| {
                alphabet
                    .binary_search(symbol)
                    .ok()
                    .map(|pos| acc + pos * stride)
            })
    }

    /// Outcome at a canonical index.
    #[must_use]
    pub fn outcome(&self, index: usize) -> Option<Outcome<S>> {
        if index >= self.len {
            return None;
        }
        Some(
            self.alphabets
                .iter()
                .zip(&self.strides)
                .map(|(alphabet, stride)| alphabet[(index / stride) % alphabet.len()].clone())
                .collect(),
        )
    }

    /// Iterate over all outcomes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Outcome<S>> + '_ {
        (0..self.len).filter_map(move |i| self.outcome(i))
    }
}

/// The set of outcomes a distribution is defined over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSpace<S> {
    /// Full product of per-variable alphabets.
    Cartesian(CartesianProduct<S>),
    /// An explicit, sorted, duplicate-free outcome list.
    Explicit(Vec<Outcome<S>>),
}

impl<S: Symbol> SampleSpace<S> {
    /// Build an explicit sample space from arbitrary outcomes.
    #[must_use]
    pub fn explicit(mut outcomes: Vec<Outcome<S>>) -> Self {
        outcomes.sort();
        outcomes.dedup();
        Self::Explicit(outcomes)
    }

    /// Number of outcomes in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Cartesian(product) => product.len(),
            Self::Explicit(outcomes) => outcomes.len(),
        }
    }

    /// Return `true` if the space holds no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if the space is a Cartesian product.
    #[must_use]
    pub const fn is_cartesian(&self) -> bool {
        matches!(self, Self::Cartesian(_))
    }

    /// Return `true` if the outcome belongs to the space.
    #[must_use]
    pub fn contains(&self, outcome: &[S]) -> bool {
        match self {
            Self::Cartesian(product) => product.index_of(outcome).is_some(),
            Self::Explicit(outcomes) => outcomes
                .binary_search_by(|probe| probe.as_slice().cmp(outcome))
                .is_ok(),
        }
    }

    /// All outcomes in canonical order.
    #[must_use]
    pub fn outcomes(&self) -> Vec<Outcome<S>> {
        match self {
            Self::Cartesian(product) => product.iter().collect(),
            Self::Explicit(outcomes) => outcomes.clone(),
        }
    }

    /// Symbols observed for each variable, sorted.
    #[must_use]
    pub fn alphabets(&self) -> Vec<Vec<S>> {
        match self {
            Self::Cartesian(product) => product.alphabets().to_vec(),
            Self::Explicit(outcomes) => {
                let n = outcomes.first().map_or(0, Vec::len);
                (0..n)
                    .map(|i| {
                        let mut alphabet: Vec<S> =
                            outcomes.iter().map(|outcome| outcome[i].clone()).collect();
                        alphabet.sort();
                        alphabet.dedup();
                        alphabet
                    })
                    .collect()
            }
        }
    }
}
