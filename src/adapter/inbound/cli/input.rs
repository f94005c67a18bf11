//! Distribution files.
//!
//! Two JSON layouts are accepted:
//!
//! ```json
//! {"outcomes": ["00", "11"], "pmf": [0.5, 0.5]}
//! {"outcomes": [["a", "b"], ["b", "a"]], "pmf": [0.5, 0.5]}
//! {"data": "0001110111", "length": 3}
//! ```
//!
//! A string outcome is read one character per variable. The `data` layout
//! estimates the distribution of overlapping `length`-symbol words.

use std::path::Path;

use serde::Deserialize;

use crate::domain::counts::distribution_from_data;
use crate::domain::distribution::Distribution;
use crate::error::Result;

/// Symbols as they appear in a distribution file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SymbolsRepr {
    /// One string per symbol.
    Symbols(Vec<String>),
    /// One character per symbol.
    Word(String),
}

impl SymbolsRepr {
    fn into_symbols(self) -> Vec<String> {
        match self {
            Self::Symbols(symbols) => symbols,
            Self::Word(word) => word.chars().map(String::from).collect(),
        }
    }
}

/// On-disk representation of a distribution.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DistributionFile {
    /// Explicit outcomes with their masses.
    Pmf {
        outcomes: Vec<SymbolsRepr>,
        pmf: Vec<f64>,
    },
    /// A symbol sequence to estimate word frequencies from.
    Data { data: SymbolsRepr, length: usize },
}

impl DistributionFile {
    /// Build the validated distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcomes or masses violate distribution
    /// invariants.
    pub fn into_distribution(self) -> Result<Distribution<String>> {
        let dist = match self {
            Self::Pmf { outcomes, pmf } => Distribution::new(
                outcomes.into_iter().map(SymbolsRepr::into_symbols).collect(),
                pmf,
            )?,
            Self::Data { data, length } => distribution_from_data(&data.into_symbols(), length)?,
        };
        Ok(dist)
    }
}

/// Parse a distribution from JSON text.
///
/// # Errors
///
/// Returns an error for malformed JSON or an invalid distribution.
pub fn parse_distribution(content: &str) -> Result<Distribution<String>> {
    let file: DistributionFile = serde_json::from_str(content)?;
    file.into_distribution()
}

/// Read and parse a distribution file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_distribution(path: &Path) -> Result<Distribution<String>> {
    let content = std::fs::read_to_string(path)?;
    parse_distribution(&content)
}

/// Render an outcome compactly: concatenated when every symbol is one
/// character, comma-separated otherwise.
#[must_use]
pub fn format_outcome(outcome: &[String]) -> String {
    if outcome.iter().all(|s| s.chars().count() == 1) {
        outcome.concat()
    } else {
        outcome.join(",")
    }
}
