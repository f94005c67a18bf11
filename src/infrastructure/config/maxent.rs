//! Marginal order selection.

use serde::{Deserialize, Serialize};

/// Settings for the multi-order decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MaxentConfig {
    /// Highest marginal order to compute. Defaults to the number of
    /// variables of the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_max: Option<usize>,
}
