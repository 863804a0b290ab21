//! Configuration for the RPN calculator module.

use serde::{Deserialize, Serialize};

/// Configuration for the RPN calculator module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RpnCalcConfig {
    /// Maximum number of live calculators. `None` means unbounded.
    pub max_calculators: Option<usize>,

    /// Maximum number of values on one calculator's stack. `None` means unbounded.
    pub max_stack_depth: Option<usize>,

    /// Initial capacity of the registry table.
    /// Default: 8
    pub initial_table_capacity: usize,
}

impl Default for RpnCalcConfig {
    fn default() -> Self {
        Self {
            max_calculators: None,
            max_stack_depth: None,
            initial_table_capacity: 8,
        }
    }
}
