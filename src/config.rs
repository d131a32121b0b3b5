//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::automaton::grid::{COLS, ROWS};
use crate::automaton::rule::Rule;
use crate::error::{EngineError, Result};

/// Upper bound on the worker pool size.
pub const MAX_THREADS: usize = 64;

/// Static configuration for an [`Engine`](crate::automaton::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Automaton the grid is evaluated under.
    pub rule: Rule,
    /// Worker threads for stepping; 0 or 1 steps on the calling thread.
    pub threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            rule: Rule::GameOfLife,
            threads: 1,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(EngineError::InvalidConfig("rows must be positive"));
        }
        if self.cols == 0 {
            return Err(EngineError::InvalidConfig("cols must be positive"));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(EngineError::InvalidConfig("rows * cols overflows"));
        }
        if self.threads > MAX_THREADS {
            return Err(EngineError::InvalidConfig("threads must be at most 64"));
        }
        Ok(())
    }
}
