//! Error types for grid construction, stepping and cell access.

use thiserror::Error;

/// Errors reported by the engine. All of them are raised before any buffer
/// is written, so a rejected call never leaves a half-updated grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The scratch buffer does not have the same shape as the current grid.
    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A cell holds a state the active rule does not define.
    #[error("invalid cell state {state} at ({row}, {col}): rule has {num_states} states")]
    InvalidCellState {
        row: usize,
        col: usize,
        state: u8,
        num_states: usize,
    },

    /// A grid needs at least one row and one column.
    #[error("grid must be non-empty, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// The cell count of a grid does not fit in memory.
    #[error("grid of {rows}x{cols} cells is too large")]
    GridTooLarge { rows: usize, cols: usize },

    /// A flat cell buffer has the wrong length.
    #[error("expected {expected} cells, got {got}")]
    CellCount { expected: usize, got: usize },

    /// Cell coordinates outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// No rule with this name is registered.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// No rule at this registry index.
    #[error("rule index {0} out of range")]
    RuleIndex(usize),

    /// Configuration value rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The rayon pool could not be built.
    #[error("thread pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
