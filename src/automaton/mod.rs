//! Core automaton logic and grid operations.
//!
//! This module contains the rules, the toroidal grid, double-buffered
//! stepping and region transfer. The FFI layer in `ffi/` calls into it.

pub mod engine;
pub mod grid;
pub mod region;
pub mod rule;
pub mod stepping;

pub use engine::Engine;
pub use grid::{
    in_bounds, index_of, neighbor_histogram, new_grid, validate, wrap, Grid, COLS, ROWS,
};
pub use region::{extract_region, import_region};
pub use rule::{CellState, Rule, StateLabel, MAX_STATES};
pub use stepping::{step, step_into, step_parallel};
