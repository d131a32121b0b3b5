//! Cell Automata - 2D toroidal cellular automaton engine
//!
//! A fixed-size grid of cell states evolves one generation at a time under
//! one of five rules (Game of Life, Day and Night, Seeds, Brian's Brain,
//! Wireworld). Stepping is double-buffered and reads only the previous
//! generation, so the result never depends on cell iteration order.
//!
//! Rust callers use [`automaton`] directly; hosts in other languages go
//! through the C ABI in [`ffi`].
//!
//! ```
//! use cell_automata::automaton::{new_grid, step, Rule};
//!
//! let mut current = new_grid(8, 8)?;
//! let mut next = new_grid(8, 8)?;
//! for col in 3..6 {
//!     current.set(4, col, 1)?;
//! }
//! (current, next) = step(current, next, Rule::GameOfLife)?;
//! assert_eq!(current.get(3, 4), Some(1));
//! # let _ = next;
//! # Ok::<(), cell_automata::EngineError>(())
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;

pub use automaton::{Engine, Grid, Rule};
pub use config::EngineConfig;
pub use error::{EngineError, Result};

#[cfg(test)]
mod tests;
