//! Double-buffered generation stepping.
//!
//! Every step reads only from `current` and writes every cell of `next`, so a
//! cell never sees a neighbor that was already updated in the same
//! generation and the result does not depend on iteration order.

use rayon::prelude::*;

use super::grid::{neighbor_histogram, validate, Grid};
use super::rule::{Rule, MAX_STATES};
use crate::error::{EngineError, Result};

/// Reject the step before any write if the buffers or states don't fit.
fn check_step(current: &Grid, next: &Grid, rule: Rule) -> Result<()> {
    if !current.same_shape(next) {
        return Err(EngineError::ShapeMismatch {
            expected_rows: current.rows(),
            expected_cols: current.cols(),
            rows: next.rows(),
            cols: next.cols(),
        });
    }
    validate(current, rule)
}

/// Write the next generation of one row into `out`.
fn step_row(current: &Grid, rule: Rule, row: usize, out: &mut [u8]) {
    let mut histogram = [0u8; MAX_STATES];
    let row_start = row * current.cols();

    for (col, cell) in out.iter_mut().enumerate() {
        neighbor_histogram(current, row, col, &mut histogram);
        *cell = rule.transition(&histogram, current.cells()[row_start + col]);
    }
}

/// Compute the next generation of `current` into `next`.
///
/// `next` must have the same shape as `current`; its previous contents are
/// fully overwritten.
pub fn step_into(current: &Grid, next: &mut Grid, rule: Rule) -> Result<()> {
    check_step(current, next, rule)?;

    let cols = current.cols();
    for (row, out) in next.cells_mut().chunks_mut(cols).enumerate() {
        step_row(current, rule, row, out);
    }
    Ok(())
}

/// Same as [`step_into`], with rows distributed across `pool`.
///
/// Each worker owns a disjoint row of `next` and reads the immutable
/// `current`, so no locking is needed and the output matches the sequential
/// step exactly.
pub fn step_parallel(
    current: &Grid,
    next: &mut Grid,
    rule: Rule,
    pool: &rayon::ThreadPool,
) -> Result<()> {
    check_step(current, next, rule)?;

    let cols = current.cols();
    pool.install(|| {
        next.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| step_row(current, rule, row, out));
    });
    Ok(())
}

/// Advance one generation, swapping buffer roles.
///
/// Returns `(new_current, new_next)`: the freshly written buffer and the old
/// current grid, which the caller passes back as scratch on the next call.
/// On error both buffers are dropped unchanged; use [`step_into`] to keep them.
pub fn step(current: Grid, mut next: Grid, rule: Rule) -> Result<(Grid, Grid)> {
    step_into(&current, &mut next, rule)?;
    Ok((next, current))
}
