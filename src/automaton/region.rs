//! Region extraction and import operations.
//!
//! Renderers read cells out through [`extract_region`]; loaders write them
//! back through [`import_region`]. Both use the same flat row-major layout,
//! so any grid round-trips through them unchanged.

use super::engine::Engine;
use super::grid::index_of;
use crate::error::{EngineError, Result};

/// Clamp a half-open rectangle to the grid. Returns None if it is empty.
fn clamp_region(
    engine: &Engine,
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> Option<(usize, usize, usize, usize)> {
    let max_row = max_row.min(engine.rows());
    let max_col = max_col.min(engine.cols());

    if min_row >= max_row || min_col >= max_col {
        return None;
    }
    Some((min_row, min_col, max_row, max_col))
}

/// Copy a rectangle of the current grid into a flat buffer.
///
/// # Layout
/// Row-major: row changes slowest, column fastest. The rectangle is clamped
/// to the grid before copying.
///
/// # Returns
/// Number of bytes written, or 0 if the clamped region is empty or the
/// buffer is too small.
pub fn extract_region(
    engine: &Engine,
    out_buf: &mut [u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> usize {
    let Some((min_row, min_col, max_row, max_col)) =
        clamp_region(engine, min_row, min_col, max_row, max_col)
    else {
        return 0;
    };

    let width = max_col - min_col;
    let total_size = width * (max_row - min_row);
    if out_buf.len() < total_size {
        return 0;
    }

    let grid = engine.current();
    for (out_row, row) in out_buf[..total_size]
        .chunks_mut(width)
        .zip(min_row..max_row)
    {
        let start = index_of(grid, row, min_col);
        out_row.copy_from_slice(&grid.cells()[start..start + width]);
    }

    total_size
}

/// Write a flat buffer into a rectangle of the current grid.
///
/// # Layout
/// Same as [`extract_region`]: rows are read at the clamped width. Every
/// value is checked against the active rule first; nothing is written if any
/// of them is out of range.
///
/// # Returns
/// Number of bytes read. Ok(0) if the clamped region is empty.
pub fn import_region(
    engine: &mut Engine,
    in_buf: &[u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> Result<usize> {
    let Some((min_row, min_col, max_row, max_col)) =
        clamp_region(engine, min_row, min_col, max_row, max_col)
    else {
        return Ok(0);
    };

    let width = max_col - min_col;
    let height = max_row - min_row;
    let total_size = width * height;
    if in_buf.len() < total_size {
        return Err(EngineError::CellCount {
            expected: total_size,
            got: in_buf.len(),
        });
    }

    let num_states = engine.rule().num_states();
    if let Some(offset) = in_buf[..total_size]
        .iter()
        .position(|&state| state as usize >= num_states)
    {
        return Err(EngineError::InvalidCellState {
            row: min_row + offset / width,
            col: min_col + offset % width,
            state: in_buf[offset],
            num_states,
        });
    }

    let grid = engine.current_mut();
    for (in_row, row) in in_buf[..total_size].chunks(width).zip(min_row..max_row) {
        let start = index_of(grid, row, min_col);
        grid.cells_mut()[start..start + width].copy_from_slice(in_row);
    }

    Ok(total_size)
}
