//! Region extraction and import FFI functions.

use tracing::warn;

use crate::automaton::{self, Engine};

/// Number of cells in the half-open rectangle, before clamping to the grid.
fn region_len(min_row: i32, min_col: i32, max_row: i32, max_col: i32) -> usize {
    let height = (max_row.max(0) - min_row.max(0)).max(0) as usize;
    let width = (max_col.max(0) - min_col.max(0)).max(0) as usize;
    width * height
}

/// Extracts a rectangle of cells into a flat output buffer.
///
/// # Layout
/// Row-major (row changes slowest, column fastest). Coordinates are clamped
/// to the grid. This matches the layout expected by `ca_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ca_extract_region(
    ptr: *const Engine,
    out_buf: *mut u8,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let len = region_len(min_row, min_col, max_row, max_col);
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, len);
    automaton::extract_region(
        engine,
        buf_slice,
        min_row.max(0) as usize,
        min_col.max(0) as usize,
        max_row.max(0) as usize,
        max_col.max(0) as usize,
    ) as u64
}

/// Imports a rectangle of cells from a flat buffer.
///
/// # Layout
/// Same as `ca_extract_region`, with rows laid out at the clamped width.
/// Every value must be a state of the active rule; if any is not, nothing is
/// written.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ca_import_region(
    ptr: *mut Engine,
    in_buf: *const u8,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let len = region_len(min_row, min_col, max_row, max_col);
    let buf_slice = std::slice::from_raw_parts(in_buf, len);
    match automaton::import_region(
        engine,
        buf_slice,
        min_row.max(0) as usize,
        min_col.max(0) as usize,
        max_row.max(0) as usize,
        max_col.max(0) as usize,
    ) {
        Ok(n) => n as u64,
        Err(e) => {
            warn!(error = %e, "ca_import_region rejected");
            0
        }
    }
}
