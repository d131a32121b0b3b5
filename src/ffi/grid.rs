//! Cell access, stepping and reset.

use tracing::warn;

use crate::automaton::Engine;

/// Sets a cell to `state`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer, out of bounds, or a state the
/// active rule does not define).
#[no_mangle]
pub unsafe extern "C" fn ca_set_cell(ptr: *mut Engine, row: i32, col: i32, state: u8) -> i32 {
    if ptr.is_null() || row < 0 || col < 0 {
        return 1;
    }

    let engine = &mut *ptr;
    match engine.set_cell(row as usize, col as usize, state) {
        Ok(()) => 0,
        Err(e) => {
            warn!(error = %e, "ca_set_cell rejected");
            1
        }
    }
}

/// Gets the state of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The cell state, or 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ca_get_cell(ptr: *const Engine, row: i32, col: i32) -> u8 {
    if ptr.is_null() || row < 0 || col < 0 {
        return 0;
    }

    let engine = &*ptr;
    engine.get_cell(row as usize, col as usize).unwrap_or(0)
}

/// Advances the automaton by one generation under the active rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on failure. The grid is unchanged on failure.
#[no_mangle]
pub unsafe extern "C" fn ca_step(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let engine = &mut *ptr;
    match engine.step() {
        Ok(()) => 0,
        Err(e) => {
            warn!(error = %e, "ca_step rejected");
            1
        }
    }
}

/// Clears every cell to state 0 and resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_reset(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).reset();
}
