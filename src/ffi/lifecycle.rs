//! Engine creation, destruction, and generation queries.

use tracing::warn;

use crate::automaton::{Engine, Rule};
use crate::config::EngineConfig;

/// Creates a new engine and returns an opaque pointer.
///
/// `threads` of 0 or 1 steps on the calling thread.
///
/// # Returns
/// A pointer to a new Engine, or null if the rule index, dimensions or
/// thread count are rejected.
///
/// # Safety
/// The returned pointer must eventually be freed with `ca_destroy()`.
#[no_mangle]
pub extern "C" fn ca_create(rule_index: u32, rows: u32, cols: u32, threads: u8) -> *mut Engine {
    let rule = match Rule::from_index(rule_index as usize) {
        Ok(rule) => rule,
        Err(e) => {
            warn!(error = %e, "ca_create rejected");
            return std::ptr::null_mut();
        }
    };
    let config = EngineConfig {
        rows: rows as usize,
        cols: cols as usize,
        rule,
        threads: threads as usize,
    };

    match Engine::new(config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(e) => {
            warn!(error = %e, "ca_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ca_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ca_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ca_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Number of grid rows, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_rows(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).rows() as u32
}

/// Number of grid columns, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_cols(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).cols() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let engine = ca_create(0, 64, 64, 1);
            assert!(!engine.is_null());
            assert_eq!(ca_rows(engine), 64);
            assert_eq!(ca_cols(engine), 64);

            // Should not crash
            ca_destroy(engine);
        }
    }

    #[test]
    fn test_create_rejects_bad_arguments() {
        assert!(ca_create(5, 8, 8, 1).is_null());
        assert!(ca_create(0, 0, 8, 1).is_null());
        assert!(ca_create(0, 8, 0, 1).is_null());
        assert!(ca_create(0, 8, 8, 65).is_null());
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let engine = ca_create(4, 8, 8, 2);
            assert_eq!(ca_get_generation(engine), 0);
            ca_destroy(engine);
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            // Should not crash
            ca_destroy(ptr::null_mut());
            assert_eq!(ca_get_generation(ptr::null()), 0);
            assert_eq!(ca_rows(ptr::null()), 0);
            assert_eq!(ca_cols(ptr::null()), 0);
        }
    }
}
