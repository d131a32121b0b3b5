//! Rule registry queries and rule switching.
//!
//! Strings are copied into caller-owned buffers. Passing a null buffer
//! returns the full byte length so the caller can size one.

use tracing::warn;

use crate::automaton::{Engine, Rule};

/// Copy `text` into `out_buf` as a nul-terminated string, truncating if needed.
unsafe fn write_str(text: &str, out_buf: *mut u8, len: u64) -> u64 {
    if out_buf.is_null() || len == 0 {
        return text.len() as u64;
    }
    let n = text.len().min(len as usize - 1);
    let out = std::slice::from_raw_parts_mut(out_buf, n + 1);
    out[..n].copy_from_slice(&text.as_bytes()[..n]);
    out[n] = 0;
    n as u64
}

/// Number of registered rules.
#[no_mangle]
pub extern "C" fn ca_rule_count() -> u32 {
    Rule::ALL.len() as u32
}

/// Number of states of rule `index`, or 0 for an unknown index.
#[no_mangle]
pub extern "C" fn ca_rule_state_count(index: u32) -> u32 {
    Rule::from_index(index as usize).map_or(0, |rule| rule.num_states() as u32)
}

/// Writes the display name of rule `index`.
///
/// # Safety
/// - `out_buf` must be null or point to at least `len` writable bytes
///
/// # Returns
/// Bytes written excluding the terminator, the full length if `out_buf` is
/// null, or 0 for an unknown index.
#[no_mangle]
pub unsafe extern "C" fn ca_rule_name(index: u32, out_buf: *mut u8, len: u64) -> u64 {
    match Rule::from_index(index as usize) {
        Ok(rule) => write_str(rule.name(), out_buf, len),
        Err(_) => 0,
    }
}

/// Writes the label of `state` under rule `index`.
///
/// # Safety
/// - `out_buf` must be null or point to at least `len` writable bytes
#[no_mangle]
pub unsafe extern "C" fn ca_rule_state_name(
    index: u32,
    state: u8,
    out_buf: *mut u8,
    len: u64,
) -> u64 {
    let Ok(rule) = Rule::from_index(index as usize) else {
        return 0;
    };
    match rule.states().get(state as usize) {
        Some(label) => write_str(label.name, out_buf, len),
        None => 0,
    }
}

/// Writes the `#rrggbb` color hint of `state` under rule `index`.
///
/// # Safety
/// - `out_buf` must be null or point to at least `len` writable bytes
#[no_mangle]
pub unsafe extern "C" fn ca_rule_state_color(
    index: u32,
    state: u8,
    out_buf: *mut u8,
    len: u64,
) -> u64 {
    let Ok(rule) = Rule::from_index(index as usize) else {
        return 0;
    };
    match rule.states().get(state as usize) {
        Some(label) => write_str(label.color, out_buf, len),
        None => 0,
    }
}

/// Registry index of the engine's active rule, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_get_rule(ptr: *const Engine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).rule().index() as u32
}

/// Switches the active rule. The grid is cleared and the generation reset.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or unknown index).
#[no_mangle]
pub unsafe extern "C" fn ca_set_rule(ptr: *mut Engine, index: u32) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    match Rule::from_index(index as usize) {
        Ok(rule) => {
            (*ptr).set_rule(rule);
            0
        }
        Err(e) => {
            warn!(error = %e, "ca_set_rule rejected");
            1
        }
    }
}
