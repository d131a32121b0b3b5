//! C FFI layer for host drivers.
//!
//! This module exports C ABI functions so a UI written in any language can
//! hold an engine handle, paint cells, switch rules and step.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod rule;

pub use grid::{ca_get_cell, ca_reset, ca_set_cell, ca_step};
pub use lifecycle::{ca_cols, ca_create, ca_destroy, ca_get_generation, ca_rows};
pub use region::{ca_extract_region, ca_import_region};
pub use rule::{
    ca_get_rule, ca_rule_count, ca_rule_name, ca_rule_state_color, ca_rule_state_count,
    ca_rule_state_name, ca_set_rule,
};
