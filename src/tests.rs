//! Driver-level sessions through the C ABI.

use crate::ffi::*;
use std::ptr;

const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

unsafe fn snapshot(engine: *const crate::Engine) -> Vec<u8> {
    let rows = ca_rows(engine) as i32;
    let cols = ca_cols(engine) as i32;
    let mut buffer = vec![0u8; (rows * cols) as usize];
    let written = ca_extract_region(engine, buffer.as_mut_ptr(), 0, 0, rows, cols);
    assert_eq!(written as usize, buffer.len());
    buffer
}

#[test]
fn test_session_glider_crosses_corner() {
    unsafe {
        let engine = ca_create(0, 64, 64, 1);
        assert!(!engine.is_null());

        // Start the glider straddling the bottom-right corner.
        assert_eq!(ca_set_cell(engine, 64, 0, 1), 1);
        for (r, c) in GLIDER {
            assert_eq!(ca_set_cell(engine, (r + 62) % 64, (c + 62) % 64, 1), 0);
        }

        for _ in 0..4 {
            assert_eq!(ca_step(engine), 0);
        }
        assert_eq!(ca_get_generation(engine), 4);

        let cells = snapshot(engine);
        assert_eq!(cells.iter().filter(|&&c| c == 1).count(), 5);
        for (r, c) in GLIDER {
            let (r, c) = ((r + 63) % 64, (c + 63) % 64);
            assert_eq!(ca_get_cell(engine, r, c), 1, "({r}, {c})");
        }

        ca_destroy(engine);
    }
}

#[test]
fn test_session_parallel_matches_sequential() {
    unsafe {
        let sequential = ca_create(3, 64, 64, 1);
        let parallel = ca_create(3, 64, 64, 4);

        let mut seed = 12345u32;
        let mut cells = vec![0u8; 64 * 64];
        for cell in cells.iter_mut() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            *cell = ((seed >> 16) % 3) as u8;
        }
        for engine in [sequential, parallel] {
            assert_eq!(ca_import_region(engine, cells.as_ptr(), 0, 0, 64, 64), 4096);
            for _ in 0..10 {
                assert_eq!(ca_step(engine), 0);
            }
        }

        assert_eq!(snapshot(sequential), snapshot(parallel));

        ca_destroy(sequential);
        ca_destroy(parallel);
    }
}

#[test]
fn test_session_rule_switch_clears_stale_states() {
    unsafe {
        let engine = ca_create(4, 16, 16, 1);

        // A Wireworld loop leaves states 1..3 on the board.
        for c in 2..10 {
            ca_set_cell(engine, 5, c, 3);
        }
        ca_set_cell(engine, 5, 2, 1);
        ca_step(engine);
        assert!(snapshot(engine).iter().any(|&c| c > 1));

        // Game of Life has only two states; nothing stale may survive.
        assert_eq!(ca_set_rule(engine, 0), 0);
        assert!(snapshot(engine).iter().all(|&c| c == 0));
        assert_eq!(ca_get_generation(engine), 0);
        assert_eq!(ca_set_cell(engine, 1, 1, 3), 1);
        assert_eq!(ca_step(engine), 0);

        ca_destroy(engine);
    }
}

#[test]
fn test_session_save_and_reload() {
    unsafe {
        let engine = ca_create(3, 32, 32, 1);
        for (r, c) in [(10, 10), (10, 11), (11, 12), (20, 3)] {
            ca_set_cell(engine, r, c, 1);
        }
        for _ in 0..7 {
            ca_step(engine);
        }
        let saved = snapshot(engine);

        let restored = ca_create(3, 32, 32, 1);
        assert_eq!(ca_import_region(restored, saved.as_ptr(), 0, 0, 32, 32), 1024);
        assert_eq!(snapshot(restored), saved);

        ca_step(engine);
        ca_step(restored);
        assert_eq!(snapshot(engine), snapshot(restored));

        ca_destroy(engine);
        ca_destroy(restored);
    }
}

#[test]
fn test_session_null_handles() {
    unsafe {
        assert_eq!(ca_step(ptr::null_mut()), 1);
        assert_eq!(ca_set_rule(ptr::null_mut(), 1), 1);
        assert_eq!(ca_get_cell(ptr::null(), 0, 0), 0);
        assert_eq!(ca_rows(ptr::null()), 0);
        ca_destroy(ptr::null_mut());
    }
}
