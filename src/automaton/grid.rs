//! Grid initialization, toroidal cell access and neighbor counting.

use super::rule::{CellState, Rule};
use crate::error::{EngineError, Result};

/// Default number of rows.
pub const ROWS: usize = 64;
/// Default number of columns.
pub const COLS: usize = 64;

/// A rectangular, row-major array of cell states whose opposite edges touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

/// Number of cells in a `rows x cols` grid, if such a grid can exist.
fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::EmptyGrid { rows, cols });
    }
    // a Vec never holds more than isize::MAX bytes
    rows.checked_mul(cols)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(EngineError::GridTooLarge { rows, cols })
}

impl Grid {
    /// Build a grid from existing row-major cells.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Grid> {
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(EngineError::CellCount {
                expected,
                got: cells.len(),
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Build a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Grid> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(EngineError::ShapeMismatch {
                expected_rows: rows.len(),
                expected_cols: cols,
                rows: rows.len(),
                cols: bad.len(),
            });
        }
        Grid::from_cells(rows.len(), cols, rows.concat())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterate over the grid one row at a time.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols)
    }

    #[inline]
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Get a cell, or None outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        in_bounds(self, row, col).then(|| self.cells[index_of(self, row, col)])
    }

    /// Set a cell without checking it against a rule.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        if !in_bounds(self, row, col) {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = index_of(self, row, col);
        self.cells[idx] = state;
        Ok(())
    }

    /// Reset every cell to state 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

/// Create an all-zero grid with the given dimensions.
pub fn new_grid(rows: usize, cols: usize) -> Result<Grid> {
    let len = cell_count(rows, cols)?;
    Grid::from_cells(rows, cols, vec![0; len])
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(grid: &Grid, row: usize, col: usize) -> usize {
    row * grid.cols + col
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, row: usize, col: usize) -> bool {
    row < grid.rows && col < grid.cols
}

/// Offset `value` by `delta` modulo `size`, always landing in `[0, size)`.
#[inline]
pub fn wrap(value: usize, delta: isize, size: usize) -> usize {
    (value as isize + delta).rem_euclid(size as isize) as usize
}

/// Count the eight toroidal neighbors of `(row, col)` by state.
///
/// `histogram` is zeroed first; afterwards `histogram[s]` holds the number of
/// neighbors in state `s` and the entries sum to 8. Every neighbor state must
/// index into `histogram`.
pub fn neighbor_histogram(grid: &Grid, row: usize, col: usize, histogram: &mut [u8]) {
    histogram.fill(0);

    for dr in -1..=1 {
        let r = wrap(row, dr, grid.rows);
        for dc in -1..=1 {
            // Skip the center cell
            if dr == 0 && dc == 0 {
                continue;
            }
            let c = wrap(col, dc, grid.cols);
            histogram[grid.cells[index_of(grid, r, c)] as usize] += 1;
        }
    }
}

/// Fail on the first cell whose state the rule does not define.
pub fn validate(grid: &Grid, rule: Rule) -> Result<()> {
    let num_states = rule.num_states();
    match grid
        .cells
        .iter()
        .position(|&state| state as usize >= num_states)
    {
        Some(idx) => Err(EngineError::InvalidCellState {
            row: idx / grid.cols,
            col: idx % grid.cols,
            state: grid.cells[idx],
            num_states,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rule::MAX_STATES;
    use proptest::prelude::*;

    fn histogram_at(grid: &Grid, row: usize, col: usize) -> [u8; MAX_STATES] {
        let mut histogram = [0; MAX_STATES];
        neighbor_histogram(grid, row, col, &mut histogram);
        histogram
    }

    #[test]
    fn test_new_grid() {
        let grid = new_grid(ROWS, COLS).unwrap();
        assert_eq!(grid.rows(), 64);
        assert_eq!(grid.cols(), 64);
        assert_eq!(grid.cells().len(), 4096);
        assert!(grid.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_new_grid_rejects_empty() {
        assert_eq!(
            new_grid(0, 8),
            Err(EngineError::EmptyGrid { rows: 0, cols: 8 })
        );
        assert!(new_grid(8, 0).is_err());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 0), Some(1));
        assert_eq!(grid.iter_rows().nth(1).unwrap(), &[1, 1, 0]);

        assert!(Grid::from_rows(&[vec![0, 1], vec![1]]).is_err());
        assert_eq!(
            Grid::from_cells(2, 2, vec![0; 3]),
            Err(EngineError::CellCount {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert_eq!(
            new_grid(usize::MAX, 2),
            Err(EngineError::GridTooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(
            Grid::from_cells(usize::MAX, 2, vec![]),
            Err(EngineError::GridTooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        // fits in usize but not in a Vec
        assert!(matches!(
            new_grid(usize::MAX / 2 + 1, 1),
            Err(EngineError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_index_of() {
        let grid = new_grid(4, 5).unwrap();
        assert_eq!(index_of(&grid, 0, 0), 0);
        assert_eq!(index_of(&grid, 0, 1), 1);
        assert_eq!(index_of(&grid, 1, 0), 5);
        assert_eq!(index_of(&grid, 3, 4), 19);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = new_grid(4, 4).unwrap();
        grid.set(3, 2, 1).unwrap();
        assert_eq!(grid.get(3, 2), Some(1));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(
            grid.set(0, 4, 1),
            Err(EngineError::OutOfBounds {
                row: 0,
                col: 4,
                rows: 4,
                cols: 4
            })
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 64), 63);
        assert_eq!(wrap(63, 1, 64), 0);
        assert_eq!(wrap(10, 1, 64), 11);
        assert_eq!(wrap(0, 0, 1), 0);
        assert_eq!(wrap(0, -1, 1), 0);
    }

    #[test]
    fn test_corner_sees_opposite_corner() {
        let mut grid = new_grid(ROWS, COLS).unwrap();
        grid.set(ROWS - 1, COLS - 1, 1).unwrap();

        assert_eq!(histogram_at(&grid, 0, 0)[1], 1);
        assert_eq!(histogram_at(&grid, 0, COLS - 2)[1], 1);
        assert_eq!(histogram_at(&grid, ROWS - 2, 0)[1], 1);
        assert_eq!(histogram_at(&grid, ROWS - 1, 0)[1], 1);
        assert_eq!(histogram_at(&grid, 0, COLS - 1)[1], 1);
        // not adjacent even with wrapping
        assert_eq!(histogram_at(&grid, 1, 1)[1], 0);
    }

    #[test]
    fn test_edges_wrap() {
        let mut grid = new_grid(8, 8).unwrap();
        grid.set(0, 4, 1).unwrap();
        grid.set(4, 0, 2).unwrap();

        // top edge wraps to bottom
        assert_eq!(histogram_at(&grid, 7, 4)[1], 1);
        assert_eq!(histogram_at(&grid, 7, 3)[1], 1);
        // left edge wraps to right
        assert_eq!(histogram_at(&grid, 4, 7)[2], 1);
        assert_eq!(histogram_at(&grid, 5, 7)[2], 1);
    }

    #[test]
    fn test_histogram_cross() {
        let mut grid = new_grid(8, 8).unwrap();
        for (r, c) in [(4, 4), (3, 4), (5, 4), (4, 3), (4, 5)] {
            grid.set(r, c, 1).unwrap();
        }

        assert_eq!(histogram_at(&grid, 4, 4), [4, 4, 0, 0]);
        assert_eq!(histogram_at(&grid, 3, 3), [5, 3, 0, 0]);
        assert_eq!(histogram_at(&grid, 0, 0), [8, 0, 0, 0]);
    }

    #[test]
    fn test_histogram_tiny_grid_counts_self_images() {
        // On a 1x1 torus every neighbor is the cell itself.
        let mut grid = new_grid(1, 1).unwrap();
        grid.set(0, 0, 1).unwrap();
        assert_eq!(histogram_at(&grid, 0, 0), [0, 8, 0, 0]);
    }

    #[test]
    fn test_validate() {
        let mut grid = new_grid(4, 4).unwrap();
        grid.set(2, 3, 2).unwrap();
        assert!(validate(&grid, Rule::BriansBrain).is_ok());
        assert_eq!(
            validate(&grid, Rule::GameOfLife),
            Err(EngineError::InvalidCellState {
                row: 2,
                col: 3,
                state: 2,
                num_states: 2
            })
        );
    }

    proptest! {
        #[test]
        fn prop_histogram_sums_to_eight(
            rows in 1usize..12,
            cols in 1usize..12,
            seed in proptest::collection::vec(0u8..4, 144),
        ) {
            let cells = seed[..rows * cols].to_vec();
            let grid = Grid::from_cells(rows, cols, cells).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    let total: u32 = histogram_at(&grid, row, col).iter().map(|&n| n as u32).sum();
                    prop_assert_eq!(total, 8);
                }
            }
        }
    }
}
