//! Owner of the double buffer.
//!
//! The engine holds the current grid, a scratch grid of the same shape, the
//! rule both are evaluated under, and a generation counter. Play/pause and
//! tick rate belong to whoever drives it.

use tracing::{debug, trace};

use super::grid::{in_bounds, new_grid, validate, Grid};
use super::rule::{CellState, Rule};
use super::stepping::{step_into, step_parallel};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

pub struct Engine {
    /// Generation N, read-only between steps.
    current: Grid,

    /// Scratch buffer for generation N+1; contents are meaningless between steps.
    next: Grid,

    rule: Rule,
    generation: u64,

    /// Present only when more than one worker thread is configured.
    thread_pool: Option<rayon::ThreadPool>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        debug!(
            rows = config.rows,
            cols = config.cols,
            rule = %config.rule,
            threads = config.threads,
            "creating engine"
        );

        Ok(Engine {
            current: new_grid(config.rows, config.cols)?,
            next: new_grid(config.rows, config.cols)?,
            rule: config.rule,
            generation: 0,
            thread_pool,
        })
    }

    /// Single-threaded engine with the given rule and dimensions.
    pub fn with_rule(rule: Rule, rows: usize, cols: usize) -> Result<Self> {
        Engine::new(EngineConfig {
            rows,
            cols,
            rule,
            threads: 1,
        })
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.current.cols()
    }

    /// Number of worker threads used per step.
    pub fn threads(&self) -> usize {
        self.thread_pool
            .as_ref()
            .map_or(1, rayon::ThreadPool::current_num_threads)
    }

    /// Advance one generation and swap the buffers.
    pub fn step(&mut self) -> Result<()> {
        match &self.thread_pool {
            Some(pool) => step_parallel(&self.current, &mut self.next, self.rule, pool)?,
            None => step_into(&self.current, &mut self.next, self.rule)?,
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
        Ok(())
    }

    /// Advance `generations` steps, stopping at the first error.
    pub fn step_n(&mut self, generations: u64) -> Result<()> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }

    /// Switch to another rule.
    ///
    /// State indices mean different things under different rules, so the
    /// grid is cleared and the generation counter restarts.
    pub fn set_rule(&mut self, rule: Rule) {
        debug!(from = %self.rule, to = %rule, "switching rule");
        self.rule = rule;
        self.reset();
    }

    /// Clear the grid to state 0 and restart the generation counter.
    pub fn reset(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
        debug!("grid reset");
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<CellState> {
        self.current.get(row, col).ok_or(EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Paint a single cell. The state must be valid for the active rule.
    pub fn set_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        if !in_bounds(&self.current, row, col) {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let num_states = self.rule.num_states();
        if state as usize >= num_states {
            return Err(EngineError::InvalidCellState {
                row,
                col,
                state,
                num_states,
            });
        }
        self.current.set(row, col, state)
    }

    /// Replace the current grid. The grid must match the engine's shape and
    /// hold only states of the active rule.
    pub fn load(&mut self, grid: Grid) -> Result<()> {
        if !grid.same_shape(&self.current) {
            return Err(EngineError::ShapeMismatch {
                expected_rows: self.rows(),
                expected_cols: self.cols(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        validate(&grid, self.rule)?;
        self.current = grid;
        self.generation = 0;
        debug!(rule = %self.rule, "grid loaded");
        Ok(())
    }

    pub(crate) fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }
}
