//! Bucketed stage clock: per-stage accounting broken down by (x, y, z).
//!
//! The z axis selects one of several independent 2D grids; within a grid,
//! each stage owns a `num_y × num_x` plane of accumulators. Exactly one
//! (stage, x, y, z) cell is live at any instant, and a commit credits
//! only that cell. The single-dimension [`StageClock`](crate::StageClock)
//! is the degenerate 1×1×1 case.

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use crate::api::report::StageReport;
use crate::api::stage::Stage;

/// One z-slice: a `num_y × num_x` plane of accumulators per stage, idle
/// sentinel plane last.
#[derive(Debug, Clone)]
pub struct StageGrid {
    planes: Vec<Vec<Duration>>,
    num_x: usize,
    num_y: usize,
}

impl StageGrid {
    fn new(num_stages: usize, num_x: usize, num_y: usize) -> Self {
        Self {
            planes: vec![vec![Duration::ZERO; num_x * num_y]; num_stages],
            num_x,
            num_y,
        }
    }

    /// Accumulated time in one cell. `stage_index` runs over declaration
    /// order with the idle sentinel last.
    pub fn get(&self, stage_index: usize, x: usize, y: usize) -> Duration {
        assert!(
            stage_index < self.planes.len(),
            "stage index {stage_index} out of range ({} planes)",
            self.planes.len()
        );
        assert!(
            x < self.num_x && y < self.num_y,
            "cell ({x}, {y}) outside {}x{} grid",
            self.num_x,
            self.num_y
        );
        self.planes[stage_index][y * self.num_x + x]
    }

    /// Sum across one stage's whole plane.
    pub fn stage_total(&self, stage_index: usize) -> Duration {
        self.planes[stage_index].iter().sum()
    }

    /// Grid width.
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    /// Grid height.
    pub fn num_y(&self) -> usize {
        self.num_y
    }

    fn add(&mut self, stage_index: usize, x: usize, y: usize, d: Duration) {
        self.planes[stage_index][y * self.num_x + x] += d;
    }
}

/// Stage clock with per-bucket attribution.
///
/// Generalizes [`StageClock`](crate::StageClock): alongside the current
/// stage, the cursor carries an (x, y, z) coordinate, and commits credit
/// the live (stage, x, y, z) cell. One checkpoint is shared across all
/// grids. Same ownership model as the single-dimension clock: one logical
/// context, no internal locking.
#[derive(Debug, Clone)]
pub struct BucketedStageClock<S: Stage> {
    grids: RefCell<Vec<StageGrid>>,
    num_x: usize,
    num_y: usize,
    num_z: usize,
    current: Cell<S>,
    cur_x: Cell<usize>,
    cur_y: Cell<usize>,
    cur_z: Cell<usize>,
    checkpoint: Cell<Instant>,
}

impl<S: Stage> BucketedStageClock<S> {
    /// Degenerate 1×1×1 clock, equivalent to a `StageClock`.
    pub fn new() -> Self {
        Self::with_dims(1, 1, 1)
    }

    /// Clock with `num_z` grids of `num_y × num_x` cells per stage,
    /// zero-initialized, cursor at (idle, 0, 0, 0).
    pub fn with_dims(num_x: usize, num_y: usize, num_z: usize) -> Self {
        assert!(
            num_x > 0 && num_y > 0 && num_z > 0,
            "bucket dimensions must be non-zero"
        );
        Self {
            grids: RefCell::new(
                (0..num_z)
                    .map(|_| StageGrid::new(S::COUNT + 1, num_x, num_y))
                    .collect(),
            ),
            num_x,
            num_y,
            num_z,
            current: Cell::new(S::IDLE),
            cur_x: Cell::new(0),
            cur_y: Cell::new(0),
            cur_z: Cell::new(0),
            checkpoint: Cell::new(Instant::now()),
        }
    }

    /// Commit the interval since the last checkpoint to the live cell,
    /// then move the cursor to (s, x, y, z).
    ///
    /// The bucketed analogue of
    /// [`switch_stage`](crate::StageClock::switch_stage). Out-of-range
    /// coordinates are a caller contract violation and panic rather than
    /// misattribute time.
    pub fn count(&self, s: S, x: usize, y: usize, z: usize) -> &Self {
        assert!(
            x < self.num_x && y < self.num_y && z < self.num_z,
            "bucket ({x}, {y}, {z}) outside {}x{}x{} clock",
            self.num_x,
            self.num_y,
            self.num_z
        );
        let now = Instant::now();
        let elapsed = now - self.checkpoint.get();
        self.grids.borrow_mut()[self.cur_z.get()].add(
            self.current.get().index(),
            self.cur_x.get(),
            self.cur_y.get(),
            elapsed,
        );
        self.checkpoint.set(now);
        self.current.set(s);
        self.cur_x.set(x);
        self.cur_y.set(y);
        self.cur_z.set(z);
        self
    }

    /// Re-anchor without crediting and make `s` the cursor stage.
    pub fn start(&self, s: S) {
        self.checkpoint.set(Instant::now());
        self.current.set(s);
    }

    /// Flush the live cell and leave the cursor stage as `s`.
    ///
    /// Unlike the single-dimension `stop`, this goes through
    /// [`count`](Self::count) at the current coordinates and therefore
    /// re-anchors the checkpoint.
    pub fn stop(&self, s: S) {
        let (x, y, z) = (self.cur_x.get(), self.cur_y.get(), self.cur_z.get());
        self.count(s, x, y, z);
    }

    /// Number of accumulator planes per grid, idle sentinel included.
    pub fn num_stages(&self) -> usize {
        S::COUNT + 1
    }

    /// The cursor stage.
    pub fn current_stage(&self) -> S {
        self.current.get()
    }

    /// The cursor x coordinate.
    pub fn cur_x(&self) -> usize {
        self.cur_x.get()
    }

    /// The cursor y coordinate.
    pub fn cur_y(&self) -> usize {
        self.cur_y.get()
    }

    /// The cursor z coordinate.
    pub fn cur_z(&self) -> usize {
        self.cur_z.get()
    }

    /// (num_x, num_y, num_z).
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.num_x, self.num_y, self.num_z)
    }

    /// Accumulated time in one cell.
    pub fn cell(&self, s: S, x: usize, y: usize, z: usize) -> Duration {
        assert!(
            z < self.num_z,
            "slice {z} outside clock with {} grids",
            self.num_z
        );
        self.grids.borrow()[z].get(s.index(), x, y)
    }

    /// Clone of the grid collection, for external aggregation or export.
    pub fn snapshot(&self) -> Vec<StageGrid> {
        self.grids.borrow().clone()
    }

    /// Element-wise addition of `other`'s cells into this clock.
    ///
    /// Merging clocks built with different dimensions is a contract
    /// violation and panics.
    pub fn merge(&self, other: &Self) -> &Self {
        assert!(
            self.dims() == other.dims(),
            "cannot merge clocks with different bucket dimensions: {:?} vs {:?}",
            self.dims(),
            other.dims()
        );
        let mut mine = self.grids.borrow_mut();
        let theirs = other.grids.borrow();
        for (g1, g2) in mine.iter_mut().zip(theirs.iter()) {
            for (p1, p2) in g1.planes.iter_mut().zip(g2.planes.iter()) {
                for (a, b) in p1.iter_mut().zip(p2.iter()) {
                    *a += *b;
                }
            }
        }
        self
    }

    /// Per-stage totals summed across every cell, idle excluded.
    pub fn report(&self) -> StageReport {
        let grids = self.grids.borrow();
        let totals: Vec<Duration> = (0..S::COUNT)
            .map(|i| grids.iter().map(|g| g.stage_total(i)).sum())
            .collect();
        StageReport::from_totals(S::NAMES, &totals)
    }
}

impl<S: Stage> Default for BucketedStageClock<S> {
    fn default() -> Self {
        Self::new()
    }
}
