//! Single-dimension stage clock: commit-on-switch accumulation.

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use crate::api::report::StageReport;
use crate::api::stage::Stage;

/// Accumulates wall-clock time per stage for one execution context.
///
/// The clock tracks a single current stage and a checkpoint timestamp.
/// Every [`switch_stage`](Self::switch_stage) commits the interval since
/// the checkpoint to whichever stage was active, then re-anchors. A clock
/// is owned and mutated by exactly one logical context; there is no
/// internal locking. Mutation goes through `&self` (the state lives in
/// `Cell`s) so that scope guards can nest freely.
///
/// # Example
///
/// ```rust
/// stagetime::stages! {
///     enum Work { Load => "load", Process => "process" }
/// }
///
/// let clock = stagetime::StageClock::new();
/// clock.start(Work::Load);
/// // ... loading ...
/// clock.switch_stage(Work::Process);
/// // ... processing ...
/// clock.stop(Work::Process);
/// ```
#[derive(Debug, Clone)]
pub struct StageClock<S: Stage> {
    durations: RefCell<Vec<Duration>>,
    current: Cell<S>,
    checkpoint: Cell<Instant>,
}

impl<S: Stage> StageClock<S> {
    /// Create a clock with zeroed accumulators, the idle sentinel as the
    /// current stage, and the checkpoint anchored to now.
    pub fn new() -> Self {
        Self {
            durations: RefCell::new(vec![Duration::ZERO; S::COUNT + 1]),
            current: Cell::new(S::IDLE),
            checkpoint: Cell::new(Instant::now()),
        }
    }

    /// Commit the interval since the last checkpoint to the active stage,
    /// then make `s` active.
    ///
    /// The sole mutating primitive; chainable. Switching to the stage
    /// that is already active folds the interval into the same
    /// accumulator. A `switch_stage` before any [`start`](Self::start)
    /// charges time-since-construction to the idle sentinel, which is
    /// excluded from reported totals.
    pub fn switch_stage(&self, s: S) -> &Self {
        let now = Instant::now();
        let cur = self.current.get();
        self.durations.borrow_mut()[cur.index()] += now - self.checkpoint.get();
        self.checkpoint.set(now);
        self.current.set(s);
        self
    }

    /// Re-anchor without crediting: discards time elapsed since the last
    /// checkpoint and makes `s` active.
    pub fn start(&self, s: S) {
        self.checkpoint.set(Instant::now());
        self.current.set(s);
    }

    /// Credit the interval since the last checkpoint to `s` without
    /// moving the checkpoint or the cursor: a final flush of a partial
    /// interval.
    pub fn stop(&self, s: S) {
        let now = Instant::now();
        self.durations.borrow_mut()[s.index()] += now - self.checkpoint.get();
    }

    /// The currently active stage.
    pub fn current_stage(&self) -> S {
        self.current.get()
    }

    /// Element-wise addition of `other`'s accumulators into this clock.
    ///
    /// Both operands share the stage enum as their type parameter, so a
    /// shape mismatch is unrepresentable.
    pub fn merge(&self, other: &Self) -> &Self {
        let mut mine = self.durations.borrow_mut();
        let theirs = other.durations.borrow();
        debug_assert_eq!(mine.len(), theirs.len());
        for (a, b) in mine.iter_mut().zip(theirs.iter()) {
            *a += *b;
        }
        self
    }

    /// Zero all accumulators and re-anchor for reuse.
    pub fn reset(&self) {
        for d in self.durations.borrow_mut().iter_mut() {
            *d = Duration::ZERO;
        }
        self.current.set(S::IDLE);
        self.checkpoint.set(Instant::now());
    }

    /// Accumulated time for one stage.
    pub fn stage_total(&self, s: S) -> Duration {
        self.durations.borrow()[s.index()]
    }

    /// Snapshot of all accumulators in declaration order, idle sentinel
    /// last.
    pub fn totals(&self) -> Vec<Duration> {
        self.durations.borrow().clone()
    }

    /// Per-stage totals and percentages, idle excluded.
    ///
    /// A pure read: calling it repeatedly without intervening mutation
    /// yields identical reports.
    pub fn report(&self) -> StageReport {
        StageReport::from_totals(S::NAMES, &self.durations.borrow()[..S::COUNT])
    }
}

impl<S: Stage> Default for StageClock<S> {
    fn default() -> Self {
        Self::new()
    }
}
