//! RAII scope guards: switch to a stage on entry, restore the previous
//! context on every exit path.
//!
//! Nesting guards reproduces call-stack-like attribution without an
//! explicit stack: each inner guard's "previous" is whatever the
//! enclosing guard most recently set, so unwinding restores stages in
//! exact reverse order of entry.

use crate::api::clock::StageClock;
use crate::api::grid::BucketedStageClock;
use crate::api::stage::Stage;

/// Brackets a code region with a stage switch.
///
/// Construction commits the interval-so-far to the caller's stage and
/// makes the new stage active; `Drop` performs the mirror operation,
/// crediting the bracketed region and restoring the caller's stage -
/// regardless of whether the region exits by fall-through, early return,
/// or panic.
///
/// # Example
///
/// ```rust
/// stagetime::stages! {
///     enum Work { Outer => "outer", Inner => "inner" }
/// }
///
/// let clock = stagetime::StageClock::new();
/// clock.start(Work::Outer);
/// {
///     let _scope = stagetime::StageGuard::new(&clock, Work::Inner);
///     // ... attributed to Inner ...
/// }
/// assert_eq!(clock.current_stage(), Work::Outer);
/// ```
pub struct StageGuard<'a, S: Stage> {
    clock: &'a StageClock<S>,
    previous: S,
}

impl<'a, S: Stage> StageGuard<'a, S> {
    /// Save the clock's current stage and switch to `stage`.
    pub fn new(clock: &'a StageClock<S>, stage: S) -> Self {
        let previous = clock.current_stage();
        clock.switch_stage(stage);
        Self { clock, previous }
    }
}

impl<S: Stage> Drop for StageGuard<'_, S> {
    fn drop(&mut self) {
        self.clock.switch_stage(self.previous);
    }
}

/// [`StageGuard`] for the bucketed clock: saves and restores the full
/// (stage, x, y, z) cursor.
pub struct StageGuard2D<'a, S: Stage> {
    clock: &'a BucketedStageClock<S>,
    previous: (S, usize, usize, usize),
}

impl<'a, S: Stage> StageGuard2D<'a, S> {
    /// Save the clock's cursor and count into (stage, x, y, z).
    pub fn new(clock: &'a BucketedStageClock<S>, stage: S, x: usize, y: usize, z: usize) -> Self {
        let previous = (
            clock.current_stage(),
            clock.cur_x(),
            clock.cur_y(),
            clock.cur_z(),
        );
        clock.count(stage, x, y, z);
        Self { clock, previous }
    }
}

impl<S: Stage> Drop for StageGuard2D<'_, S> {
    fn drop(&mut self) {
        let (s, x, y, z) = self.previous;
        self.clock.count(s, x, y, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::stages! {
        enum TestStage {
            Outer => "outer",
            Middle => "middle",
            Inner => "inner",
        }
    }

    #[test]
    fn test_guard_restores_previous_stage() {
        let clock = StageClock::new();
        clock.start(TestStage::Outer);
        {
            let _g = StageGuard::new(&clock, TestStage::Inner);
            assert_eq!(clock.current_stage(), TestStage::Inner);
        }
        assert_eq!(clock.current_stage(), TestStage::Outer);
    }

    #[test]
    fn test_nested_guards_unwind_in_reverse_order() {
        let clock = StageClock::new();
        clock.start(TestStage::Outer);
        {
            let _a = StageGuard::new(&clock, TestStage::Middle);
            {
                let _b = StageGuard::new(&clock, TestStage::Inner);
                assert_eq!(clock.current_stage(), TestStage::Inner);
            }
            assert_eq!(clock.current_stage(), TestStage::Middle);
        }
        assert_eq!(clock.current_stage(), TestStage::Outer);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn measured(clock: &StageClock<TestStage>, bail: bool) -> u32 {
            let _g = StageGuard::new(clock, TestStage::Inner);
            if bail {
                return 1;
            }
            2
        }

        let clock = StageClock::new();
        clock.start(TestStage::Outer);
        assert_eq!(measured(&clock, true), 1);
        assert_eq!(clock.current_stage(), TestStage::Outer);
        assert_eq!(measured(&clock, false), 2);
        assert_eq!(clock.current_stage(), TestStage::Outer);
    }

    #[test]
    fn test_guard2d_restores_full_cursor() {
        let clock = BucketedStageClock::with_dims(3, 3, 2);
        clock.start(TestStage::Outer);
        clock.count(TestStage::Outer, 2, 1, 1);
        {
            let _g = StageGuard2D::new(&clock, TestStage::Inner, 0, 0, 0);
            assert_eq!(clock.current_stage(), TestStage::Inner);
            assert_eq!((clock.cur_x(), clock.cur_y(), clock.cur_z()), (0, 0, 0));
        }
        assert_eq!(clock.current_stage(), TestStage::Outer);
        assert_eq!((clock.cur_x(), clock.cur_y(), clock.cur_z()), (2, 1, 1));
    }
}
