//! Join-point aggregation of per-worker clocks.

use crossbeam_queue::SegQueue;

use crate::api::clock::StageClock;
use crate::api::stage::Stage;

/// Collects finished per-worker clocks for merging at a join point.
///
/// Each worker measures into its own [`StageClock`] and hands it off
/// with [`submit`](Self::submit) when its unit of work completes;
/// submission is lock-free and callable from any thread. The
/// synchronizing caller drains the queue with
/// [`collect`](Self::collect) after all workers have finished. `collect`
/// performs no synchronization of its own and assumes no concurrent
/// submitter.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::thread;
///
/// stagetime::stages! {
///     enum Work { Decode => "decode" }
/// }
///
/// let agg = Arc::new(stagetime::ClockAggregator::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let agg = Arc::clone(&agg);
///         thread::spawn(move || {
///             let clock = stagetime::StageClock::new();
///             clock.start(Work::Decode);
///             // ... work ...
///             clock.stop(Work::Decode);
///             agg.submit(clock);
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// println!("{}", agg.collect().report());
/// ```
pub struct ClockAggregator<S: Stage> {
    queue: SegQueue<StageClock<S>>,
}

impl<S: Stage> ClockAggregator<S> {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self {
            queue: SegQueue::new(),
        }
    }

    /// Hand off a finished clock.
    pub fn submit(&self, clock: StageClock<S>) {
        self.queue.push(clock);
    }

    /// Number of submitted clocks not yet collected.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when no clock is waiting to be collected.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain every submitted clock into a single merged clock.
    pub fn collect(&self) -> StageClock<S> {
        let merged = StageClock::new();
        while let Some(clock) = self.queue.pop() {
            merged.merge(&clock);
        }
        merged
    }
}

impl<S: Stage> Default for ClockAggregator<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    crate::stages! {
        enum TestStage {
            Alpha => "alpha",
            Beta => "beta",
        }
    }

    #[test]
    fn test_collect_merges_submitted_clocks() {
        let agg = ClockAggregator::new();

        let a = StageClock::new();
        a.start(TestStage::Alpha);
        a.stop(TestStage::Alpha);

        let b = StageClock::new();
        b.start(TestStage::Beta);
        b.stop(TestStage::Beta);

        let expected: Vec<Duration> = a
            .totals()
            .iter()
            .zip(b.totals())
            .map(|(x, y)| *x + y)
            .collect();

        agg.submit(a);
        agg.submit(b);
        assert_eq!(agg.len(), 2);

        let merged = agg.collect();
        assert_eq!(merged.totals(), expected);
        assert!(agg.is_empty());
    }

    #[test]
    fn test_collect_on_empty_aggregator_is_zeroed() {
        let agg = ClockAggregator::<TestStage>::new();
        let merged = agg.collect();
        assert!(merged.totals().iter().all(Duration::is_zero));
    }
}
