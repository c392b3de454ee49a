use rand::Rng;

use super::{Decision, Scheduler};
use crate::core::state::{Cycles, ProcessIdx, Workload};

/// Weighted-random dispatch with a fixed quantum.
///
/// Each step draws `r` uniformly from `[0, remaining demand)` and picks the
/// record whose cumulative remaining-cycles interval contains it, so a
/// process is chosen with probability proportional to the work it has left.
pub struct RandomScheduler<'r, R: Rng> {
    quantum: Cycles,
    rng: &'r mut R,
}

impl<'r, R: Rng> RandomScheduler<'r, R> {
    pub fn new(quantum: Cycles, rng: &'r mut R) -> Self {
        debug_assert!(quantum > 0, "Random scheduler needs a positive quantum");
        Self { quantum, rng }
    }
}

/// Map a draw in `[0, remaining demand)` onto the record owning that cycle.
///
/// Finished records have zero-width intervals and can never be picked.
pub fn pick_weighted(ctx: &Workload, draw: Cycles) -> Option<ProcessIdx> {
    let mut interval_end: Cycles = 0;
    for (idx, record) in ctx.records().iter().enumerate() {
        interval_end += record.remaining();
        if draw < interval_end {
            return Some(idx);
        }
    }
    None
}

impl<R: Rng> Scheduler for RandomScheduler<'_, R> {
    fn select(&mut self, ctx: &Workload) -> Option<Decision> {
        let remaining = ctx.remaining_demand();
        if remaining == 0 {
            return None;
        }

        let draw = self.rng.random_range(0..remaining);
        pick_weighted(ctx, draw).map(|idx| Decision::RunFor(idx, self.quantum))
    }
}
