use super::{Decision, Scheduler};
use crate::core::state::{Cycles, ProcessIdx, Workload};

/// Cyclic dispatch with a fixed quantum.
///
/// Every record is visited in turn, finished or not. A finished record
/// still costs a (zero-work) visit before the cursor moves on.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    quantum: Cycles,
    cursor: ProcessIdx,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Cycles) -> Self {
        debug_assert!(quantum > 0, "Round robin needs a positive quantum");
        Self { quantum, cursor: 0 }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn init(&mut self, _ctx: &Workload) {
        self.cursor = 0;
    }

    fn select(&mut self, ctx: &Workload) -> Option<Decision> {
        if ctx.is_empty() {
            return None;
        }

        let idx = self.cursor;
        self.cursor = (self.cursor + 1) % ctx.len();

        if ctx.record(idx).is_complete() {
            Some(Decision::Skip(idx))
        } else {
            Some(Decision::RunFor(idx, self.quantum))
        }
    }
}
