use super::{Decision, Scheduler};
use crate::core::state::{ProcessIdx, Workload};

/// Runs every process to completion in workload order.
#[derive(Debug, Default)]
pub struct FcfsScheduler {
    next: ProcessIdx,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FcfsScheduler {
    fn init(&mut self, _ctx: &Workload) {
        self.next = 0;
    }

    fn select(&mut self, ctx: &Workload) -> Option<Decision> {
        let idx = (self.next..ctx.len()).find(|&idx| !ctx.record(idx).is_complete())?;
        self.next = idx + 1;
        Some(Decision::RunToCompletion(idx))
    }
}
