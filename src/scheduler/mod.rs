pub mod fcfs;
pub mod random;
pub mod round_robin;
pub mod sjf;

use crate::core::state::{Cycles, ProcessIdx, Workload};
pub use fcfs::FcfsScheduler;
pub use random::RandomScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// What the driver should do with the CPU for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    RunToCompletion(ProcessIdx),
    RunFor(ProcessIdx, Cycles),
    // Visit a record without running it
    Skip(ProcessIdx),
}

/// Selection strategy plugged into [`crate::core::SchedCore`].
///
/// The driver owns dispatch and completion bookkeeping; a scheduler only
/// decides which record gets the CPU next and for how long.
pub trait Scheduler {
    /// Called once per run, after the workload has been reset.
    fn init(&mut self, _ctx: &Workload) {}

    /// Only called while the workload still has remaining demand.
    fn select(&mut self, ctx: &Workload) -> Option<Decision>;
}
