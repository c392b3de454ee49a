use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{Decision, Scheduler};
use crate::core::state::{Cycles, ProcessIdx, Workload};

// Shorter jobs first, then earlier workload position.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct JobLength {
    cycles: Cycles,
    idx: ProcessIdx,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop JobLength's Ord
impl PartialOrd for JobLength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JobLength {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cycles
            .cmp(&self.cycles)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// Non-preemptive shortest-job-first.
#[derive(Debug)]
pub struct SjfScheduler {
    queue: KeyedPriorityQueue<ProcessIdx, JobLength>,
}

impl SjfScheduler {
    pub fn new() -> Self {
        Self {
            queue: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn init(&mut self, ctx: &Workload) {
        self.queue = KeyedPriorityQueue::new();
        for (idx, record) in ctx.records().iter().enumerate() {
            if !record.is_complete() {
                let length = JobLength {
                    cycles: record.total_cycles,
                    idx,
                };
                self.queue.push(idx, length);
            }
        }
    }

    fn select(&mut self, ctx: &Workload) -> Option<Decision> {
        // Bounded by the queue: each record is pushed at most once per run
        while let Some((idx, _)) = self.queue.pop() {
            if !ctx.record(idx).is_complete() {
                return Some(Decision::RunToCompletion(idx));
            }
        }
        None
    }
}
