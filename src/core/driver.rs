use tracing::{debug, warn};

use super::{
    event::SchedEvent,
    observer::Observer,
    state::{Cycles, ProcessIdx, Workload},
};
use crate::{
    error::SimError,
    scheduler::{Decision, Scheduler},
};

pub struct SchedCore<'w, S: Scheduler> {
    pub ctx: &'w mut Workload,
    pub scheduler: S,
    observer: Observer,
    // Steps in a row that dispatched nothing
    idle_visits: usize,
}

impl<'w, S: Scheduler> SchedCore<'w, S> {
    pub fn new(ctx: &'w mut Workload, mut scheduler: S) -> Self {
        scheduler.init(ctx);
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            idle_visits: 0,
        }
    }

    /// Drive the scheduler until the master clock reaches total demand.
    pub fn run(&mut self) -> Result<Vec<SchedEvent>, SimError> {
        let mut events = Vec::new();
        while !self.ctx.all_complete() {
            events.extend(self.step()?);
        }
        Ok(events)
    }

    pub fn step(&mut self) -> Result<Vec<SchedEvent>, SimError> {
        let decision = match self.scheduler.select(self.ctx) {
            Some(decision) => decision,
            None => return Err(self.stalled()),
        };

        let mut events = Vec::with_capacity(2);
        match decision {
            Decision::RunToCompletion(idx) => self.dispatch(idx, None, &mut events)?,
            Decision::RunFor(idx, quantum) => self.dispatch(idx, Some(quantum), &mut events)?,
            Decision::Skip(idx) => {
                self.idle_visits += 1;
                // A full lap of skips means nothing is left to run
                if self.idle_visits > self.ctx.len() {
                    return Err(self.stalled());
                }
                events.push(SchedEvent::Skipped {
                    process: self.ctx.record(idx).id,
                });
            }
        }

        self.observer.observe(self.ctx);
        Ok(events)
    }

    fn dispatch(
        &mut self,
        idx: ProcessIdx,
        limit: Option<Cycles>,
        events: &mut Vec<SchedEvent>,
    ) -> Result<(), SimError> {
        if self.ctx.record(idx).is_complete() {
            return Err(self.stalled());
        }

        let slice = self.ctx.dispatch(idx, limit);
        if slice.ran == 0 {
            return Err(self.stalled());
        }
        self.idle_visits = 0;

        let process = self.ctx.record(idx).id;
        let clock = self.ctx.now();
        debug!(process, cycles = slice.ran, clock, "dispatched");
        events.push(SchedEvent::Dispatched {
            process,
            cycles: slice.ran,
            clock,
        });

        if slice.completed {
            debug!(process, cycle = clock, "completed");
            events.push(SchedEvent::Completed {
                process,
                cycle: clock,
            });
        }
        Ok(())
    }

    fn stalled(&self) -> SimError {
        let err = SimError::Stalled {
            clock: self.ctx.now(),
            remaining: self.ctx.remaining_demand(),
        };
        warn!(error = %err, "scheduler made no progress");
        err
    }

    pub fn now(&self) -> Cycles {
        self.ctx.now()
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
