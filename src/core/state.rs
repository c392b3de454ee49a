use rustc_hash::FxHashSet;

use crate::error::WorkloadError;

// Index into the record Vec
pub type ProcessIdx = usize;
pub type ProcessId = u64;
pub type Cycles = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Ready,
    Running,
}

#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub total_cycles: Cycles,
    pub progress: Cycles,
    // Display only; completion is always derived from progress
    pub status: ProcessStatus,
    pub turnaround_time: Cycles,
}

impl ProcessRecord {
    fn new(id: ProcessId, total_cycles: Cycles) -> Self {
        Self {
            id,
            total_cycles,
            progress: 0,
            status: ProcessStatus::Ready,
            turnaround_time: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress == self.total_cycles
    }

    pub fn remaining(&self) -> Cycles {
        self.total_cycles - self.progress
    }
}

/// Outcome of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub ran: Cycles,
    pub completed: bool,
}

/// The simulation context: process table plus master clock.
///
/// Owned by the runner and lent to exactly one policy at a time. Records are
/// only ever added while the workload is being built; a run mutates their
/// progress and [`Workload::reset`] rewinds everything to the loaded state.
#[derive(Debug, Clone, Default)]
pub struct Workload {
    records: Vec<ProcessRecord>,
    ids: FxHashSet<ProcessId>,
    total_demand: Cycles,
    clock: Cycles,
    current: Option<ProcessIdx>,
}

impl Workload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process; rejects zero demand, reused ids and a total demand
    /// that no longer fits in [`Cycles`].
    pub fn add_process(
        &mut self,
        id: ProcessId,
        total_cycles: Cycles,
    ) -> Result<ProcessIdx, WorkloadError> {
        debug_assert_eq!(self.clock, 0, "Processes must be added before any run");

        if total_cycles == 0 {
            return Err(WorkloadError::ZeroCycles { id });
        }
        if self.ids.contains(&id) {
            return Err(WorkloadError::DuplicateId { id });
        }
        let total_demand = self
            .total_demand
            .checked_add(total_cycles)
            .ok_or(WorkloadError::DemandOverflow { id })?;

        let idx = self.records.len();
        self.ids.insert(id);
        self.records.push(ProcessRecord::new(id, total_cycles));
        self.total_demand = total_demand;
        Ok(idx)
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn record(&self, idx: ProcessIdx) -> &ProcessRecord {
        &self.records[idx]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_demand(&self) -> Cycles {
        self.total_demand
    }

    pub fn now(&self) -> Cycles {
        self.clock
    }

    pub fn remaining_demand(&self) -> Cycles {
        self.total_demand - self.clock
    }

    pub fn all_complete(&self) -> bool {
        self.clock == self.total_demand
    }

    pub fn current(&self) -> Option<ProcessIdx> {
        self.current
    }

    /// Run `idx` for at most `limit` cycles (`None` runs it to completion).
    ///
    /// Advances the record's progress and the master clock by the same amount
    /// and stamps the turnaround time when the record finishes.
    pub fn dispatch(&mut self, idx: ProcessIdx, limit: Option<Cycles>) -> Slice {
        debug_assert!(
            !self.records[idx].is_complete(),
            "Process {} dispatched after completion",
            self.records[idx].id
        );

        self.set_running(idx);

        let record = &mut self.records[idx];
        let ran = match limit {
            Some(quantum) => record.remaining().min(quantum),
            None => record.remaining(),
        };
        record.progress += ran;
        self.clock += ran;

        let completed = record.is_complete();
        if completed {
            record.turnaround_time = self.clock;
            record.status = ProcessStatus::Ready;
            self.current = None;
        }

        Slice { ran, completed }
    }

    fn set_running(&mut self, idx: ProcessIdx) {
        if let Some(prev) = self.current.replace(idx) {
            self.records[prev].status = ProcessStatus::Ready;
        }
        self.records[idx].status = ProcessStatus::Running;
    }

    pub fn reset(&mut self) {
        for record in &mut self.records {
            record.progress = 0;
            record.status = ProcessStatus::Ready;
            record.turnaround_time = 0;
        }
        self.clock = 0;
        self.current = None;
    }

    pub fn records_map<T>(&self, f: impl Fn(&ProcessRecord) -> T) -> impl Iterator<Item = T> {
        self.records.iter().map(f)
    }
}
