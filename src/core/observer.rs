use super::state::{Cycles, ProcessStatus, Workload};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &Workload) {
        self.step += 1;

        let mut dispatched: Cycles = 0;
        let mut running = 0;
        for record in ctx.records() {
            let id = record.id;
            debug_assert!(
                record.progress <= record.total_cycles,
                "Process {id} overran its demand ({} > {})",
                record.progress,
                record.total_cycles
            );
            debug_assert_eq!(
                record.turnaround_time != 0,
                record.is_complete(),
                "Process {id} turnaround must be stamped exactly on completion"
            );
            if record.status == ProcessStatus::Running {
                running += 1;
                debug_assert_eq!(
                    ctx.current(),
                    ctx.records().iter().position(|r| r.id == id),
                    "Running process {id} is not the current process"
                );
            }
            dispatched += record.progress;
        }

        debug_assert!(running <= 1, "{running} processes marked Running at once");
        debug_assert_eq!(
            ctx.now(),
            dispatched,
            "Master clock diverged from dispatched cycles"
        );
        debug_assert!(
            ctx.now() <= ctx.total_demand(),
            "Master clock ran past total demand"
        );
    }
}
