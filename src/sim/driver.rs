use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, info_span};

use super::job::Job;
use super::report::RunReport;
use crate::{
    config::Policy,
    core::{
        driver::SchedCore,
        event::SchedEvent,
        state::{ProcessRecord, Workload},
    },
    error::{SimError, WorkloadError},
    scheduler::{FcfsScheduler, RandomScheduler, RoundRobinScheduler, Scheduler, SjfScheduler},
};

/// Runs policies back to back over one workload.
///
/// The workload is reset before every run, so each policy starts from the
/// loaded state no matter what ran before it. All randomized runs draw from
/// the same seeded generator.
pub struct Sim {
    pub workload: Workload,
    rng: StdRng,
    seed: u64,
}

impl Sim {
    /// Build the workload from `jobs`, rejecting records it cannot hold.
    pub fn new(jobs: Vec<Job>, seed: u64) -> Result<Self, WorkloadError> {
        Ok(Self {
            workload: Workload::from_jobs(jobs)?,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run(&mut self, policy: Policy) -> Result<RunReport, SimError> {
        self.run_traced(policy).map(|(report, _)| report)
    }

    /// Like [`Sim::run`], but also hands back every scheduling event.
    pub fn run_traced(&mut self, policy: Policy) -> Result<(RunReport, Vec<SchedEvent>), SimError> {
        let _span = info_span!("run", %policy).entered();
        self.workload.reset();

        let ctx = &mut self.workload;
        let (events, steps) = match policy {
            Policy::Fcfs => drive(ctx, FcfsScheduler::new()),
            Policy::Sjf => drive(ctx, SjfScheduler::new()),
            Policy::RoundRobin { quantum } => drive(ctx, RoundRobinScheduler::new(quantum)),
            Policy::Random { quantum } => drive(ctx, RandomScheduler::new(quantum, &mut self.rng)),
        }?;

        let completions = events.iter().filter_map(SchedEvent::completion).collect();
        let report = RunReport::new(policy, completions, &self.workload, steps);
        info!(
            average_turnaround = report.average_turnaround,
            steps,
            clock = self.workload.now(),
            "run finished"
        );
        Ok((report, events))
    }

    pub fn run_all(&mut self, policies: &[Policy]) -> Result<Vec<RunReport>, SimError> {
        policies.iter().map(|&policy| self.run(policy)).collect()
    }

    pub fn jobs_map<T>(&self, f: impl Fn(&ProcessRecord) -> T) -> impl Iterator<Item = T> {
        self.workload.records_map(f)
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.workload.all_complete()
    }
}

fn drive<S: Scheduler>(ctx: &mut Workload, scheduler: S) -> Result<(Vec<SchedEvent>, u64), SimError> {
    let mut core = SchedCore::new(ctx, scheduler);
    let events = core.run()?;
    Ok((events, core.observer().steps()))
}
