use std::fmt;

use average::Estimate;
use serde::Serialize;

use crate::config::Policy;
use crate::core::{CompletionEvent, Workload};

/// Outcome of running one policy over the workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub policy: Policy,
    pub completions: Vec<CompletionEvent>,
    pub average_turnaround: f64,
    pub steps: u64,
}

impl RunReport {
    pub fn new(policy: Policy, completions: Vec<CompletionEvent>, ctx: &Workload, steps: u64) -> Self {
        Self {
            policy,
            completions,
            average_turnaround: average_turnaround(ctx),
            steps,
        }
    }
}

/// Mean turnaround over every record; an empty workload averages to 0.
pub fn average_turnaround(ctx: &Workload) -> f64 {
    if ctx.is_empty() {
        return 0.0;
    }
    avg(ctx.records_map(|r| r.turnaround_time as f64))
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.policy.header())?;
        for completion in &self.completions {
            writeln!(
                f,
                "Process {} finishes on cycle {}",
                completion.process, completion.cycle
            )?;
        }
        writeln!(f, "Average turnaround time: {:.2}", self.average_turnaround)
    }
}

/// Render runs in text form, separated by blank lines.
pub fn render_text(reports: &[RunReport]) -> String {
    reports
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
