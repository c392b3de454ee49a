use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::state::{Cycles, ProcessId, Workload};
use crate::error::{LoadError, WorkloadError};

/// One `id,cycles` line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: ProcessId,
    pub cycles: Cycles,
}

pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let jobs = parse_jobs(&text)?;
    info!(path = %path.display(), processes = jobs.len(), "loaded workload");
    Ok(jobs)
}

/// Parse `id,cycles` records, one per line, keeping input order.
///
/// Blank lines are ignored. Records are checked against the same rules as
/// [`Workload::add_process`]. Line numbers in errors are 1-based.
pub fn parse_jobs(text: &str) -> Result<Vec<Job>, LoadError> {
    let mut jobs = Vec::new();
    let mut accepted = Workload::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = line_no + 1;
        let content = raw.trim();
        if content.is_empty() {
            continue;
        }

        let job = parse_record(line, content)?;
        accepted
            .add_process(job.id, job.cycles)
            .map_err(|err| LoadError::at_line(line, err))?;
        jobs.push(job);
    }

    Ok(jobs)
}

fn parse_record(line: usize, content: &str) -> Result<Job, LoadError> {
    let mut fields = content.split(',');
    let (Some(id), Some(cycles), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(LoadError::malformed(line, content, "expected exactly two fields"));
    };

    let id: ProcessId = id
        .trim()
        .parse()
        .map_err(|e| LoadError::malformed(line, content, format!("process id: {e}")))?;
    let cycles: Cycles = cycles
        .trim()
        .parse()
        .map_err(|e| LoadError::malformed(line, content, format!("cycle count: {e}")))?;

    Ok(Job { id, cycles })
}

impl Workload {
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Result<Self, WorkloadError> {
        let mut ctx = Workload::new();
        for job in jobs {
            ctx.add_process(job.id, job.cycles)?;
        }
        Ok(ctx)
    }
}
