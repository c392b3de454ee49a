/*!
 * Error Types
 * Load, configuration and simulation failures
 */

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{Cycles, ProcessId};

/// Failures while turning an input source into a workload.
///
/// Any of these aborts the program before a single policy runs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read workload file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed record {content:?}: {reason}")]
    Malformed {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("line {line}: process {id} demands zero cycles")]
    ZeroCycles { line: usize, id: ProcessId },

    #[error("line {line}: duplicate process id {id}")]
    DuplicateId { line: usize, id: ProcessId },

    #[error("line {line}: process {id} overflows total cycle demand")]
    DemandOverflow { line: usize, id: ProcessId },
}

impl LoadError {
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach the input line to a rejected record.
    pub fn at_line(line: usize, err: WorkloadError) -> Self {
        match err {
            WorkloadError::ZeroCycles { id } => Self::ZeroCycles { line, id },
            WorkloadError::DuplicateId { id } => Self::DuplicateId { line, id },
            WorkloadError::DemandOverflow { id } => Self::DemandOverflow { line, id },
        }
    }
}

/// Records a workload refuses to hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("process {id} demands zero cycles")]
    ZeroCycles { id: ProcessId },

    #[error("duplicate process id {id}")]
    DuplicateId { id: ProcessId },

    #[error("process {id} overflows total cycle demand")]
    DemandOverflow { id: ProcessId },
}

/// Rejected policy specifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown policy {0:?} (expected fcfs, sjf, rr:<quantum> or random:<quantum>)")]
    UnknownPolicy(String),

    #[error("policy {0:?} requires a quantum, e.g. {0}:50")]
    MissingQuantum(String),

    #[error("invalid quantum {value:?} for policy {policy:?}: must be a positive integer")]
    InvalidQuantum { policy: String, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("scheduler stalled at cycle {clock} with {remaining} cycles outstanding")]
    Stalled { clock: Cycles, remaining: Cycles },
}
