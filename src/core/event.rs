use serde::Serialize;

use crate::core::{Cycles, ProcessId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedEvent {
    Dispatched {
        process: ProcessId,
        cycles: Cycles,
        clock: Cycles,
    },
    Completed {
        process: ProcessId,
        cycle: Cycles,
    },
    // Cyclic visit to a record that had nothing left to run
    Skipped {
        process: ProcessId,
    },
}

/// A process finishing, stamped with the master clock at that instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionEvent {
    pub process: ProcessId,
    pub cycle: Cycles,
}

impl SchedEvent {
    pub fn completion(&self) -> Option<CompletionEvent> {
        match *self {
            SchedEvent::Completed { process, cycle } => Some(CompletionEvent { process, cycle }),
            _ => None,
        }
    }

    pub fn dispatched_cycles(&self) -> Cycles {
        match *self {
            SchedEvent::Dispatched { cycles, .. } => cycles,
            _ => 0,
        }
    }
}
