pub mod config;
pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;
pub mod telemetry;

pub use config::{OutputFormat, Policy, SimConfig};
pub use crate::core::{CompletionEvent, SchedEvent, Workload};
pub use error::{ConfigError, LoadError, SimError, WorkloadError};
pub use scheduler::Scheduler;
pub use sim::{Job, RunReport, Sim};
