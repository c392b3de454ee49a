pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use event::{CompletionEvent, SchedEvent};
pub use state::{Cycles, ProcessId, ProcessIdx, ProcessRecord, ProcessStatus, Slice, Workload};
