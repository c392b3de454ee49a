pub mod driver;
pub mod job;
pub mod report;

pub use driver::Sim;
pub use job::{Job, load_jobs, parse_jobs};
pub use report::{RunReport, render_text};
