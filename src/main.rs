use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sched_model::{
    OutputFormat, Policy, SimConfig,
    sim::{Sim, load_jobs, render_text},
    telemetry::init_tracing,
};

/// Replay a fixed workload under several CPU scheduling policies
#[derive(Parser, Debug)]
#[command(name = "sched-model")]
#[command(about = "Compare completion and turnaround times across scheduling policies", long_about = None)]
struct Args {
    /// Workload file with one `id,cycles` record per line
    input: PathBuf,

    /// Policy to run (fcfs, sjf, rr:<quantum>, random:<quantum>); repeatable
    #[arg(short, long = "policy", value_name = "POLICY")]
    policies: Vec<Policy>,

    /// Seed for the randomized scheduler
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Args> for SimConfig {
    fn from(args: Args) -> Self {
        let defaults = SimConfig::default();
        Self {
            policies: if args.policies.is_empty() {
                defaults.policies
            } else {
                args.policies
            },
            seed: args.seed,
            format: args.format,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let input = args.input.clone();
    let config = SimConfig::from(args);

    let jobs = load_jobs(&input)
        .with_context(|| format!("failed to load workload from {}", input.display()))?;

    let mut sim = Sim::new(jobs, config.seed.unwrap_or_else(rand::random))
        .with_context(|| format!("invalid workload in {}", input.display()))?;
    info!(seed = sim.seed(), runs = config.policies.len(), "starting simulation");

    let reports = sim
        .run_all(&config.policies)
        .context("simulation aborted")?;

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}
