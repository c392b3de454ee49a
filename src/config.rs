/*!
 * Simulation Configuration
 * Policy selection, seeding and output format
 */

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::core::Cycles;
use crate::error::ConfigError;

/// One scheduling run: which algorithm, and with which quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: Cycles },
    Random { quantum: Cycles },
}

impl Policy {
    /// The fixed run sequence used when no policy is requested explicitly.
    pub fn default_sequence() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::RoundRobin { quantum: 50 },
            Policy::RoundRobin { quantum: 100 },
            Policy::Random { quantum: 50 },
        ]
    }

    /// Header line printed before the run's completion events.
    pub fn header(&self) -> String {
        match self {
            Policy::Fcfs => "Running first-come, first-served scheduler.".to_string(),
            Policy::Sjf => "Running shortest first scheduler.".to_string(),
            Policy::RoundRobin { quantum } => {
                format!("Running round robin scheduler with quantum {quantum}.")
            }
            Policy::Random { quantum } => {
                format!("Running random scheduler with quantum {quantum}.")
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "fcfs"),
            Policy::Sjf => write!(f, "sjf"),
            Policy::RoundRobin { quantum } => write!(f, "rr:{quantum}"),
            Policy::Random { quantum } => write!(f, "random:{quantum}"),
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    /// Accepts `fcfs`, `sjf`, `rr:<quantum>` and `random:<quantum>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (name, quantum) = match lowered.split_once(':') {
            Some((name, quantum)) => (name, Some(quantum)),
            None => (lowered.as_str(), None),
        };

        let parse_quantum = |name: &str| -> Result<Cycles, ConfigError> {
            let raw = quantum.ok_or_else(|| ConfigError::MissingQuantum(name.to_string()))?;
            match raw.trim().parse::<Cycles>() {
                Ok(q) if q > 0 => Ok(q),
                _ => Err(ConfigError::InvalidQuantum {
                    policy: name.to_string(),
                    value: raw.to_string(),
                }),
            }
        };

        match name {
            "fcfs" if quantum.is_none() => Ok(Policy::Fcfs),
            "sjf" if quantum.is_none() => Ok(Policy::Sjf),
            "rr" | "round-robin" => Ok(Policy::RoundRobin {
                quantum: parse_quantum("rr")?,
            }),
            "random" => Ok(Policy::Random {
                quantum: parse_quantum("random")?,
            }),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable completion lines
    #[default]
    Text,
    /// JSON array of run reports
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub policies: Vec<Policy>,
    // None draws a fresh seed from OS entropy
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policies: Policy::default_sequence(),
            seed: None,
            format: OutputFormat::Text,
        }
    }
}
