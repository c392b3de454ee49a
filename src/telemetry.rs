/*!
 * Diagnostics
 * Structured tracing to stderr, keeping stdout for reports
 */

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "SCHED_MODEL_LOG";
pub const LOG_JSON_ENV: &str = "SCHED_MODEL_LOG_JSON";

/// Initialize the global tracing subscriber.
///
/// Environment variables:
/// - SCHED_MODEL_LOG: EnvFilter directives (default: warn)
/// - SCHED_MODEL_LOG_JSON: emit JSON lines when set to 1 or true
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(LOG_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }
    debug!(json = use_json, "tracing initialized");
}
