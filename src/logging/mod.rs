//! Logging initialization with environment-based formatters
//!
//! - Production: structured JSON logs for log aggregation
//! - Sandbox: human-readable, colored logs for development

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the current environment.
///
/// Filtering follows `RUST_LOG` (default `info`). Returns `false` when a
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_logging() -> bool {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok()
    }
}

/// `true` for `production` or `prod`, which switch logging to JSON.
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}
