//! Diagnostic logging on stderr.
//!
//! Stdout carries nothing but lookup results, so the subscriber always
//! writes to stderr. The filter comes from `TC_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "TC_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (tests, embedding callers) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
