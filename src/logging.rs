//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `naija_voice=trace`).
pub const LOG_ENV: &str = "NAIJA_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
